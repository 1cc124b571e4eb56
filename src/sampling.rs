use crate::models::Question;
use crate::selection::SamplingMode;
use rand::Rng;
use rand::seq::SliceRandom;

pub const QUESTION_LIMIT: usize = 20;

/// Shuffle a copy of `pool`, keeping at most `limit` questions in `Limited` mode.
pub fn sample<R: Rng + ?Sized>(
    pool: &[Question],
    mode: SamplingMode,
    limit: usize,
    rng: &mut R,
) -> Vec<Question> {
    let mut questions = pool.to_vec();
    questions.shuffle(rng);
    if mode == SamplingMode::Limited {
        questions.truncate(limit);
    }
    questions
}
