use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::collections::VecDeque;
use std::io;

/// Source of single raw keypresses, no Enter required.
pub trait KeyInput {
    fn read_key(&mut self) -> io::Result<char>;
}

/// Reads keys from the terminal. Raw mode must already be enabled.
#[derive(Debug, Default)]
pub struct TerminalInput;

impl TerminalInput {
    pub fn new() -> Self {
        Self
    }
}

/// Map a key event to the character it produces, if any.
pub fn key_to_char(key: KeyEvent) -> Option<char> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some('q'),
        KeyCode::Char(c) => Some(c),
        KeyCode::Down => Some('j'),
        KeyCode::Up => Some('k'),
        _ => None,
    }
}

impl KeyInput for TerminalInput {
    fn read_key(&mut self) -> io::Result<char> {
        loop {
            if let Event::Key(key) = event::read()?
                && let Some(c) = key_to_char(key)
            {
                return Ok(c);
            }
        }
    }
}

/// Replays a fixed sequence of keys.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    keys: VecDeque<char>,
}

impl ScriptedInput {
    pub fn new(keys: &str) -> Self {
        Self {
            keys: keys.chars().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.keys.len()
    }
}

impl KeyInput for ScriptedInput {
    fn read_key(&mut self) -> io::Result<char> {
        self.keys
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "no more scripted keys"))
    }
}
