// src/views/number_entry.rs
//
// Edit buffer for typing an exact value into a settings row.

use crate::store::FieldKey;

#[derive(Debug, Clone, PartialEq)]
pub struct NumberEntry {
    pub key: FieldKey,
    buffer: String,
}

impl NumberEntry {
    pub fn new(key: FieldKey, initial: &str) -> Self {
        Self {
            key,
            buffer: initial.to_string(),
        }
    }

    pub fn text(&self) -> &str {
        &self.buffer
    }

    /// Accepts digits, a single '.', and '-' as the first character.
    pub fn push(&mut self, ch: char) -> bool {
        let accepted = match ch {
            '0'..='9' => true,
            '.' => !self.buffer.contains('.'),
            '-' => self.buffer.is_empty(),
            _ => false,
        };
        if accepted {
            self.buffer.push(ch);
        }
        accepted
    }

    pub fn backspace(&mut self) {
        self.buffer.pop();
    }

    pub fn parse(&self) -> Option<f32> {
        self.buffer.parse::<f32>().ok().filter(|v| v.is_finite())
    }
}
