//! Line-based operator input.

use crate::errors::{AppError, AppResult};
use std::io::{self, BufRead, Write};

pub struct Prompt<R: BufRead> {
    input: R,
}

impl<R: BufRead> Prompt<R> {
    pub fn new(input: R) -> Self {
        Self { input }
    }

    /// Print `label`, then read one trimmed line. End of input is
    /// `AppError::InputClosed`. Bytes that are not UTF-8 are replaced, so
    /// the caller sees them as an unrecognised answer.
    pub fn read_line(&mut self, label: &str) -> AppResult<String> {
        print!("{}", label);
        io::stdout().flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            println!();
            return Err(AppError::InputClosed);
        }
        Ok(String::from_utf8_lossy(&buf).trim().to_string())
    }

    pub fn read_number(&mut self, label: &str) -> AppResult<i64> {
        let text = self.read_line(label)?;
        text.parse::<i64>()
            .map_err(|_| AppError::InvalidMenuChoice(text))
    }
}
