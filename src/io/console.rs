use std::collections::VecDeque;
use std::io::{self, BufRead};

/// Whitespace-delimited token reader over any buffered input. Refills
/// one line at a time so the rest of a bad line can be thrown away
/// before re-prompting.
pub struct Console<R> {
    reader: R,
    tokens: VecDeque<String>,
}

impl<R: BufRead> Console<R> {
    pub fn new(reader: R) -> Console<R> {
        Console {
            reader,
            tokens: VecDeque::new(),
        }
    }

    /// Next token, or `None` once the input is exhausted.
    pub fn read_token(&mut self) -> io::Result<Option<String>> {
        while self.tokens.is_empty() {
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.tokens
                .extend(line.split_whitespace().map(str::to_string));
        }

        Ok(self.tokens.pop_front())
    }

    /// Drops whatever is left of the current line.
    pub fn discard_line(&mut self) {
        self.tokens.clear();
    }
}
