use std::collections::VecDeque;
use std::io::{self, BufRead};

/// Whitespace-token reader over line-based input.
///
/// Several answers may be typed on one line; they are handed out one at a
/// time before the next line is read.
#[derive(Debug)]
pub struct TokenReader<R> {
    input: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(input: R) -> Self {
        Self { input, pending: VecDeque::new() }
    }

    /// Next token, or `None` once the input is exhausted.
    pub fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending.extend(line.split_whitespace().map(str::to_string));
        }
    }

    /// Drops whatever is left of the current line.
    pub fn discard_line(&mut self) {
        self.pending.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_span_lines_and_skip_blanks() {
        let mut reader = TokenReader::new("alice  secret\n\n 1\n".as_bytes());

        assert_eq!(reader.next_token().unwrap().as_deref(), Some("alice"));
        assert_eq!(reader.next_token().unwrap().as_deref(), Some("secret"));
        assert_eq!(reader.next_token().unwrap().as_deref(), Some("1"));
        assert_eq!(reader.next_token().unwrap(), None);
    }

    #[test]
    fn discard_line_drops_rest_of_line() {
        let mut reader = TokenReader::new("abc def ghi\n2\n".as_bytes());

        assert_eq!(reader.next_token().unwrap().as_deref(), Some("abc"));
        reader.discard_line();
        assert_eq!(reader.next_token().unwrap().as_deref(), Some("2"));
    }
}
