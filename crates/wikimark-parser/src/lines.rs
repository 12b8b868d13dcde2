//! Line splitting.
//!
//! Every engine pass works on exactly one line, so a span can never
//! reference tokens from two different lines.

/// Lazy, restartable iterator over the lines of a document.
///
/// Lines exclude their terminator; both `\n` and `\r\n` end a line.
/// A trailing terminator does not produce an extra empty line.
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    source: &'a str,
    rest: Option<&'a str>,
    line_number: usize,
}

impl<'a> Lines<'a> {
    /// Create an iterator positioned at the first line of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            rest: Some(source),
            line_number: 0,
        }
    }

    /// Rewind to the first line.
    pub fn restart(&mut self) {
        self.rest = Some(self.source);
        self.line_number = 0;
    }

    /// Number of lines yielded so far.
    pub fn line_number(&self) -> usize {
        self.line_number
    }
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let rest = self.rest?;
        if rest.is_empty() {
            self.rest = None;
            return None;
        }

        let line = match rest.find('\n') {
            Some(i) => {
                self.rest = Some(&rest[i + 1..]);
                &rest[..i]
            }
            None => {
                self.rest = None;
                rest
            }
        };
        self.line_number += 1;
        Some(line.strip_suffix('\r').unwrap_or(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_source() {
        assert_eq!(Lines::new("").count(), 0);
    }

    #[test]
    fn test_split_lines() {
        let lines: Vec<_> = Lines::new("a\nb\n\nc").collect();
        assert_eq!(lines, vec!["a", "b", "", "c"]);
    }

    #[test]
    fn test_trailing_newline() {
        let lines: Vec<_> = Lines::new("a\nb\n").collect();
        assert_eq!(lines, vec!["a", "b"]);
    }

    #[test]
    fn test_crlf() {
        let lines: Vec<_> = Lines::new("*a*\r\n*b*\r\n").collect();
        assert_eq!(lines, vec!["*a*", "*b*"]);
    }

    #[test]
    fn test_matches_std_lines() {
        let text = "one\r\ntwo\n\nthree\n";
        let ours: Vec<_> = Lines::new(text).collect();
        let std: Vec<_> = text.lines().collect();
        assert_eq!(ours, std);
    }

    #[test]
    fn test_restart() {
        let mut lines = Lines::new("x\ny");
        assert_eq!(lines.next(), Some("x"));
        assert_eq!(lines.line_number(), 1);
        lines.restart();
        assert_eq!(lines.line_number(), 0);
        assert_eq!(lines.collect::<Vec<_>>(), vec!["x", "y"]);
    }
}
