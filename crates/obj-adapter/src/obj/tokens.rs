/// Lazy iterator over the whitespace-delimited tokens of one line.
///
/// Cloning it gives a second cursor starting at the same token, which lets a
/// parser peek at a line without consuming it.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    rest: &'a str,
}

impl<'a> Tokens<'a> {
    pub fn new(line: &'a str) -> Self {
        Self { rest: line }
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let trimmed = self.rest.trim_start_matches(is_separator);
        let end = trimmed.find(is_separator).unwrap_or(trimmed.len());
        let (token, rest) = trimmed.split_at(end);
        self.rest = rest;
        (!token.is_empty()).then_some(token)
    }
}

fn is_separator(c: char) -> bool {
    c.is_ascii_whitespace()
}
