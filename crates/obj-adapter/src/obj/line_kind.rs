/// What a single `.obj` line holds. Payloads are the text after the tag and
/// its separator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    Blank,
    Comment,
    Vertex(&'a str),
    Normal(&'a str),
    Texture(&'a str),
    Face(&'a str),
    /// Any statement this crate does not read (`o`, `g`, `s`, `mtllib`, ...).
    /// Holds the trimmed line.
    Other(&'a str),
}

/// Classifies a line by its tag. Leading spaces and tabs are skipped, trailing
/// whitespace is left to the field parsers.
pub fn classify_line(line: &str) -> LineKind<'_> {
    let line = line.trim_start_matches([' ', '\t']);

    if line.is_empty() {
        return LineKind::Blank;
    }
    if line.starts_with('#') {
        return LineKind::Comment;
    }

    // `vn` and `vt` before `v`
    if let Some(payload) = strip_tag(line, "vn") {
        LineKind::Normal(payload)
    } else if let Some(payload) = strip_tag(line, "vt") {
        LineKind::Texture(payload)
    } else if let Some(payload) = strip_tag(line, "v") {
        LineKind::Vertex(payload)
    } else if let Some(payload) = strip_tag(line, "f") {
        LineKind::Face(payload)
    } else {
        LineKind::Other(line)
    }
}

fn strip_tag<'a>(line: &'a str, tag: &str) -> Option<&'a str> {
    let mut rest = line.strip_prefix(tag)?.chars();
    match rest.next() {
        Some(' ') => Some(rest.as_str()),
        _ => None,
    }
}
