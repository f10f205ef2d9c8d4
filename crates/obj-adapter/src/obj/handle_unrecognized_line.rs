use tracing::trace;

pub fn handle_unrecognized_line(line_number: usize, line: &str) {
    let tag = line.split_ascii_whitespace().next().unwrap_or(line);
    trace!(line_number, tag, "unsupported statement ignored");
}
