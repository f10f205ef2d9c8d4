/// What to do with tokens after the last coordinate of a `v`, `vn` or `vt`
/// line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrailingComponents {
    /// Read the required coordinates and drop the rest (`v x y z w` keeps
    /// `x y z`).
    #[default]
    Ignore,
    /// Treat any extra token as a malformed line.
    Reject,
}

#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    pub trailing_components: TrailingComponents,
    /// Fail documents in which no face line locked a layout, instead of
    /// returning a mesh that is not valid.
    pub require_faces: bool,
}
