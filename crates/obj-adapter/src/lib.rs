//! Reading and writing of Wavefront `.obj` geometry: positions, normals,
//! texture coordinates and polygonal faces.
//!
//! A document uses a single face layout (`f v`, `f v/vt`, `f v//vn` or
//! `f v/vt/vn`), locked by its first face line. Any malformed line rejects
//! the whole document.

mod mesh;
mod obj;

pub use mesh::{Face, FaceLayout, Mesh, Point3, TexCoord, VertexReference};
pub use obj::{
    classify_line, parse_obj, read_or_discard, ComponentError, FaceError, LineKind, ObjFile,
    ObjParsingError, ObjParsingErrorDetail, ParseOptions, Tokens, TrailingComponents,
};
