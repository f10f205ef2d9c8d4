mod components;
mod face;
mod handle_unrecognized_line;
mod line_kind;
mod normal;
mod options;
mod texture;
mod tokens;
mod vertex;

pub use components::ComponentError;
pub use face::FaceError;
pub use line_kind::{classify_line, LineKind};
pub use options::{ParseOptions, TrailingComponents};
pub use tokens::Tokens;

use face::parse_face_line;
use handle_unrecognized_line::handle_unrecognized_line;
use normal::parse_normal_line;
use texture::parse_texture_line;
use vertex::parse_vertex_line;

use std::{
    collections::TryReserveError,
    fmt::{Debug, Display},
    fs::File,
    io::{self, BufRead, BufReader, Read},
    path::Path,
    str::FromStr,
};

use thiserror::Error;
use tracing::{debug, warn};

use crate::{mesh::MeshBuilder, FaceLayout, Mesh};

/// Path of an `.obj` file to read a [`Mesh`] from.
pub struct ObjFile<'a>(pub &'a Path);

/// A rejected document: the reason and, when it comes from a line, the
/// 1-based number and content of that line.
pub struct ObjParsingError {
    line: Option<(usize, String)>,
    detail: ObjParsingErrorDetail,
}

#[derive(Debug, Error)]
pub enum ObjParsingErrorDetail {
    #[error("failed to open file: {0}")]
    FailedToOpenFile(#[source] io::Error),
    #[error("failed to read file: {0}")]
    FailedToReadFile(#[source] io::Error),

    #[error("allocation failure: {0}")]
    AllocationFailure(#[source] TryReserveError),

    #[error("invalid vertex data: {0}")]
    MalformedVertex(#[source] ComponentError),
    #[error("invalid vertex normal data: {0}")]
    MalformedNormal(#[source] ComponentError),
    #[error("invalid vertex texcoord data: {0}")]
    MalformedTexcoord(#[source] ComponentError),
    #[error("invalid face data: {0}")]
    MalformedFace(#[source] FaceError),

    #[error("face layout `{found}` does not match the layout `{locked}` of the first face")]
    FaceLayoutConflict {
        locked: FaceLayout,
        found: FaceLayout,
    },
    #[error("no face line established a face layout")]
    UndeterminedDocument,
}

impl ObjParsingError {
    pub fn line_number(&self) -> Option<usize> {
        self.line.as_ref().map(|(number, _)| *number)
    }

    pub fn line_content(&self) -> Option<&str> {
        self.line.as_ref().map(|(_, content)| content.as_str())
    }

    pub fn detail(&self) -> &ObjParsingErrorDetail {
        &self.detail
    }

    pub fn into_detail(self) -> ObjParsingErrorDetail {
        self.detail
    }
}

impl Debug for ObjParsingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(line) = self.line.as_ref() {
            return write!(
                f,
                "ObjParsingError {{\n\tline: {}\n\tline_content: \"{}\"\n\tdetails: {:?}\n}}",
                line.0, line.1, self.detail,
            );
        }
        write!(f, "ObjParsingError({:?})", self.detail)
    }
}

impl Display for ObjParsingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(line) = self.line.as_ref() {
            return write!(f, "line {} (\"{}\"): {}", line.0, line.1, self.detail);
        }
        write!(f, "{}", self.detail)
    }
}

impl std::error::Error for ObjParsingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.detail)
    }
}

impl TryFrom<ObjFile<'_>> for Mesh {
    type Error = ObjParsingError;

    fn try_from(file_name: ObjFile) -> Result<Self, Self::Error> {
        let file = File::open(file_name.0).map_err(|err| ObjParsingError {
            line: None,
            detail: ObjParsingErrorDetail::FailedToOpenFile(err),
        })?;
        BufReader::new(file).try_into()
    }
}

impl<R> TryFrom<BufReader<R>> for Mesh
where
    R: Read,
{
    type Error = ObjParsingError;

    fn try_from(buf_reader: BufReader<R>) -> Result<Self, ObjParsingError> {
        parse_obj(buf_reader, &ParseOptions::default())
    }
}

impl FromStr for Mesh {
    type Err = ObjParsingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_obj(s.as_bytes(), &ParseOptions::default())
    }
}

/// Reads a whole `.obj` document in one pass.
///
/// The first malformed line rejects the document: nothing read before it is
/// kept. A document without any face line is not an error unless
/// [`ParseOptions::require_faces`] is set, but the mesh returned for it is not
/// valid.
pub fn parse_obj<R: BufRead>(reader: R, options: &ParseOptions) -> Result<Mesh, ObjParsingError> {
    let mut mesh_builder = MeshBuilder::default();

    for (line_index, line) in reader.lines().enumerate() {
        let line_number = line_index + 1;
        let line = line.map_err(|err| ObjParsingError {
            line: Some((line_number, String::new())),
            detail: ObjParsingErrorDetail::FailedToReadFile(err),
        })?;

        parse_line(line_number, &line, options, &mut mesh_builder).map_err(|err| {
            ObjParsingError {
                line: Some((line_number, line)),
                detail: err,
            }
        })?;
    }

    if options.require_faces && !mesh_builder.layout().is_determined() {
        return Err(ObjParsingError {
            line: None,
            detail: ObjParsingErrorDetail::UndeterminedDocument,
        });
    }

    let mesh = mesh_builder.build();
    debug!(
        vertices = mesh.vertices().len(),
        normals = mesh.normals().len(),
        texcoords = mesh.texcoords().len(),
        faces = mesh.faces().len(),
        layout = %mesh.layout(),
        "obj document parsed"
    );
    Ok(mesh)
}

/// Like [`parse_obj`], but a rejected document gives an empty mesh whose
/// layout is [`FaceLayout::Invalid`]. The reason is logged.
pub fn read_or_discard<R: BufRead>(reader: R, options: &ParseOptions) -> Mesh {
    parse_obj(reader, options).unwrap_or_else(|err| {
        warn!(line = ?err.line_number(), error = %err.detail(), "obj document discarded");
        Mesh::discarded()
    })
}

fn parse_line(
    line_number: usize,
    line: &str,
    options: &ParseOptions,
    mesh_builder: &mut MeshBuilder,
) -> Result<(), ObjParsingErrorDetail> {
    match classify_line(line) {
        LineKind::Blank | LineKind::Comment => Ok(()),
        LineKind::Vertex(payload) => {
            parse_vertex_line(&mut Tokens::new(payload), options, mesh_builder)
        }
        LineKind::Normal(payload) => {
            parse_normal_line(&mut Tokens::new(payload), options, mesh_builder)
        }
        LineKind::Texture(payload) => {
            parse_texture_line(&mut Tokens::new(payload), options, mesh_builder)
        }
        LineKind::Face(payload) => parse_face_line(Tokens::new(payload), mesh_builder),
        LineKind::Other(statement) => {
            handle_unrecognized_line(line_number, statement);
            Ok(())
        }
    }
}
