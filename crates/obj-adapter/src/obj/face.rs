mod face_layout;
mod parse_face_components;

use std::num::ParseIntError;

use rs42::extensions::PipeLine;
use thiserror::Error;
use tracing::debug;

use crate::{mesh::MeshBuilder, FaceLayout};

use super::ObjParsingErrorDetail;
use face_layout::detect_face_layout;
use parse_face_components::parse_face_components;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FaceError {
    #[error("face has no vertex reference")]
    MissingFirstReference,
    #[error("face should have at least 3 vertex references but has {0}")]
    NotEnoughReferences(usize),
    #[error("vertex reference `{0}` has more than 3 sub-components")]
    TooManySubComponents(String),
    #[error("vertex reference `{0}` is missing a sub-component")]
    MissingSubComponent(String),
    #[error("vertex reference `{0}` has an unexpected sub-component")]
    UnexpectedSubComponent(String),
    #[error("invalid index: {0}")]
    InvalidIndex(#[source] ParseIntError),
}

/// Reads one `f` line. The first face of the document locks the layout that
/// every following face has to use.
pub fn parse_face_line<'a, I>(
    components: I,
    mesh: &mut MeshBuilder,
) -> Result<(), ObjParsingErrorDetail>
where
    I: Iterator<Item = &'a str> + Clone,
{
    let layout = components
        .clone()
        .next()
        .ok_or(FaceError::MissingFirstReference)
        .and_then(detect_face_layout)
        .map_err(ObjParsingErrorDetail::MalformedFace)?;

    match mesh.layout() {
        FaceLayout::Undetermined => {
            debug!(%layout, "face layout locked");
            mesh.lock_layout(layout);
        }
        locked if locked == layout => {}
        locked => {
            return Err(ObjParsingErrorDetail::FaceLayoutConflict {
                locked,
                found: layout,
            })
        }
    }

    parse_face_components(components, layout)
        .map_err(ObjParsingErrorDetail::MalformedFace)?
        .pipe(|face| mesh.push_face(face))
        .map_err(ObjParsingErrorDetail::AllocationFailure)
}
