use rs42::extensions::PipeLine;

use crate::{Face, FaceLayout};

use super::FaceError;

#[derive(Default)]
struct FaceIndices {
    positions: Vec<u32>,
    texcoords: Vec<u32>,
    normals: Vec<u32>,
}

/// Reads the vertex references of a face whose layout is already known.
pub fn parse_face_components<'a>(
    mut components: impl Iterator<Item = &'a str>,
    layout: FaceLayout,
) -> Result<Face, FaceError> {
    components
        .try_fold(FaceIndices::default(), |mut face, reference| {
            parse_face_sub_components(&mut face, reference, layout)?;
            Ok::<_, FaceError>(face)
        })?
        .pipe(check_face_validity)?
        .pipe(|face| {
            Face::new(
                face.positions,
                layout.has_texcoords().then_some(face.texcoords),
                layout.has_normals().then_some(face.normals),
            )
        })
        .pipe(Ok)
}

fn parse_face_sub_components(
    face: &mut FaceIndices,
    reference: &str,
    layout: FaceLayout,
) -> Result<(), FaceError> {
    let mut sub_components = reference.split('/');

    face.positions.push(parse_index(sub_components.next(), reference)?);

    if layout.has_texcoords() {
        face.texcoords.push(parse_index(sub_components.next(), reference)?);
    } else if layout.has_normals() {
        // `v//vn`: the texture slot is there but empty
        match sub_components.next() {
            Some("") => {}
            Some(_) => return Err(FaceError::UnexpectedSubComponent(reference.to_owned())),
            None => return Err(FaceError::MissingSubComponent(reference.to_owned())),
        }
    }

    if layout.has_normals() {
        face.normals.push(parse_index(sub_components.next(), reference)?);
    }

    if sub_components.next().is_some() {
        return Err(FaceError::UnexpectedSubComponent(reference.to_owned()));
    }
    Ok(())
}

fn parse_index(sub_component: Option<&str>, reference: &str) -> Result<u32, FaceError> {
    match sub_component {
        None | Some("") => Err(FaceError::MissingSubComponent(reference.to_owned())),
        Some(index) => index.parse::<u32>().map_err(FaceError::InvalidIndex),
    }
}

fn check_face_validity(face: FaceIndices) -> Result<FaceIndices, FaceError> {
    if face.positions.len() < 3 {
        return Err(FaceError::NotEnoughReferences(face.positions.len()));
    }
    Ok(face)
}
