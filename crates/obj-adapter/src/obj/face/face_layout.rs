use crate::FaceLayout;

use super::FaceError;

/// Finds the layout of a face from its first vertex reference, by the number
/// of `/` it holds and whether two of them are adjacent.
pub fn detect_face_layout(reference: &str) -> Result<FaceLayout, FaceError> {
    let slashes: Vec<usize> = reference
        .match_indices('/')
        .map(|(index, _)| index)
        .take(3)
        .collect();

    match slashes[..] {
        [] => Ok(FaceLayout::PositionOnly),
        [_] => Ok(FaceLayout::PositionTexcoord),
        [first, second] if second == first + 1 => Ok(FaceLayout::PositionNormal),
        [_, _] => Ok(FaceLayout::PositionTexcoordNormal),
        _ => Err(FaceError::TooManySubComponents(reference.to_owned())),
    }
}
