mod mesh_builder;
mod write;

use std::fmt::{self, Display};

pub(crate) use mesh_builder::MeshBuilder;

/// A vertex position or a vertex normal. Normals are stored as read, they are
/// not re-normalized.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl From<[f64; 3]> for Point3 {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self { x, y, z }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TexCoord {
    pub u: f64,
    pub v: f64,
}

impl From<[f64; 2]> for TexCoord {
    fn from([u, v]: [f64; 2]) -> Self {
        Self { u, v }
    }
}

/// Shape of the vertex references of every face in a document.
///
/// `Undetermined` until the first face line is read, then locked to one of
/// the four concrete layouts. `Invalid` marks a discarded document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FaceLayout {
    #[default]
    Undetermined,
    /// `f v v v`
    PositionOnly,
    /// `f v/vt v/vt v/vt`
    PositionTexcoord,
    /// `f v//vn v//vn v//vn`
    PositionNormal,
    /// `f v/vt/vn v/vt/vn v/vt/vn`
    PositionTexcoordNormal,
    Invalid,
}

impl FaceLayout {
    pub fn is_determined(self) -> bool {
        !matches!(self, Self::Undetermined | Self::Invalid)
    }

    pub fn has_texcoords(self) -> bool {
        matches!(self, Self::PositionTexcoord | Self::PositionTexcoordNormal)
    }

    pub fn has_normals(self) -> bool {
        matches!(self, Self::PositionNormal | Self::PositionTexcoordNormal)
    }
}

impl Display for FaceLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Undetermined => "undetermined",
            Self::PositionOnly => "v",
            Self::PositionTexcoord => "v/vt",
            Self::PositionNormal => "v//vn",
            Self::PositionTexcoordNormal => "v/vt/vn",
            Self::Invalid => "invalid",
        })
    }
}

/// A polygon given by 1-based indices into the mesh sequences.
///
/// The secondary index sequences are present only when the document layout
/// carries them, and are then as long as `positions`. Indices are not checked
/// against the sequences they refer to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Face {
    positions: Box<[u32]>,
    texcoords: Option<Box<[u32]>>,
    normals: Option<Box<[u32]>>,
}

impl Face {
    pub(crate) fn new(
        positions: Vec<u32>,
        texcoords: Option<Vec<u32>>,
        normals: Option<Vec<u32>>,
    ) -> Self {
        debug_assert!(texcoords.as_ref().map_or(true, |t| t.len() == positions.len()));
        debug_assert!(normals.as_ref().map_or(true, |n| n.len() == positions.len()));

        Self {
            positions: positions.into_boxed_slice(),
            texcoords: texcoords.map(Vec::into_boxed_slice),
            normals: normals.map(Vec::into_boxed_slice),
        }
    }

    pub fn positions(&self) -> &[u32] {
        &self.positions
    }

    pub fn texcoords(&self) -> Option<&[u32]> {
        self.texcoords.as_deref()
    }

    pub fn normals(&self) -> Option<&[u32]> {
        self.normals.as_deref()
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn layout(&self) -> FaceLayout {
        match (self.texcoords.is_some(), self.normals.is_some()) {
            (false, false) => FaceLayout::PositionOnly,
            (true, false) => FaceLayout::PositionTexcoord,
            (false, true) => FaceLayout::PositionNormal,
            (true, true) => FaceLayout::PositionTexcoordNormal,
        }
    }

    /// The corners of the polygon, in file order.
    pub fn references(&self) -> impl Iterator<Item = VertexReference> + '_ {
        (0..self.positions.len()).map(|i| VertexReference {
            position: self.positions[i],
            texcoord: self.texcoords.as_ref().map(|texcoords| texcoords[i]),
            normal: self.normals.as_ref().map(|normals| normals[i]),
        })
    }
}

/// One `position[/texcoord][/normal]` corner of a face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VertexReference {
    pub position: u32,
    pub texcoord: Option<u32>,
    pub normal: Option<u32>,
}

/// Geometry read from one `.obj` document.
///
/// Only the parser builds a `Mesh`; once returned it is read-only.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Mesh {
    vertices: Box<[Point3]>,
    normals: Box<[Point3]>,
    texcoords: Box<[TexCoord]>,
    faces: Box<[Face]>,
    layout: FaceLayout,
}


// Constructors:

impl Mesh {
    /// An empty mesh standing for a rejected document.
    pub fn discarded() -> Self {
        Self {
            layout: FaceLayout::Invalid,
            ..Self::default()
        }
    }
}


// Getters:

impl Mesh {
    pub fn vertices(&self) -> &[Point3] {
        &self.vertices
    }

    pub fn normals(&self) -> &[Point3] {
        &self.normals
    }

    pub fn texcoords(&self) -> &[TexCoord] {
        &self.texcoords
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    pub fn layout(&self) -> FaceLayout {
        self.layout
    }

    /// A mesh is valid once a face line locked its layout. A document
    /// without faces is not rejected, but it is not valid either.
    pub fn is_valid(&self) -> bool {
        self.layout.is_determined()
    }

    /// Follows the locked layout, not whether any `vn` line was read.
    pub fn has_vertex_normals(&self) -> bool {
        self.layout.has_normals()
    }

    /// Follows the locked layout, not whether any `vt` line was read.
    pub fn has_vertex_texcoords(&self) -> bool {
        self.layout.has_texcoords()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn layout_capabilities() {
        assert!(!FaceLayout::PositionOnly.has_normals());
        assert!(!FaceLayout::PositionOnly.has_texcoords());
        assert!(FaceLayout::PositionTexcoord.has_texcoords());
        assert!(!FaceLayout::PositionTexcoord.has_normals());
        assert!(FaceLayout::PositionNormal.has_normals());
        assert!(!FaceLayout::PositionNormal.has_texcoords());
        assert!(FaceLayout::PositionTexcoordNormal.has_normals());
        assert!(FaceLayout::PositionTexcoordNormal.has_texcoords());

        assert!(!FaceLayout::Undetermined.is_determined());
        assert!(!FaceLayout::Invalid.is_determined());
        assert!(!FaceLayout::Invalid.has_normals());
    }

    #[test]
    fn face_references_follow_file_order() {
        let face = Face::new(vec![4, 5, 6], None, Some(vec![1, 2, 3]));

        assert_eq!(face.layout(), FaceLayout::PositionNormal);
        assert_eq!(face.vertex_count(), 3);
        assert_eq!(face.texcoords(), None);
        assert_eq!(
            face.references().collect::<Vec<_>>(),
            vec![
                VertexReference { position: 4, texcoord: None, normal: Some(1) },
                VertexReference { position: 5, texcoord: None, normal: Some(2) },
                VertexReference { position: 6, texcoord: None, normal: Some(3) },
            ]
        );
    }

    #[test]
    fn discarded_mesh_is_empty_and_invalid() {
        let mesh = Mesh::discarded();

        assert!(!mesh.is_valid());
        assert_eq!(mesh.layout(), FaceLayout::Invalid);
        assert!(mesh.vertices().is_empty());
        assert!(mesh.faces().is_empty());
    }
}
