use std::collections::TryReserveError;

use rs42::extensions::vec::TryPush;

use super::{Face, FaceLayout, Mesh, Point3, TexCoord};

/// Mutable side of a [`Mesh`], owned by the parser for the length of one pass.
#[derive(Default, Debug)]
pub(crate) struct MeshBuilder {
    vertices: Vec<Point3>,
    normals: Vec<Point3>,
    texcoords: Vec<TexCoord>,
    faces: Vec<Face>,
    layout: FaceLayout,
}

impl MeshBuilder {
    pub(crate) fn build(self) -> Mesh {
        Mesh {
            vertices: self.vertices.into_boxed_slice(),
            normals: self.normals.into_boxed_slice(),
            texcoords: self.texcoords.into_boxed_slice(),
            faces: self.faces.into_boxed_slice(),
            layout: self.layout,
        }
    }

    pub(crate) fn layout(&self) -> FaceLayout {
        self.layout
    }

    pub(crate) fn lock_layout(&mut self, layout: FaceLayout) {
        debug_assert!(!self.layout.is_determined());
        debug_assert!(layout.is_determined());
        self.layout = layout;
    }

    pub(crate) fn push_vertex(&mut self, vertex: Point3) -> Result<(), TryReserveError> {
        self.vertices.try_push(vertex)
    }

    pub(crate) fn push_normal(&mut self, normal: Point3) -> Result<(), TryReserveError> {
        self.normals.try_push(normal)
    }

    pub(crate) fn push_texcoord(&mut self, texcoord: TexCoord) -> Result<(), TryReserveError> {
        self.texcoords.try_push(texcoord)
    }

    pub(crate) fn push_face(&mut self, face: Face) -> Result<(), TryReserveError> {
        debug_assert_eq!(face.layout(), self.layout);
        self.faces.try_push(face)
    }
}
