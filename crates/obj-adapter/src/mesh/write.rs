use std::{
    fmt::{self, Display},
    io::{self, Write},
};

use super::{Face, Mesh, VertexReference};

impl Mesh {
    /// Writes the mesh back as `.obj` text, in the layout it was read with.
    ///
    /// Normals and texture coordinates are only written when the layout
    /// references them. Nothing is written for an invalid mesh.
    pub fn write_obj<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{self}")
    }

    pub fn to_obj_string(&self) -> String {
        self.to_string()
    }
}

impl Display for Mesh {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_valid() {
            return Ok(());
        }

        for vertex in self.vertices.iter() {
            writeln!(f, "v {} {} {}", vertex.x, vertex.y, vertex.z)?;
        }
        if self.has_vertex_normals() {
            for normal in self.normals.iter() {
                writeln!(f, "vn {} {} {}", normal.x, normal.y, normal.z)?;
            }
        }
        if self.has_vertex_texcoords() {
            for texcoord in self.texcoords.iter() {
                writeln!(f, "vt {} {}", texcoord.u, texcoord.v)?;
            }
        }
        for face in self.faces.iter() {
            writeln!(f, "{face}")?;
        }
        Ok(())
    }
}

impl Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("f")?;
        for reference in self.references() {
            write!(f, " {reference}")?;
        }
        Ok(())
    }
}

impl Display for VertexReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.texcoord, self.normal) {
            (None, None) => write!(f, "{}", self.position),
            (Some(texcoord), None) => write!(f, "{}/{}", self.position, texcoord),
            (None, Some(normal)) => write!(f, "{}//{}", self.position, normal),
            (Some(texcoord), Some(normal)) => {
                write!(f, "{}/{}/{}", self.position, texcoord, normal)
            }
        }
    }
}
