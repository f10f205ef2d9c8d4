use crate::{mesh::MeshBuilder, Point3};

use super::{components::parse_components, ObjParsingErrorDetail, ParseOptions};

pub fn parse_vertex_line<'a>(
    components: &mut impl Iterator<Item = &'a str>,
    options: &ParseOptions,
    mesh: &mut MeshBuilder,
) -> Result<(), ObjParsingErrorDetail> {
    let vertex = parse_components::<3>(components, options.trailing_components)
        .map_err(ObjParsingErrorDetail::MalformedVertex)?;

    mesh.push_vertex(Point3::from(vertex))
        .map_err(ObjParsingErrorDetail::AllocationFailure)
}
