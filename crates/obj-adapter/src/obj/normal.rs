use rs42::extensions::PipeLine;

use crate::{mesh::MeshBuilder, Point3};

use super::{components::parse_components, ObjParsingErrorDetail, ParseOptions};

pub fn parse_normal_line<'a>(
    components: &mut impl Iterator<Item = &'a str>,
    options: &ParseOptions,
    mesh: &mut MeshBuilder,
) -> Result<(), ObjParsingErrorDetail> {
    parse_components::<3>(components, options.trailing_components)
        .map_err(ObjParsingErrorDetail::MalformedNormal)?
        .pipe(Point3::from)
        .pipe(|normal| mesh.push_normal(normal))
        .map_err(ObjParsingErrorDetail::AllocationFailure)
}
