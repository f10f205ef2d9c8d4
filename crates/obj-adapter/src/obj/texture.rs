use rs42::extensions::PipeLine;

use crate::{mesh::MeshBuilder, TexCoord};

use super::{components::parse_components, ObjParsingErrorDetail, ParseOptions};

pub fn parse_texture_line<'a>(
    components: &mut impl Iterator<Item = &'a str>,
    options: &ParseOptions,
    mesh: &mut MeshBuilder,
) -> Result<(), ObjParsingErrorDetail> {
    parse_components::<2>(components, options.trailing_components)
        .map_err(ObjParsingErrorDetail::MalformedTexcoord)?
        .pipe(TexCoord::from)
        .pipe(|texcoord| mesh.push_texcoord(texcoord))
        .map_err(ObjParsingErrorDetail::AllocationFailure)
}
