use obj_adapter::{Mesh, ObjParsingError, ObjParsingErrorDetail};

pub fn diagnostic(err: &ObjParsingError) -> String {
    let data = match err.detail() {
        ObjParsingErrorDetail::MalformedVertex(_) => "vertices",
        ObjParsingErrorDetail::MalformedNormal(_) => "vertex normal",
        ObjParsingErrorDetail::MalformedTexcoord(_) => "vertex texcoord",
        ObjParsingErrorDetail::MalformedFace(_)
        | ObjParsingErrorDetail::FaceLayoutConflict { .. } => "face",
        _ => return format!("Invalid obj file: {}", err.detail()),
    };

    match (err.line_number(), err.line_content()) {
        (Some(number), Some(content)) => {
            format!("Invalid {data} data: #line {number} \"{content}\": {}", err.detail())
        }
        _ => format!("Invalid {data} data: {}", err.detail()),
    }
}

pub fn summary(mesh: &Mesh) -> String {
    format!(
        "vertices: {}, normals: {}, texcoords: {}, faces: {}, layout: {}, valid: {}",
        mesh.vertices().len(),
        mesh.normals().len(),
        mesh.texcoords().len(),
        mesh.faces().len(),
        mesh.layout(),
        mesh.is_valid(),
    )
}
