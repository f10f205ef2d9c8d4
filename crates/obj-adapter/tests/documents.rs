use std::io::BufReader;

use obj_adapter::{
    parse_obj, read_or_discard, FaceLayout, Mesh, ObjParsingErrorDetail, ParseOptions, Point3,
    TexCoord,
};

const CUBE: &str = r#"
# Blender v2.71 (sub 0) OBJ File: 'cube.blend'
# www.blender.org
mtllib cube.mtl
o Cube
v 1.000000 -1.000000 -1.000000
v 1.000000 -1.000000 1.000000
v -1.000000 -1.000000 1.000000
v -1.000000 -1.000000 -1.000000
v 1.000000 1.000000 -0.999999
v 0.999999 1.000000 1.000001
v -1.000000 1.000000 1.000000
v -1.000000 1.000000 -1.000000
vt 1.004952 0.498633
vt 0.754996 0.498236
vt 0.755393 0.248279
vt 1.005349 0.248677
vt 0.255083 0.497442
vt 0.255480 0.247485
vt 0.505437 0.247882
vt 0.505039 0.497839
vt 0.754598 0.748193
vt 0.504642 0.747795
vt 0.505834 -0.002074
vt 0.755790 -0.001677
vt 0.005127 0.497044
vt 0.005524 0.247088
vn 0.000000 -1.000000 0.000000
vn 0.000000 1.000000 0.000000
vn 1.000000 0.000000 0.000000
vn -0.000000 -0.000000 1.000000
vn -1.000000 -0.000000 -0.000000
vn 0.000000 0.000000 -1.000000
usemtl Material
s off
f 1/1/1 2/2/1 3/3/1 4/4/1
f 5/5/2 8/6/2 7/7/2 6/8/2
f 1/9/3 5/10/3 6/8/3 2/2/3
f 2/2/4 6/8/4 7/7/4 3/3/4
f 3/3/5 7/7/5 8/11/5 4/12/5
f 5/5/6 1/13/6 4/14/6 8/6/6
"#;

#[test]
fn blender_cube() {
    let mesh = Mesh::try_from(BufReader::new(CUBE.as_bytes())).unwrap();

    assert!(mesh.is_valid());
    assert_eq!(mesh.layout(), FaceLayout::PositionTexcoordNormal);
    assert_eq!(mesh.vertices().len(), 8);
    assert_eq!(mesh.texcoords().len(), 14);
    assert_eq!(mesh.normals().len(), 6);
    assert_eq!(mesh.faces().len(), 6);

    assert_eq!(mesh.vertices()[5], Point3 { x: 0.999999, y: 1., z: 1.000001 });
    assert_eq!(mesh.texcoords()[10], TexCoord { u: 0.505834, v: -0.002074 });

    let face = &mesh.faces()[4];
    assert_eq!(face.positions(), [3, 7, 8, 4]);
    assert_eq!(face.texcoords(), Some(&[3, 7, 11, 12][..]));
    assert_eq!(face.normals(), Some(&[5, 5, 5, 5][..]));
}

#[test]
fn blender_cube_round_trip() {
    let mesh: Mesh = CUBE.parse().unwrap();
    let written = mesh.to_obj_string();

    assert!(written.starts_with("v 1 -1 -1\n"));
    assert!(written.contains("\nvn -0 -0 1\n"));
    assert!(written.ends_with("f 5/5/6 1/13/6 4/14/6 8/6/6\n"));
    assert_eq!(written.parse::<Mesh>().unwrap(), mesh);
}

#[test]
fn canonical_document_is_written_back_verbatim() {
    let inputs = [
        "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n",
        "v 0 0 0\nv 1 0 0\nv 0 1 0\nvt 0 0\nvt 1 0\nvt 0 1\nf 1/1 2/2 3/3\n",
        "v 0 0 0\nv 1 0 0\nv 0 1 0\nvn 0 0 1\nf 1//1 2//1 3//1\n",
        "v 0.5 -2.25 0.0000001\nv 1 0 0\nv 0 1 0\nv 1 1 0\nvn 0 0 1\nvt 0 0\nf 1/1/1 2/1/1 3/1/1 4/1/1\n",
    ];

    for input in inputs {
        let mesh: Mesh = input.parse().unwrap();
        let mut out = Vec::new();
        mesh.write_obj(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), input);
    }
}

#[test]
fn unused_attributes_are_not_written() {
    let mesh: Mesh = "v 0 0 0\nv 1 0 0\nv 0 1 0\nvn 0 0 1\nvt 0.5 0.5\nf 1 2 3\n"
        .parse()
        .unwrap();

    assert_eq!(mesh.normals().len(), 1);
    assert_eq!(mesh.texcoords().len(), 1);
    assert_eq!(mesh.to_obj_string(), "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n");
}

#[test]
fn conflict_after_many_lines_discards_the_document() {
    let input = format!("{}f 1 2 3\n# comment\nf 1//1 2//1 3//1\n", "v 0 0 0\n".repeat(3));

    let err = parse_obj(input.as_bytes(), &ParseOptions::default()).unwrap_err();
    assert_eq!(err.line_number(), Some(6));
    assert_eq!(err.line_content(), Some("f 1//1 2//1 3//1"));
    assert!(matches!(
        err.detail(),
        ObjParsingErrorDetail::FaceLayoutConflict {
            locked: FaceLayout::PositionOnly,
            found: FaceLayout::PositionNormal
        }
    ));

    let mesh = read_or_discard(input.as_bytes(), &ParseOptions::default());
    assert_eq!(mesh.layout(), FaceLayout::Invalid);
    assert!(mesh.vertices().is_empty());
    assert!(mesh.faces().is_empty());
}

#[test]
fn invalid_utf8_is_a_read_failure() {
    let err = parse_obj(&b"v 0 0 0\n\xff\xfe\n"[..], &ParseOptions::default()).unwrap_err();

    assert_eq!(err.line_number(), Some(2));
    assert_eq!(err.line_content(), Some(""));
    assert!(matches!(err.detail(), ObjParsingErrorDetail::FailedToReadFile(_)));
}
