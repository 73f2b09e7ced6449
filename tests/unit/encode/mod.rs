use super::*;
use std::path::PathBuf;

#[test]
fn parent_that_is_a_file_is_an_encoding_error() {
    let dir = PathBuf::from("target").join("encode_unit");
    std::fs::create_dir_all(&dir).unwrap();
    let blocker = dir.join("not_a_dir");
    std::fs::write(&blocker, b"x").unwrap();

    let err = ensure_parent_dir(&blocker.join("sub").join("out.gif")).unwrap_err();
    assert!(matches!(err, SpiralError::Encoding(ref m) if m.contains("output directory")));
}

#[test]
fn bare_file_names_need_no_directory() {
    ensure_parent_dir(Path::new("out.gif")).unwrap();
}
