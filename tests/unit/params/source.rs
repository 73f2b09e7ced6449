use super::*;
use crate::params::model::ColorRange;
use std::path::PathBuf;

#[test]
fn unknown_keys_are_ignored_and_present_keys_override() {
    let o = ParamOverrides::from_json_str(
        r#"{ "WIDTH": 64, "ZOOM": 2.5, "SOMETHING_ELSE": [1, 2, 3], "BG_COLOR": [10, 20, 30] }"#,
    )
    .unwrap();
    let p = o.apply(RenderParameters::byte_preset()).unwrap();

    assert_eq!(p.canvas.width, 64);
    assert_eq!(p.canvas.height, 512);
    assert_eq!(p.zoom, 2.5);
    assert_eq!(p.background, [10.0, 20.0, 30.0]);
    assert_eq!(p.spiral, [191.0, 0.0, 251.0]);
    assert_eq!(p.color_range, ColorRange::Byte);
}

#[test]
fn empty_object_keeps_the_base() {
    let o = ParamOverrides::from_json_str("{}").unwrap();
    assert_eq!(o, ParamOverrides::default());
    let p = o.apply(RenderParameters::unit_preset()).unwrap();
    assert_eq!(p, RenderParameters::unit_preset());
}

#[test]
fn malformed_json_is_a_configuration_error() {
    assert!(
        ParamOverrides::from_json_str("[1, 2]")
            .unwrap_err()
            .is_configuration()
    );
    assert!(
        ParamOverrides::from_json_str(r#"{ "WIDTH": -4 }"#)
            .unwrap_err()
            .is_configuration()
    );
}

#[test]
fn overrides_are_validated_against_the_base_range() {
    let o = ParamOverrides::from_json_str(r#"{ "SPIRAL_COLOR": [191, 0, 251] }"#).unwrap();
    assert!(o.apply(RenderParameters::unit_preset()).is_err());
    assert!(o.apply(RenderParameters::byte_preset()).is_ok());

    let zero = ParamOverrides::from_json_str(r#"{ "HEIGHT": 0 }"#).unwrap();
    assert!(zero.apply(RenderParameters::byte_preset()).is_err());
}

#[test]
fn missing_file_is_a_configuration_error() {
    let err = load_parameters(
        &PathBuf::from("target/params_missing/definitely_not_here.json"),
        RenderParameters::byte_preset(),
    )
    .unwrap_err();
    assert!(err.is_configuration());
}

#[test]
fn load_parameters_reads_file() {
    let dir = PathBuf::from("target").join("params_source");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("params.json");
    std::fs::write(&path, r#"{ "WIDTH": 32, "HEIGHT": 16, "SPIN_SPEED": 0.5 }"#).unwrap();

    let p = load_parameters(&path, RenderParameters::byte_preset()).unwrap();
    assert_eq!(p.canvas.width, 32);
    assert_eq!(p.canvas.height, 16);
    assert_eq!(p.spin_speed, 0.5);
}
