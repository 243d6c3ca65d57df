use super::*;
use crate::foundation::core::Rgb8;

#[test]
fn defaults_match_documented_values() {
    let o = ImageOpts::default();
    assert_eq!(o.filter_color, FilterColor::BLACK);
    assert!(o.invert);
    assert!(o.use_cache);
    assert_eq!(o.scale_value, 1.0);
    assert!(!o.should_buffer_points);
    assert_eq!(o.image_dir, PathBuf::from("images"));
    assert_eq!(o.cache_dir, PathBuf::from("image_mobject_cache"));
    o.validate().unwrap();
}

#[test]
fn partial_json_keeps_defaults() {
    let json = r#"{"filter_color": "white", "invert": false, "space": {"space_height": 3.0}}"#;
    let o = ImageOpts::from_reader(json.as_bytes()).unwrap();
    assert_eq!(o.filter_color.rgb(), Rgb8::new(255, 255, 255));
    assert!(!o.invert);
    assert!(o.use_cache);
    assert_eq!(o.space.space_height, 3.0);
    assert_eq!(o.space.reference_width, 1920);
}

#[test]
fn unknown_fields_and_bad_colors_are_rejected() {
    let err = ImageOpts::from_reader(r#"{"filtr_color": "black"}"#.as_bytes()).unwrap_err();
    assert!(matches!(err, StippleError::Serde(_)));

    let err = ImageOpts::from_reader(r#"{"filter_color": "nope"}"#.as_bytes()).unwrap_err();
    assert!(matches!(err, StippleError::Serde(_)));
}

#[test]
fn validation_rejects_degenerate_space() {
    let err =
        ImageOpts::from_reader(r#"{"space": {"reference_width": 0}}"#.as_bytes()).unwrap_err();
    assert!(matches!(err, StippleError::Validation(_)));

    let o = ImageOpts {
        scale_value: f64::INFINITY,
        ..ImageOpts::default()
    };
    assert!(o.validate().is_err());
}

#[test]
fn missing_file_is_validation_error() {
    let err = ImageOpts::from_path("no/such/opts.json").unwrap_err();
    assert!(matches!(err, StippleError::Validation(_)));
}

#[test]
fn json_roundtrip_through_serialize() {
    let o = ImageOpts {
        filter_color: FilterColor(Rgb8::new(1, 2, 3)),
        scale_value: 0.5,
        ..ImageOpts::default()
    };
    let s = serde_json::to_string(&o).unwrap();
    let back = ImageOpts::from_reader(s.as_bytes()).unwrap();
    assert_eq!(back.filter_color, o.filter_color);
    assert_eq!(back.scale_value, 0.5);
    assert_eq!(back.cache_dir, o.cache_dir);
    assert!((back.space.space_width - o.space.space_width).abs() < 1e-12);
}
