use super::*;

#[test]
fn identifiers_and_scales() {
    assert_eq!(Preset::Face(FaceMode::Simple).identifier(), "simple_face");
    assert_eq!(Preset::Face(FaceMode::Talking).identifier(), "talking_face");
    assert_eq!(Preset::Face(FaceMode::Straight).identifier(), "straight_face");
    assert_eq!(Preset::VideoIcon.identifier(), "video_icon");
    assert_eq!(Preset::Face(FaceMode::Simple).default_scale(), 0.5);
    assert_eq!(Preset::VideoIcon.default_scale(), 0.3);
}

#[test]
fn apply_only_touches_scale() {
    let base = ImageOpts {
        invert: false,
        ..ImageOpts::default()
    };
    let opts = Preset::VideoIcon.apply(base.clone());
    assert_eq!(opts.scale_value, 0.3);
    assert!(!opts.invert);
    assert_eq!(opts.cache_dir, base.cache_dir);
}

#[test]
fn parse_preset_names() {
    assert_eq!(
        "face".parse::<Preset>().unwrap(),
        Preset::Face(FaceMode::Simple)
    );
    assert_eq!(
        "Face:Talking".parse::<Preset>().unwrap(),
        Preset::Face(FaceMode::Talking)
    );
    assert_eq!("video_icon".parse::<Preset>().unwrap(), Preset::VideoIcon);
    assert!("face:grumpy".parse::<Preset>().is_err());
    assert!("video_icon:big".parse::<Preset>().is_err());
    assert!("logo".parse::<Preset>().is_err());
}
