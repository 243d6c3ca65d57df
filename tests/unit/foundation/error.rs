use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        StippleError::not_found("x")
            .to_string()
            .contains("file not found:")
    );
    assert!(StippleError::decode("x").to_string().contains("decode error:"));
    assert!(
        StippleError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        StippleError::cache_read("x")
            .to_string()
            .contains("cache read error:")
    );
    assert!(
        StippleError::cache_write("x")
            .to_string()
            .contains("cache write error:")
    );
    assert!(
        StippleError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn cache_errors_are_classified() {
    assert!(StippleError::cache_read("x").is_cache_error());
    assert!(StippleError::cache_write("x").is_cache_error());
    assert!(!StippleError::not_found("x").is_cache_error());
    assert!(!StippleError::decode("x").is_cache_error());
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = StippleError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
