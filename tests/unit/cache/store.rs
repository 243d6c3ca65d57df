use super::*;

fn temp_dir(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "stipple_{name}_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ))
}

fn sample() -> (Vec<Vec3>, Vec<Vec3>) {
    (
        vec![[0.0, 4.0, 0.0], [-4.0, -0.0, 0.0], [1e-300, f64::MAX, -3.25]],
        vec![[1.0, 1.0, 1.0], [0.5, 0.25, 0.0], [1.0 / 255.0, 0.0, 1.0]],
    )
}

#[test]
fn key_is_stable_and_sensitive_to_inputs() {
    let a = CacheKey::new("/img/face.png", true);
    assert_eq!(a, CacheKey::new("/img/face.png", true));
    assert_ne!(a, CacheKey::new("/img/face.png", false));
    assert_ne!(a, CacheKey::new("/img/face.jpg", true));
    assert_eq!(a.to_hex().len(), 16);
    assert_eq!(a.to_string(), a.to_hex());
}

#[test]
fn key_matches_manual_fnv() {
    let mut h = crate::foundation::math::Fnv1a64::new_default();
    h.write_bytes(b"x.png");
    h.write_u8(0);
    h.write_u8(1);
    assert_eq!(CacheKey::new("x.png", true).as_u64(), h.finish());
}

#[test]
fn blob_paths_use_hex_stem() {
    let cache = FsPointCache::new("cache");
    let key = CacheKey::new("a", false);
    assert_eq!(
        cache.blob_path(key, CacheArray::Points),
        Path::new("cache").join(format!("{}.points", key.to_hex()))
    );
    assert_eq!(
        cache.blob_path(key, CacheArray::Rgbs),
        Path::new("cache").join(format!("{}.rgbs", key.to_hex()))
    );
}

#[test]
fn encoding_is_little_endian_row_major() {
    let bytes = encode_f64le(&[[1.0, 2.0, 3.0]]);
    assert_eq!(bytes.len(), VECTOR_BYTES);
    assert_eq!(&bytes[0..8], &1.0f64.to_le_bytes());
    assert_eq!(&bytes[8..16], &2.0f64.to_le_bytes());
    assert_eq!(&bytes[16..24], &3.0f64.to_le_bytes());
}

#[test]
fn decode_rejects_partial_vectors() {
    let mut bytes = encode_f64le(&[[1.0, 2.0, 3.0]]);
    bytes.truncate(20);
    assert!(matches!(
        decode_f64le(&bytes),
        Err(StippleError::CacheRead(_))
    ));
    assert!(decode_f64le(&[]).unwrap().is_empty());
}

#[test]
fn write_then_read_is_bitwise_identical() {
    let tmp = temp_dir("cache_roundtrip");
    let cache = FsPointCache::new(tmp.join("nested"));
    let key = CacheKey::new("roundtrip.png", true);
    let (positions, colors) = sample();

    assert!(!cache.exists(key));
    cache.write(key, &positions, &colors).unwrap();
    assert!(cache.exists(key));

    let (p2, c2) = cache.read(key).unwrap();
    let bits = |v: &[Vec3]| -> Vec<u64> { v.iter().flatten().map(|x| x.to_bits()).collect() };
    assert_eq!(bits(&p2), bits(&positions));
    assert_eq!(bits(&c2), bits(&colors));

    let leftovers: Vec<_> = std::fs::read_dir(cache.dir())
        .unwrap()
        .flatten()
        .filter(|e| e.file_name().to_string_lossy().contains(".tmp."))
        .collect();
    assert!(leftovers.is_empty());

    std::fs::remove_dir_all(&tmp).ok();
}

#[test]
fn exists_requires_both_blobs() {
    let tmp = temp_dir("cache_exists");
    let cache = FsPointCache::new(&tmp);
    let key = CacheKey::new("half.png", false);
    let (positions, colors) = sample();
    cache.write(key, &positions, &colors).unwrap();

    std::fs::remove_file(cache.blob_path(key, CacheArray::Rgbs)).unwrap();
    assert!(!cache.exists(key));
    assert!(matches!(cache.read(key), Err(StippleError::CacheRead(_))));

    std::fs::remove_dir_all(&tmp).ok();
}

#[test]
fn truncated_or_mismatched_blobs_fail_to_read() {
    let tmp = temp_dir("cache_corrupt");
    let cache = FsPointCache::new(&tmp);
    let key = CacheKey::new("corrupt.png", true);
    let (positions, colors) = sample();
    cache.write(key, &positions, &colors).unwrap();

    let points = cache.blob_path(key, CacheArray::Points);
    let bytes = std::fs::read(&points).unwrap();
    std::fs::write(&points, &bytes[..bytes.len() - 3]).unwrap();
    assert!(cache.exists(key));
    assert!(matches!(cache.read(key), Err(StippleError::CacheRead(_))));

    std::fs::write(&points, &bytes[..VECTOR_BYTES]).unwrap();
    let err = cache.read(key).unwrap_err();
    assert!(err.to_string().contains("1 positions but 3 colors"));

    std::fs::remove_dir_all(&tmp).ok();
}

#[test]
fn write_rejects_mismatched_arrays() {
    let tmp = temp_dir("cache_mismatch");
    let cache = FsPointCache::new(&tmp);
    let key = CacheKey::new("m.png", true);
    let err = cache
        .write(key, &[[0.0; 3]], &[[0.0; 3], [1.0; 3]])
        .unwrap_err();
    assert!(matches!(err, StippleError::CacheWrite(_)));
    assert!(!cache.exists(key));
    std::fs::remove_dir_all(&tmp).ok();
}
