use super::*;

fn square() -> PointCloud {
    let mut cloud = PointCloud::new();
    cloud
        .add_points_with_colors(
            vec![[1.0, 1.0, 0.0], [3.0, 1.0, 0.0], [1.0, 5.0, 0.0], [3.0, 5.0, 0.0]],
            vec![[1.0, 1.0, 1.0]; 4],
        )
        .unwrap();
    cloud
}

#[test]
fn add_rejects_mismatched_lengths() {
    let mut cloud = PointCloud::new();
    let err = cloud
        .add_points_with_colors(vec![[0.0; 3]; 2], vec![[0.0; 3]; 1])
        .unwrap_err();
    assert!(matches!(err, StippleError::Validation(_)));
    assert!(cloud.is_empty());
}

#[test]
fn add_appends_batches_in_order() {
    let mut cloud = PointCloud::new();
    cloud
        .add_points_with_colors(vec![[0.0, 0.0, 0.0]], vec![[0.1, 0.1, 0.1]])
        .unwrap();
    cloud
        .add_points_with_colors(vec![[1.0, 0.0, 0.0]], vec![[0.2, 0.2, 0.2]])
        .unwrap();
    assert_eq!(cloud.len(), 2);
    assert_eq!(cloud.positions()[1], [1.0, 0.0, 0.0]);
    assert_eq!(cloud.colors()[1], [0.2, 0.2, 0.2]);
}

#[test]
fn bounding_box_and_center() {
    let cloud = square();
    let bb = cloud.bounding_box().unwrap();
    assert_eq!(bb.min, [1.0, 1.0, 0.0]);
    assert_eq!(bb.max, [3.0, 5.0, 0.0]);
    assert_eq!(bb.size(), [2.0, 4.0, 0.0]);
    assert_eq!(cloud.get_center(), Some([2.0, 3.0, 0.0]));
}

#[test]
fn center_then_scale_keeps_colors() {
    let mut cloud = square();
    cloud.center().scale(0.5);
    assert_eq!(cloud.get_center(), Some([0.0, 0.0, 0.0]));
    let bb = cloud.bounding_box().unwrap();
    assert_eq!(bb.min, [-0.5, -1.0, 0.0]);
    assert_eq!(bb.max, [0.5, 1.0, 0.0]);
    assert!(cloud.colors().iter().all(|c| *c == [1.0, 1.0, 1.0]));
}

#[test]
fn transforms_on_empty_cloud_are_noops() {
    let mut cloud = PointCloud::with_buffer_hint(true);
    cloud.center().scale(3.0).shift([1.0, 1.0, 1.0]);
    assert!(cloud.is_empty());
    assert!(cloud.bounding_box().is_none());
    assert!(cloud.should_buffer_points());
}
