//! Integration tests for the Pascal VOC sample provider and dataset wrapper.

use detprep::sample::ClassId;
use detprep::source::{SampleSource, VocSource};
use detprep::{Dataset, PrepError, TransformConfig};

mod common;

#[test]
fn voc_source_skips_difficult_objects_by_default() {
    let temp = tempfile::tempdir().expect("create temp dir");
    common::create_sample_voc_dataset(temp.path());

    let source = VocSource::open(temp.path(), "trainval", false).expect("open voc");
    assert_eq!(source.len(), 2);

    let sample = source.get_example(0).expect("load sample");
    assert_eq!(sample.image.dims(), (375, 500));
    assert_eq!(sample.labels, vec![ClassId::new(8)]);
    assert_eq!(sample.boxes[0].to_yxyx(), [210.0, 262.0, 338.0, 323.0]);
    assert_eq!(sample.difficult, vec![false]);
}

#[test]
fn voc_source_keeps_difficult_objects_on_request() {
    let temp = tempfile::tempdir().expect("create temp dir");
    common::create_sample_voc_dataset(temp.path());

    let source = VocSource::open(temp.path(), "trainval", true).expect("open voc");
    let sample = source.get_example(0).expect("load sample");
    assert_eq!(sample.labels, vec![ClassId::new(8), ClassId::new(14)]);
    assert_eq!(sample.difficult, vec![false, true]);
    assert_eq!(sample.boxes[1].to_yxyx(), [0.0, 0.0, 200.0, 100.0]);
}

#[test]
fn voc_image_values_stay_in_byte_range() {
    let temp = tempfile::tempdir().expect("create temp dir");
    common::create_sample_voc_dataset(temp.path());

    let source = VocSource::open(temp.path(), "trainval", false).expect("open voc");
    let sample = source.get_example(0).expect("load sample");
    assert!(sample
        .image
        .view()
        .iter()
        .all(|&v| (0.0..=255.0).contains(&v)));

    // JPEG is lossy; a flat colour should still come back close to itself.
    let means = sample.image.channel_means();
    assert!((means[0] - 200.0).abs() < 6.0);
    assert!((means[1] - 100.0).abs() < 6.0);
    assert!((means[2] - 50.0).abs() < 6.0);
}

#[test]
fn dataset_transforms_voc_samples_end_to_end() {
    let temp = tempfile::tempdir().expect("create temp dir");
    common::create_sample_voc_dataset(temp.path());

    let source = VocSource::open(temp.path(), "trainval", false).expect("open voc");
    let dataset = Dataset::new(source, TransformConfig::default(), Some(17));

    let first = dataset.get(0).expect("transform sample 0");
    assert_eq!(first.image.dims(), (600, 800));
    assert_eq!(first.scale, 1.6);
    assert_eq!(first.labels, vec![ClassId::new(8)]);

    let second = dataset.get(1).expect("transform sample 1");
    assert_eq!(second.image.dims(), (900, 600));
    assert_eq!(second.scale, 0.75);
    // VOC coords are 1-based, so the dog box becomes (0, 0, 1200, 800)
    // and covers the whole image whether or not it was flipped.
    assert_eq!(second.boxes[0].to_yxyx(), [0.0, 0.0, 900.0, 600.0]);

    let again = dataset.get(1).expect("transform sample 1 again");
    assert_eq!(again, second);
}

#[test]
fn missing_image_is_reported_with_path() {
    let temp = tempfile::tempdir().expect("create temp dir");
    common::create_sample_voc_dataset(temp.path());
    std::fs::remove_file(temp.path().join("JPEGImages").join("000002.jpg"))
        .expect("remove image");

    let source = VocSource::open(temp.path(), "trainval", false).expect("open voc");
    let err = source.get_example(1).unwrap_err();
    match err {
        PrepError::ImageDecode { path, .. } => assert!(path.ends_with("000002.jpg")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn index_past_split_is_out_of_range() {
    let temp = tempfile::tempdir().expect("create temp dir");
    common::create_sample_voc_dataset(temp.path());

    let source = VocSource::open(temp.path(), "trainval", false).expect("open voc");
    assert!(matches!(
        source.get_example(5),
        Err(PrepError::IndexOutOfRange { index: 5, len: 2 })
    ));
}
