use hsvmask_algorithms::{ChannelRange, ThresholdSession};
use hsvmask_io::{load_mask, load_rgb, write_mask};
use image::{Rgb, RgbImage};
use tempfile::tempdir;

fn striped_image(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, _| {
        if (x / 10) % 2 == 0 {
            Rgb([0, 200, 0])
        } else {
            Rgb([200, 0, 0])
        }
    })
}

#[test]
fn test_saved_mask_has_original_size_and_binary_values() {
    let dir = tempdir().unwrap();
    let source_path = dir.path().join("painted_photo.png");
    let mask_path = dir.path().join("mask.png");
    striped_image(640, 480).save(&source_path).unwrap();

    let source = load_rgb(&source_path).unwrap();
    let mut session = ThresholdSession::new(&source, Some(200)).unwrap();
    assert_ne!(session.working_size(), session.original_size());

    // Green stripes only
    let range = ChannelRange::new([50, 100, 100], [70, 255, 255]);
    let frame = session.step(&range).unwrap();
    write_mask(&frame.mask, session.original_size(), &mask_path).unwrap();

    let saved = load_mask(&mask_path).unwrap();
    assert_eq!(saved.dimensions(), (640, 480));
    assert!(saved.as_raw().iter().all(|&v| v == 0 || v == 255));
    assert!(saved.as_raw().contains(&0));
    assert!(saved.as_raw().contains(&255));
}

#[test]
fn test_unwritable_path_is_an_error() {
    let dir = tempdir().unwrap();
    let mask = image::GrayImage::new(4, 4);
    let path = dir.path().join("missing-dir").join("mask.png");
    assert!(write_mask(&mask, (4, 4), path).is_err());
}
