use super::*;

#[test]
fn load_keeps_alpha_and_save_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("frame0001.png");

    let img = image::RgbaImage::from_pixel(3, 2, image::Rgba([10, 20, 30, 200]));
    img.save_with_format(&path, image::ImageFormat::Png).unwrap();

    let frame = FramePixels::load(&path).unwrap();
    assert!(frame.has_alpha());
    assert_eq!((frame.width(), frame.height()), (3, 2));

    frame.save(&path).unwrap();
    let reloaded = FramePixels::load(&path).unwrap();
    assert_eq!(reloaded, frame);
}

#[test]
fn load_without_alpha_yields_rgb() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("frame0001.png");

    let img = image::RgbImage::from_pixel(2, 2, image::Rgb([1, 2, 3]));
    img.save_with_format(&path, image::ImageFormat::Png).unwrap();

    let frame = FramePixels::load(&path).unwrap();
    assert!(!frame.has_alpha());
    let FramePixels::Rgb(img) = frame else {
        panic!("expected rgb frame");
    };
    assert_eq!(img.get_pixel(1, 1).0, [1, 2, 3]);
}

#[test]
fn load_missing_file_is_frame_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = FramePixels::load(&dir.path().join("frame9999.png")).unwrap_err();
    assert!(matches!(err, TintError::FrameIo(_)));
}
