use std::{io::Cursor, path::PathBuf};

use image::Rgba;

use super::*;

fn png_bytes(img: &RgbaImage) -> Vec<u8> {
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img.clone())
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

fn scratch_dir(name: &str) -> PathBuf {
    let dir = PathBuf::from("target").join("unit_decode").join(name);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn decode_image_png_keeps_straight_alpha() {
    let src = RgbaImage::from_pixel(1, 1, Rgba([100, 50, 200, 128]));
    let decoded = decode_image(&png_bytes(&src)).unwrap();
    assert_eq!(decoded.dimensions(), (1, 1));
    assert_eq!(decoded.get_pixel(0, 0), &Rgba([100, 50, 200, 128]));
}

#[test]
fn decode_image_rejects_garbage() {
    let err = decode_image(b"definitely not an image").unwrap_err();
    assert!(matches!(err, LayerStackError::UnsupportedFormat { .. }));
}

#[test]
fn load_image_missing_file_is_not_found() {
    let path = scratch_dir("missing").join("nope.png");
    let _ = std::fs::remove_file(&path);
    let err = load_image(&path).unwrap_err();
    match err {
        LayerStackError::ImageNotFound(p) => assert_eq!(p, path),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn load_image_directory_is_not_found() {
    let dir = scratch_dir("a_directory");
    let err = load_image(&dir).unwrap_err();
    assert!(matches!(err, LayerStackError::ImageNotFound(_)));
}

#[test]
fn load_image_undecodable_file_is_unsupported() {
    let path = scratch_dir("garbage").join("junk.png");
    std::fs::write(&path, b"\x00\x01 not a png").unwrap();
    let err = load_image(&path).unwrap_err();
    assert!(matches!(err, LayerStackError::UnsupportedFormat { .. }));
}

#[test]
fn load_image_converts_rgb_to_opaque_rgba() {
    let path = scratch_dir("rgb").join("rgb.png");
    image::RgbImage::from_pixel(2, 3, image::Rgb([1, 2, 3]))
        .save(&path)
        .unwrap();
    let img = load_image(&path).unwrap();
    assert_eq!(img.dimensions(), (2, 3));
    assert!(img.pixels().all(|p| *p == Rgba([1, 2, 3, 255])));
}

#[test]
fn fit_to_size_resamples_to_target() {
    let img = RgbaImage::from_pixel(4, 4, Rgba([9, 9, 9, 255]));
    let out = fit_to_size(img, Size2::new(8, 2));
    assert_eq!(out.dimensions(), (8, 2));
}

#[test]
fn fit_to_size_same_size_is_identity() {
    let mut img = RgbaImage::new(2, 2);
    img.put_pixel(1, 0, Rgba([255, 0, 0, 255]));
    let out = fit_to_size(img.clone(), Size2::new(2, 2));
    assert_eq!(out, img);
}
