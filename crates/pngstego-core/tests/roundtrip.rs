use std::fs::{self, File};
use std::io::Read;
use std::path::Path;

use tempfile::TempDir;

use pngstego_core::{commands, lsb, Persist, Raster, RgbaImage, StegoError};

fn write_carrier_png(path: &Path, width: u32, height: u32) {
    let img = RgbaImage::from_fn(width, height, |x, y| {
        let i = (x * 5 + y * 17) as u8;
        image::Rgba([i, i.wrapping_add(40), i.wrapping_add(80), 255])
    });
    img.save(path).expect("carrier image was not written");
}

fn assert_eq_file_content(file1: &Path, file2: &Path, msg: &str) {
    let mut content1 = Vec::new();
    File::open(file1)
        .expect("file left was not openable")
        .read_to_end(&mut content1)
        .expect("file left was not readable");

    let mut content2 = Vec::new();
    File::open(file2)
        .expect("file right was not openable")
        .read_to_end(&mut content2)
        .expect("file right was not readable");

    assert_eq!(content1, content2, "{}", msg);
}

#[test]
fn should_embed_and_extract_a_text_payload_through_png_files() {
    let out_dir = TempDir::new().unwrap();
    let carrier = out_dir.path().join("carrier.png");
    let payload = out_dir.path().join("secret.txt");
    let embedded = out_dir.path().join("embedded.png");
    let recovered = out_dir.path().join("recovered.txt");

    let text = "Hello World, this survives the PNG container.";
    write_carrier_png(&carrier, 64, 64);
    fs::write(&payload, text).unwrap();

    commands::embed_file(&carrier, &payload, &embedded).expect("embedding failed");
    assert!(
        fs::metadata(&embedded).expect("output image was not written").len() > 0,
        "file is not supposed to be empty"
    );

    let bytes = commands::extract_file(&embedded, &recovered).expect("extraction failed");
    assert_eq!(bytes, text.len());
    assert_eq_file_content(&payload, &recovered, "recovered payload did not match");
}

#[test]
fn should_embed_and_extract_a_binary_payload() {
    let out_dir = TempDir::new().unwrap();
    let carrier = out_dir.path().join("carrier.png");
    let payload = out_dir.path().join("blob.bin");
    let embedded = out_dir.path().join("embedded.png");
    let recovered = out_dir.path().join("recovered.bin");

    write_carrier_png(&carrier, 80, 60);
    let blob: Vec<u8> = (0..1666u32).map(|i| (i % 251) as u8).collect();
    fs::write(&payload, &blob).unwrap();

    commands::embed_file(&carrier, &payload, &embedded).expect("embedding failed");
    let bytes = commands::extract_file(&embedded, &recovered).expect("extraction failed");

    assert_eq!(bytes, blob.len());
    assert_eq_file_content(&payload, &recovered, "recovered blob did not match");
}

#[test]
fn should_survive_a_png_reencode_cycle_in_memory() {
    let out_dir = TempDir::new().unwrap();
    let embedded = out_dir.path().join("embedded.png");

    let img = RgbaImage::from_fn(24, 24, |x, y| {
        image::Rgba([(x * 9) as u8, (y * 9) as u8, 7, 255])
    });
    let mut raster = Raster::from_rgba8(img);
    lsb::embed(&mut raster, b"bit-exact across encode and decode").unwrap();
    raster.save_as(&embedded).unwrap();

    let reloaded = Raster::from_file(&embedded).unwrap();
    assert_eq!(
        lsb::extract(&reloaded).unwrap(),
        b"bit-exact across encode and decode"
    );
}

#[test]
fn should_refuse_a_payload_larger_than_the_carrier() {
    let out_dir = TempDir::new().unwrap();
    let carrier = out_dir.path().join("carrier.png");
    let payload = out_dir.path().join("too_big.bin");
    let embedded = out_dir.path().join("embedded.png");

    // 8x8 holds 24 bytes gross, 20 net
    write_carrier_png(&carrier, 8, 8);
    fs::write(&payload, vec![0u8; 21]).unwrap();

    match commands::embed_file(&carrier, &payload, &embedded) {
        Err(StegoError::CapacityExceeded {
            required: 21,
            available: 20,
        }) => (),
        other => panic!("expected CapacityExceeded, got {other:?}"),
    }
    assert!(!embedded.exists(), "no output may be written on failure");
}

#[test]
fn should_reject_a_grayscale_carrier() {
    let out_dir = TempDir::new().unwrap();
    let carrier = out_dir.path().join("gray.png");
    image::GrayImage::from_pixel(16, 16, image::Luma([42]))
        .save(&carrier)
        .unwrap();

    match Raster::from_file(&carrier) {
        Err(StegoError::UnsupportedColorType) => (),
        other => panic!("expected UnsupportedColorType, got {other:?}"),
    }
}

#[test]
fn should_reject_a_file_that_only_pretends_to_be_png() {
    let out_dir = TempDir::new().unwrap();
    let carrier = out_dir.path().join("fake.png");
    fs::write(&carrier, "definitely not a png").unwrap();

    match Raster::from_file(&carrier) {
        Err(StegoError::InvalidImageMedia) => (),
        other => panic!("expected InvalidImageMedia, got {other:?}"),
    }
}
