#![cfg(feature = "image-io")]

use pcbtrace::io::{load_occupancy_grid, load_rgb_image};
use pcbtrace::{Cell, PcbError};

#[test]
fn png_round_trip_binarizes_pixels() {
    let mut img = image::RgbImage::new(4, 2);
    img.put_pixel(1, 0, image::Rgb([255, 255, 255]));
    img.put_pixel(3, 1, image::Rgb([200, 150, 40]));

    let path = std::env::temp_dir().join(format!("pcbtrace_io_{}.png", std::process::id()));
    img.save(&path).unwrap();

    let rgb = load_rgb_image(&path).unwrap();
    assert_eq!((rgb.width(), rgb.height()), (4, 2));
    assert_eq!(rgb.pixels()[7], [200, 150, 40]);

    let grid = load_occupancy_grid(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(grid.get(0, 1), Some(Cell::Foreground));
    assert_eq!(grid.get(1, 3), Some(Cell::Foreground));
    assert_eq!(grid.cells().iter().filter(|c| c.is_foreground()).count(), 2);
}

#[test]
fn missing_file_is_unreadable() {
    let err = load_rgb_image("/nonexistent/board.bmp").unwrap_err();
    assert!(matches!(err, PcbError::UnreadableImage { .. }));
}
