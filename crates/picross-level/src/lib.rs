//! Image-backed nonogram levels.
//!
//! A level's solution is read from a picture: every pixel becomes one cell, and
//! a cell is filled exactly when its pixel is opaque pure black. Clues for
//! every row and column are computed once, when the level is loaded.
//!
//! - [`Level`] - the loaded level: name, catalog id, solution and clues.
//! - [`PixelSource`] - the only capability the loader needs from an image.
//! - [`AssetLayout`] - where level images live on disk.
//!
//! # Examples
//!
//! ```
//! use image::{Rgba, RgbaImage};
//! use picross_level::Level;
//!
//! let mut image = RgbaImage::from_pixel(3, 2, Rgba([255, 255, 255, 255]));
//! image.put_pixel(0, 0, Rgba([0, 0, 0, 255]));
//! image.put_pixel(2, 1, Rgba([0, 0, 0, 255]));
//!
//! let level = Level::from_pixels("corners", 0, &image).unwrap();
//! assert_eq!(level.width(), 3);
//! assert_eq!(level.height(), 2);
//! assert_eq!(level.row_clues()[0].to_string(), "1");
//! assert_eq!(level.column_clues()[1].to_string(), "");
//! ```

pub use self::{
    assets::AssetLayout,
    level::{Level, LevelError},
    pixels::PixelSource,
};

mod assets;
mod level;
mod pixels;
