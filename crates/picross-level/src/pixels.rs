use image::{DynamicImage, GenericImageView as _, Rgba, RgbaImage};

const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// A decoded rectangular picture that can answer "is this pixel black?".
///
/// `x` is the horizontal coordinate (column) and `y` the vertical one (row).
pub trait PixelSource {
    /// Returns `(width, height)` in pixels.
    fn dimensions(&self) -> (u32, u32);

    /// Returns `true` if the pixel at `(x, y)` is exactly opaque black.
    ///
    /// Any other color, including near-black anti-aliasing, is not black.
    fn is_black(&self, x: u32, y: u32) -> bool;
}

impl PixelSource for RgbaImage {
    fn dimensions(&self) -> (u32, u32) {
        RgbaImage::dimensions(self)
    }

    fn is_black(&self, x: u32, y: u32) -> bool {
        *self.get_pixel(x, y) == BLACK
    }
}

impl PixelSource for DynamicImage {
    fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    fn is_black(&self, x: u32, y: u32) -> bool {
        self.get_pixel(x, y) == BLACK
    }
}
