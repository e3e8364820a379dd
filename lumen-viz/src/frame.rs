use smart_leds::RGB8;

pub const MATRIX_WIDTH: usize = 8;
pub const MATRIX_HEIGHT: usize = 8;
pub const NUM_LEDS: usize = MATRIX_WIDTH * MATRIX_HEIGHT;

const OFF: RGB8 = RGB8 { r: 0, g: 0, b: 0 };

/// Flat index of a matrix position; the panel is wired row-major.
pub fn led_index(x: usize, y: usize) -> usize {
    y * MATRIX_WIDTH + x
}

/// One full image for the panel, in wiring order.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Frame {
    pixels: [RGB8; NUM_LEDS],
}

impl Frame {
    pub const fn new() -> Self {
        Self {
            pixels: [OFF; NUM_LEDS],
        }
    }

    pub fn clear(&mut self) {
        self.pixels = [OFF; NUM_LEDS];
    }

    pub fn set(&mut self, x: usize, y: usize, color: RGB8) {
        self.pixels[led_index(x, y)] = color;
    }

    pub fn pixels(&self) -> &[RGB8; NUM_LEDS] {
        &self.pixels
    }

    /// Pixels in wiring order, for handing to a strip driver.
    pub fn iter(&self) -> impl Iterator<Item = RGB8> + '_ {
        self.pixels.iter().copied()
    }

    pub fn is_lit(&self, x: usize, y: usize) -> bool {
        self.pixels[led_index(x, y)] != OFF
    }
}
