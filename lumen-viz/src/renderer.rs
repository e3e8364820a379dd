use smart_leds::hsv::{hsv2rgb, Hsv};
use smart_leds::RGB8;

use crate::animation::AnimationState;
use crate::bands::NUM_BANDS;
use crate::frame::{Frame, MATRIX_HEIGHT, MATRIX_WIDTH};
use crate::icons::{unpack, Icon};

/// Color of one bar step; the hue climbs along the bar.
pub fn bar_color(step: u8) -> RGB8 {
    hsv2rgb(Hsv {
        hue: 128u8.wrapping_add(step.wrapping_mul(16)),
        sat: 255,
        val: 255,
    })
}

/// Draw the 8 band bars into `frame`, lowest band at the bottom edge.
///
/// Bars grow from the right edge leftwards; unlit steps stay off.
pub fn render_bars(heights: &[u32; NUM_BANDS], frame: &mut Frame) {
    frame.clear();
    for (band, &height) in heights.iter().enumerate() {
        let y = MATRIX_HEIGHT - 1 - band;
        for step in 0..MATRIX_WIDTH {
            if (step as u32) < height {
                let x = MATRIX_WIDTH - 1 - step;
                frame.set(x, y, bar_color(step as u8));
            }
        }
    }
}

/// Decorative icon mode, independent of the audio signal.
pub struct IconScene {
    anim: AnimationState,
}

impl IconScene {
    pub const fn new() -> Self {
        Self {
            anim: AnimationState::new(),
        }
    }

    /// Draw one animation step of `icon` and return the brightness level the
    /// panel should use for this frame.
    pub fn render(&mut self, icon: &Icon, frame: &mut Frame) -> u8 {
        self.anim.tick();
        let order = self.anim.order();
        for (i, &packed) in icon.iter().enumerate() {
            let color = order.apply(unpack(packed));
            frame.set(i % MATRIX_WIDTH, i / MATRIX_WIDTH, color);
        }
        self.anim.brightness()
    }

    pub fn animation(&self) -> &AnimationState {
        &self.anim
    }
}
