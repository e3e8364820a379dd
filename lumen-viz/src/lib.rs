#![no_std]

pub mod animation;
pub mod bands;
pub mod color;
pub mod frame;
pub mod icons;
pub mod panel;
pub mod renderer;

pub use animation::AnimationState;
pub use bands::{band_for_bin, BandMapper, NUM_BANDS};
pub use color::ColorOrder;
pub use frame::{led_index, Frame, MATRIX_HEIGHT, MATRIX_WIDTH, NUM_LEDS};
pub use icons::{unpack, Icon, HEART, PAIRING};
pub use panel::{LedPanel, SmartLedPanel};
pub use renderer::{bar_color, render_bars, IconScene};
pub use smart_leds::RGB8;
