use crate::color::ColorOrder;

#[allow(unused_imports)]
use micromath::F32Ext;

/// Counts between two color-order advances.
const ORDER_PERIOD: u32 = 1_000;

/// Base level of the brightness pulse.
const PULSE_BASE: f32 = 30.0;

/// Swing of the brightness pulse around its base.
const PULSE_SWING: f32 = 30.0;

/// State machine behind the decorative icon mode.
///
/// A single monotonically increasing counter drives two effects:
/// - every [`ORDER_PERIOD`] counts the active [`ColorOrder`] advances to the
///   next of the six fixed permutations, so the full cycle closes after
///   6000 counts;
/// - the brightness pulses sinusoidally in the counter, staying within
///   `PULSE_BASE ± PULSE_SWING`.
///
/// The spectrum path never touches this state; it is advanced once per icon
/// render call.
pub struct AnimationState {
    counter: u32,
    order: ColorOrder,
}

impl AnimationState {
    pub const fn new() -> Self {
        Self {
            counter: 0,
            order: ColorOrder::Rgb,
        }
    }

    /// Advance the counter by one render call.
    pub fn tick(&mut self) {
        self.counter = self.counter.wrapping_add(1);
        if self.counter % ORDER_PERIOD == 0 {
            self.order = self.order.next();
        }
    }

    pub fn order(&self) -> ColorOrder {
        self.order
    }

    pub fn counter(&self) -> u32 {
        self.counter
    }

    /// Current level of the brightness pulse, in 0..=60.
    pub fn brightness(&self) -> u8 {
        (PULSE_BASE + PULSE_SWING * (self.counter as f32 / 100.0).sin()) as u8
    }
}
