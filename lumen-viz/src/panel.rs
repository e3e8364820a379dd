use smart_leds::{brightness, SmartLedsWrite, RGB8};

use crate::frame::Frame;

/// Boundary to the physical matrix: a global brightness level and a
/// synchronous flush that completes the hardware transfer before returning.
pub trait LedPanel {
    type Error;

    fn set_brightness(&mut self, level: u8);

    fn flush(&mut self, frame: &Frame) -> Result<(), Self::Error>;
}

/// Adapter turning any `smart-leds` strip driver into a [`LedPanel`].
pub struct SmartLedPanel<W> {
    writer: W,
    level: u8,
}

impl<W> SmartLedPanel<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, level: 0 }
    }
}

impl<W> LedPanel for SmartLedPanel<W>
where
    W: SmartLedsWrite<Color = RGB8>,
{
    type Error = W::Error;

    fn set_brightness(&mut self, level: u8) {
        self.level = level;
    }

    fn flush(&mut self, frame: &Frame) -> Result<(), Self::Error> {
        self.writer.write(brightness(frame.iter(), self.level))
    }
}
