use smart_leds::RGB8;

/// Active permutation of the red/green/blue channel assignment.
///
/// Applied to every color the icon renderer produces; only the animation
/// state machine ever advances it.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ColorOrder {
    Rgb,
    Rbg,
    Bgr,
    Brg,
    Grb,
    Gbr,
}

impl ColorOrder {
    /// Reorder the channels of `color` according to this permutation.
    pub fn apply(self, color: RGB8) -> RGB8 {
        let RGB8 { r, g, b } = color;
        match self {
            ColorOrder::Rgb => RGB8 { r, g, b },
            ColorOrder::Rbg => RGB8 { r, g: b, b: g },
            ColorOrder::Bgr => RGB8 { r: b, g, b: r },
            ColorOrder::Brg => RGB8 { r: b, g: r, b: g },
            ColorOrder::Grb => RGB8 { r: g, g: r, b },
            ColorOrder::Gbr => RGB8 { r: g, g: b, b: r },
        }
    }

    /// Next permutation in the fixed six-step cycle.
    pub fn next(self) -> Self {
        match self {
            ColorOrder::Rgb => ColorOrder::Rbg,
            ColorOrder::Rbg => ColorOrder::Bgr,
            ColorOrder::Bgr => ColorOrder::Brg,
            ColorOrder::Brg => ColorOrder::Grb,
            ColorOrder::Grb => ColorOrder::Gbr,
            ColorOrder::Gbr => ColorOrder::Rgb,
        }
    }
}
