use std::fmt;

use crate::constants::TRAIL_ALPHA;

/// 8-bit RGB with a floating-point alpha, matching CSS `rgba()`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Same channels with the alpha replaced.
    #[inline]
    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

const PASTEL_ALPHA: f32 = 0.4;

pub const PASTEL_PALETTE: [Rgba; 5] = [
    Rgba::new(255, 223, 223, PASTEL_ALPHA), // pale rose
    Rgba::new(255, 240, 245, PASTEL_ALPHA), // light lavender
    Rgba::new(255, 228, 225, PASTEL_ALPHA), // peach
    Rgba::new(242, 222, 222, PASTEL_ALPHA), // rosy beige
    Rgba::new(230, 230, 250, PASTEL_ALPHA), // very pale blue
];

pub const TRAIL_WHITE: Rgba = Rgba::new(255, 255, 255, TRAIL_ALPHA);
pub const TRANSPARENT_WHITE: Rgba = Rgba::new(255, 255, 255, 0.0);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_css_rgba() {
        assert_eq!(PASTEL_PALETTE[0].to_string(), "rgba(255, 223, 223, 0.4)");
        assert_eq!(TRANSPARENT_WHITE.to_string(), "rgba(255, 255, 255, 0)");
    }

    #[test]
    fn with_alpha_keeps_channels() {
        let c = PASTEL_PALETTE[4].with_alpha(0.075);
        assert_eq!((c.r, c.g, c.b), (230, 230, 250));
        assert_eq!(c.a, 0.075);
    }
}
