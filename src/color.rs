//! Color types and the fixed shape palette.
//!
//! `Rgba8` is the working color of layers and the compositor. The palette
//! is the closed set of fill colors a dataset image may use; its RGB values
//! are the CSS/X11 named colors of the same name.

use std::fmt;
use std::str::FromStr;

use crate::error::SynthError;

// ============================================================================
// Rgba8
// ============================================================================

/// RGBA color with u8 components, non-premultiplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const BASE_SHIFT: u32 = 8;
    pub const BASE_MSB: u32 = 1 << (Self::BASE_SHIFT - 1);

    pub const WHITE: Self = Self::new_opaque(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn new_opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Returns `true` if the alpha channel is zero.
    #[inline]
    pub fn is_transparent(&self) -> bool {
        self.a == 0
    }

    /// Fixed-point interpolation `p + (q - p) * a / 255`, exact at the
    /// endpoints: `a == 0` yields `p`, `a == 255` yields `q`.
    #[inline]
    pub fn lerp(p: u8, q: u8, a: u8) -> u8 {
        let t = (q as i32 - p as i32) * a as i32 + Self::BASE_MSB as i32 - (p > q) as i32;
        (p as i32 + (((t >> Self::BASE_SHIFT) + t) >> Self::BASE_SHIFT)) as u8
    }
}

// ============================================================================
// PaletteColor
// ============================================================================

/// One of the seven fill colors a shape may be drawn in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaletteColor {
    Red,
    Green,
    Blue,
    Yellow,
    Purple,
    Orange,
    Pink,
}

impl PaletteColor {
    /// Every palette entry, in sampling order.
    pub const ALL: [PaletteColor; 7] = [
        PaletteColor::Red,
        PaletteColor::Green,
        PaletteColor::Blue,
        PaletteColor::Yellow,
        PaletteColor::Purple,
        PaletteColor::Orange,
        PaletteColor::Pink,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PaletteColor::Red => "red",
            PaletteColor::Green => "green",
            PaletteColor::Blue => "blue",
            PaletteColor::Yellow => "yellow",
            PaletteColor::Purple => "purple",
            PaletteColor::Orange => "orange",
            PaletteColor::Pink => "pink",
        }
    }

    /// The opaque RGBA value of this color.
    pub fn rgba(self) -> Rgba8 {
        match self {
            PaletteColor::Red => Rgba8::new_opaque(255, 0, 0),
            PaletteColor::Green => Rgba8::new_opaque(0, 128, 0),
            PaletteColor::Blue => Rgba8::new_opaque(0, 0, 255),
            PaletteColor::Yellow => Rgba8::new_opaque(255, 255, 0),
            PaletteColor::Purple => Rgba8::new_opaque(128, 0, 128),
            PaletteColor::Orange => Rgba8::new_opaque(255, 165, 0),
            PaletteColor::Pink => Rgba8::new_opaque(255, 192, 203),
        }
    }
}

impl fmt::Display for PaletteColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PaletteColor {
    type Err = SynthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PaletteColor::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| SynthError::InvalidColor(s.to_string()))
    }
}

// ============================================================================
// Tests
// ============================================================================
