//! Core presentation types used throughout the Warchief client

use serde::{Deserialize, Serialize};

/// RGBA color with floating point components (0.0 to 1.0)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);

    /// Create a color from RGB values (alpha = 1.0)
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    /// Create a color from RGBA values
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Pack back into a hex value (0xRRGGBB), dropping alpha
    pub fn to_hex(&self) -> u32 {
        let [r, g, b, _] = self.to_rgba8();
        (u32::from(r) << 16) | (u32::from(g) << 8) | u32::from(b)
    }

    /// Convert to 8-bit channels, as immediate-mode UI toolkits expect
    pub fn to_rgba8(&self) -> [u8; 4] {
        let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        [channel(self.r), channel(self.g), channel(self.b), channel(self.a)]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Colors shared by the editor badges and item name text
pub mod palette {
    use super::Color;

    pub const BADGE_BLUE: Color = Color::rgb(0.29, 0.56, 0.89);
    pub const BADGE_GREEN: Color = Color::rgb(0.30, 0.80, 0.35);
    pub const BADGE_ORANGE: Color = Color::rgb(1.0, 0.60, 0.10);
    pub const BADGE_RED: Color = Color::rgb(0.90, 0.20, 0.20);

    pub const RARITY_COMMON: Color = Color::rgb(0.7, 0.7, 0.7);
    pub const RARITY_UNCOMMON: Color = Color::rgb(0.3, 0.8, 0.3);
    pub const RARITY_RARE: Color = Color::rgb(0.3, 0.5, 1.0);
    pub const RARITY_EPIC: Color = Color::rgb(0.6, 0.2, 0.9);
    pub const RARITY_LEGENDARY: Color = Color::rgb(1.0, 0.6, 0.0);

    pub const TIER_INANIMATE: Color = Color::rgb(0.55, 0.55, 0.6);
    pub const TIER_IMBUED: Color = Color::rgb(0.45, 0.75, 1.0);
    pub const TIER_SENTIENT: Color = Color::rgb(0.85, 0.45, 1.0);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_hex() {
        assert_eq!(Color::WHITE.to_hex(), 0xFFFFFF);
        assert_eq!(Color::rgb(1.0, 0.5, 0.0).to_hex(), 0xFF8000);
        assert_eq!(Color::rgba(0.2, 0.4, 0.8, 0.0).to_hex(), 0x3366CC);
    }

    #[test]
    fn test_rgba8_clamps_out_of_range() {
        let color = Color::rgba(1.5, -0.2, 0.5, 1.0);
        assert_eq!(color.to_rgba8(), [255, 0, 128, 255]);
    }

    #[test]
    fn test_palette_is_opaque() {
        for color in [palette::BADGE_BLUE, palette::RARITY_EPIC, palette::TIER_SENTIENT] {
            assert_eq!(color.to_rgba8()[3], 255);
        }
    }
}
