//! Blend modes and the blend value they feed into `over`.
//!
//! A blend value is the color used where source and destination overlap.
//! It is derived from the straight source color alone, so every mode runs
//! through the same `over` primitive:
//!
//! | Mode | Blend value |
//! |---|---|
//! | [`BlendMode::Normal`] | `src` |
//! | [`BlendMode::Add`] | `min(1, src + src)` |
//! | [`BlendMode::Multiply`] | `src * src` |

use glam::Vec3;
use pixkit_core::Bgra32;

/// Blend mode for compositing operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BlendMode {
    /// Plain source-over.
    #[default]
    Normal,
    /// Saturating add of the source onto itself.
    Add,
    /// Source multiplied by itself.
    Multiply,
}

impl BlendMode {
    /// All modes.
    pub const ALL: [BlendMode; 3] = [Self::Normal, Self::Add, Self::Multiply];

    /// Mode name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Add => "add",
            Self::Multiply => "multiply",
        }
    }

    /// 8-bit blend value as `[b, g, r]`.
    #[inline]
    pub fn blend_u8(self, src: Bgra32) -> [u8; 3] {
        let s = [src.b, src.g, src.r];
        match self {
            Self::Normal => s,
            Self::Add => s.map(|c| c.saturating_add(c)),
            Self::Multiply => s.map(|c| mul_u8(c, c)),
        }
    }

    /// Float blend value as `rgb` from a straight source color.
    #[inline]
    pub fn blend_f32(self, src: Vec3) -> Vec3 {
        match self {
            Self::Normal => src,
            Self::Add => (src + src).min(Vec3::ONE),
            Self::Multiply => src * src,
        }
    }
}

impl std::fmt::Display for BlendMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Normalized product `a * b / 255`, rounded to nearest.
#[inline]
fn mul_u8(a: u8, b: u8) -> u8 {
    ((a as u16 * b as u16 + 127) / 255) as u8
}
