//! Per-format decode into, and encode from, the canonical hubs.

use crate::hub::Canonical;
use pixkit_core::formats::*;
use pixkit_core::PixelFormat;

/// A cataloged pixel that can pass through the canonical hubs.
///
/// Implemented for every type in [`pixkit_core::formats`]; this is the bound
/// every generic conversion, compositing and interpolation routine uses.
pub trait CanonicalPixel: PixelFormat {
    /// Decodes into the hub that keeps this format's native precision.
    fn to_canonical(self) -> Canonical;

    /// Encodes from any hub using this format's narrowing rules.
    fn from_canonical(hub: Canonical) -> Self;
}

impl CanonicalPixel for Alpha8 {
    #[inline]
    fn to_canonical(self) -> Canonical {
        Canonical::Alpha(self.a)
    }

    #[inline]
    fn from_canonical(hub: Canonical) -> Self {
        Self::new(hub.to_alpha8())
    }
}

impl CanonicalPixel for Luminance8 {
    #[inline]
    fn to_canonical(self) -> Canonical {
        Canonical::Luma8(self.l)
    }

    #[inline]
    fn from_canonical(hub: Canonical) -> Self {
        Self::new(hub.to_luma8())
    }
}

impl CanonicalPixel for Luminance16 {
    #[inline]
    fn to_canonical(self) -> Canonical {
        Canonical::Luma16(self.l)
    }

    #[inline]
    fn from_canonical(hub: Canonical) -> Self {
        Self::new(hub.to_luma16())
    }
}

impl CanonicalPixel for Luminance32F {
    #[inline]
    fn to_canonical(self) -> Canonical {
        Canonical::LumaF(self.l)
    }

    #[inline]
    fn from_canonical(hub: Canonical) -> Self {
        Self::new(hub.to_luma_f32())
    }
}

impl CanonicalPixel for Bgr565 {
    #[inline]
    fn to_canonical(self) -> Canonical {
        let [b, g, r] = self.to_bgr8();
        Canonical::Straight8(Bgra32::opaque(b, g, r))
    }

    #[inline]
    fn from_canonical(hub: Canonical) -> Self {
        let p = hub.to_bgra32();
        Self::from_bgr8(p.b, p.g, p.r)
    }
}

impl CanonicalPixel for Bgra5551 {
    #[inline]
    fn to_canonical(self) -> Canonical {
        let [b, g, r, a] = self.to_bgra8();
        Canonical::Straight8(Bgra32::new(b, g, r, a))
    }

    #[inline]
    fn from_canonical(hub: Canonical) -> Self {
        let p = hub.to_bgra32();
        Self::from_bgra8(p.b, p.g, p.r, p.a)
    }
}

impl CanonicalPixel for Bgra4444 {
    #[inline]
    fn to_canonical(self) -> Canonical {
        let [b, g, r, a] = self.to_bgra8();
        Canonical::Straight8(Bgra32::new(b, g, r, a))
    }

    #[inline]
    fn from_canonical(hub: Canonical) -> Self {
        let p = hub.to_bgra32();
        Self::from_bgra8(p.b, p.g, p.r, p.a)
    }
}

impl CanonicalPixel for Bgr24 {
    #[inline]
    fn to_canonical(self) -> Canonical {
        Canonical::Straight8(Bgra32::opaque(self.b, self.g, self.r))
    }

    #[inline]
    fn from_canonical(hub: Canonical) -> Self {
        let p = hub.to_bgra32();
        Self::new(p.b, p.g, p.r)
    }
}

impl CanonicalPixel for Rgb24 {
    #[inline]
    fn to_canonical(self) -> Canonical {
        Canonical::Straight8(Bgra32::opaque(self.b, self.g, self.r))
    }

    #[inline]
    fn from_canonical(hub: Canonical) -> Self {
        let p = hub.to_bgra32();
        Self::new(p.r, p.g, p.b)
    }
}

impl CanonicalPixel for Bgra32 {
    #[inline]
    fn to_canonical(self) -> Canonical {
        Canonical::Straight8(self)
    }

    #[inline]
    fn from_canonical(hub: Canonical) -> Self {
        hub.to_bgra32()
    }
}

impl CanonicalPixel for Rgba32 {
    #[inline]
    fn to_canonical(self) -> Canonical {
        Canonical::Straight8(Bgra32::new(self.b, self.g, self.r, self.a))
    }

    #[inline]
    fn from_canonical(hub: Canonical) -> Self {
        let p = hub.to_bgra32();
        Self::new(p.r, p.g, p.b, p.a)
    }
}

impl CanonicalPixel for Argb32 {
    #[inline]
    fn to_canonical(self) -> Canonical {
        Canonical::Straight8(Bgra32::new(self.b, self.g, self.r, self.a))
    }

    #[inline]
    fn from_canonical(hub: Canonical) -> Self {
        let p = hub.to_bgra32();
        Self::new(p.a, p.r, p.g, p.b)
    }
}

impl CanonicalPixel for Bgrp32 {
    #[inline]
    fn to_canonical(self) -> Canonical {
        Canonical::Premul8(self)
    }

    #[inline]
    fn from_canonical(hub: Canonical) -> Self {
        hub.to_bgrp32()
    }
}

impl CanonicalPixel for Rgbp32 {
    #[inline]
    fn to_canonical(self) -> Canonical {
        Canonical::Premul8(Bgrp32::new(self.b, self.g, self.r, self.a))
    }

    #[inline]
    fn from_canonical(hub: Canonical) -> Self {
        let p = hub.to_bgrp32();
        Self::new(p.r, p.g, p.b, p.a)
    }
}

impl CanonicalPixel for Bgr96F {
    #[inline]
    fn to_canonical(self) -> Canonical {
        Canonical::StraightF(Rgba128F::new(self.r, self.g, self.b, 1.0))
    }

    #[inline]
    fn from_canonical(hub: Canonical) -> Self {
        let p = hub.to_rgba128f();
        Self::new(p.b, p.g, p.r)
    }
}

impl CanonicalPixel for Rgb96F {
    #[inline]
    fn to_canonical(self) -> Canonical {
        Canonical::StraightF(Rgba128F::new(self.r, self.g, self.b, 1.0))
    }

    #[inline]
    fn from_canonical(hub: Canonical) -> Self {
        let p = hub.to_rgba128f();
        Self::new(p.r, p.g, p.b)
    }
}

impl CanonicalPixel for Bgra128F {
    #[inline]
    fn to_canonical(self) -> Canonical {
        Canonical::StraightF(Rgba128F::new(self.r, self.g, self.b, self.a))
    }

    #[inline]
    fn from_canonical(hub: Canonical) -> Self {
        let p = hub.to_rgba128f();
        Self::new(p.b, p.g, p.r, p.a)
    }
}

impl CanonicalPixel for Rgba128F {
    #[inline]
    fn to_canonical(self) -> Canonical {
        Canonical::StraightF(self)
    }

    #[inline]
    fn from_canonical(hub: Canonical) -> Self {
        hub.to_rgba128f()
    }
}

impl CanonicalPixel for Rgbp128F {
    #[inline]
    fn to_canonical(self) -> Canonical {
        Canonical::PremulF(self)
    }

    #[inline]
    fn from_canonical(hub: Canonical) -> Self {
        hub.to_rgbp128f()
    }
}

/// Decodes any pixel into 8-bit straight alpha.
#[inline]
pub fn to_bgra32<S: CanonicalPixel>(src: S) -> Bgra32 {
    src.to_canonical().to_bgra32()
}

/// Decodes any pixel into 8-bit premultiplied alpha.
#[inline]
pub fn to_bgrp32<S: CanonicalPixel>(src: S) -> Bgrp32 {
    src.to_canonical().to_bgrp32()
}

/// Decodes any pixel into float straight alpha.
#[inline]
pub fn to_rgba128f<S: CanonicalPixel>(src: S) -> Rgba128F {
    src.to_canonical().to_rgba128f()
}

/// Decodes any pixel into float premultiplied alpha.
#[inline]
pub fn to_rgbp128f<S: CanonicalPixel>(src: S) -> Rgbp128F {
    src.to_canonical().to_rgbp128f()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity<T: CanonicalPixel>(px: T) {
        assert_eq!(T::from_canonical(px.to_canonical()), px, "{:?}", T::CODE);
    }

    #[test]
    fn test_identity_through_hub() {
        identity(Alpha8::new(3));
        identity(Luminance8::new(200));
        identity(Luminance16::new(40000));
        identity(Luminance32F::new(0.3));
        identity(Bgr565::from_packed(0xbeef));
        identity(Bgra5551::from_packed(0x7abc));
        identity(Bgra4444::from_packed(0x1234));
        identity(Bgr24::new(1, 2, 3));
        identity(Rgb24::new(1, 2, 3));
        identity(Bgra32::new(1, 2, 3, 4));
        identity(Rgba32::new(1, 2, 3, 4));
        identity(Argb32::new(1, 2, 3, 4));
        identity(Bgrp32::new(1, 2, 3, 4));
        identity(Rgbp32::new(1, 2, 3, 4));
        identity(Bgr96F::new(0.1, 2.0, -0.5));
        identity(Rgb96F::new(0.1, 0.2, 0.3));
        identity(Bgra128F::new(0.1, 0.2, 0.3, 0.4));
        identity(Rgba128F::new(0.1, 0.2, 0.3, 0.4));
        identity(Rgbp128F::new(0.1, 0.2, 0.3, 0.4));
    }

    #[test]
    fn test_channel_order_mapping() {
        let px = Argb32::new(40, 30, 20, 10);
        let rgba = Rgba32::from_canonical(px.to_canonical());
        assert_eq!(rgba, Rgba32::new(30, 20, 10, 40));
        let rgbp = Rgbp32::new(9, 8, 7, 10);
        let bgrp = Bgrp32::from_canonical(rgbp.to_canonical());
        assert_eq!(bgrp, Bgrp32::new(7, 8, 9, 10));
    }
}
