//! Conversion matrix tests across the whole catalog.

use crate::{convert_typed, init_tracing, sample_bytes};
use approx::assert_abs_diff_eq;
use pixkit_convert::{convert, convert_unchecked, is_supported, ByteConverter, Converter};
use pixkit_core::prelude::*;

const SAMPLES: usize = 256;

#[test]
fn test_matrix_support() {
    let mut supported = 0;
    for src in FormatCode::ALL {
        for dst in FormatCode::ALL {
            let expect = !(src == FormatCode::Alpha8 && dst.is_opaque());
            assert_eq!(is_supported(src, dst), expect, "{src} -> {dst}");
            supported += expect as usize;
        }
    }
    assert_eq!(supported, 19 * 19 - 8);
}

#[test]
fn test_byte_dispatch_matches_typed() {
    init_tracing();
    for src in FormatCode::ALL {
        let bytes = sample_bytes(src, SAMPLES, src.code() as u64);
        let n = bytes.len() / src.bytes_per_pixel();
        for dst in FormatCode::ALL {
            let conv = match ByteConverter::new(src, dst) {
                Ok(conv) => conv,
                Err(err) => {
                    assert!(err.is_unsupported(), "{src} -> {dst}: {err}");
                    assert!(!is_supported(src, dst));
                    continue;
                }
            };
            let mut out = vec![0u8; n * dst.bytes_per_pixel()];
            conv.convert_row(&bytes, &mut out).unwrap();
            assert_eq!(out, convert_typed(src, dst, &bytes), "{src} -> {dst}");
        }
    }
}

#[test]
fn test_identity_round_trip() {
    for format in FormatCode::ALL {
        let bytes = sample_bytes(format, SAMPLES, 7);
        let conv = ByteConverter::new(format, format).unwrap();
        let mut out = vec![0u8; bytes.len()];
        conv.convert_row(&bytes, &mut out).unwrap();
        assert_eq!(out, bytes, "{format}");
    }
}

#[test]
fn test_opaque_survives_alpha_formats() {
    let mids = [
        FormatCode::Bgra32,
        FormatCode::Rgba32,
        FormatCode::Argb32,
        FormatCode::Bgrp32,
        FormatCode::Rgbp32,
        FormatCode::Bgra128F,
        FormatCode::Rgba128F,
        FormatCode::Rgbp128F,
    ];
    let src = sample_bytes(FormatCode::Bgr24, SAMPLES, 11);

    for mid in mids {
        let there = convert_typed(FormatCode::Bgr24, mid, &src);
        let back = convert_typed(mid, FormatCode::Bgr24, &there);
        assert_eq!(back, src, "via {mid}");
    }
}

#[test]
fn test_widening_round_trip_is_lossless() {
    for v in 0..=u16::MAX {
        let l = Luminance16::new(v);
        let f: Luminance32F = convert_unchecked(l);
        assert_eq!(convert_unchecked::<_, Luminance16>(f), l, "via Luminance32F");
        let c: Rgba128F = convert_unchecked(l);
        assert_eq!(convert_unchecked::<_, Luminance16>(c), l, "via Rgba128F");
    }

    // Straight 8-bit color with any alpha survives the float formats.
    for a in 0..=255u8 {
        for c in 0..=255u8 {
            let px = Bgra32::new(c, 255 - c, c ^ 0x5a, a);
            let f: Bgra128F = convert_unchecked(px);
            assert_eq!(convert_unchecked::<_, Bgra32>(f), px, "via Bgra128F");
            let f: Rgba128F = convert_unchecked(px);
            assert_eq!(convert_unchecked::<_, Bgra32>(f), px, "via Rgba128F");
        }
    }

    // 8-bit luminance widened to 16 bits comes back unchanged.
    for v in 0..=255u8 {
        let wide: Luminance16 = convert_unchecked(Luminance8::new(v));
        assert_eq!(convert_unchecked::<_, Luminance8>(wide).l, v);
    }
}

#[test]
fn test_premultiply_round_trip() {
    let straight = Rgba32::new(200, 100, 50, 128);
    let premul: Rgbp32 = convert(straight).unwrap();
    assert_eq!(premul, Rgbp32::new(100, 50, 25, 128));

    let back: Rgba32 = convert(premul).unwrap();
    assert_eq!(back.a, 128);
    assert!(back.r.abs_diff(200) <= 1);
    assert_eq!((back.g, back.b), (100, 50));

    // Straight -> premultiplied -> straight stays within one step once
    // alpha is high enough to keep every color level resolvable.
    for a in 164..=255u8 {
        for c in 0..=255u8 {
            let p: Bgrp32 = convert_unchecked(Bgra32::new(c, c, c, a));
            let s: Bgra32 = convert_unchecked(p);
            assert!(s.b.abs_diff(c) <= 1, "c={c} a={a} got {}", s.b);
        }
    }
}

#[test]
fn test_packed_fields() {
    let px: Bgr565 = convert(Bgra32::opaque(0x80, 0x40, 0x20)).unwrap();
    assert_eq!(px.fields(), (16, 16, 4));

    let px: Bgra5551 = convert(Rgba32::new(255, 0, 255, 95)).unwrap();
    assert_eq!(px.fields(), (31, 0, 31, false));
    let px: Bgra5551 = convert(Rgba32::new(255, 0, 255, 96)).unwrap();
    assert!(px.fields().3);

    let px: Bgra4444 = convert(Argb32::new(0xf0, 0x12, 0x34, 0x56)).unwrap();
    assert_eq!(px.fields(), (0x5, 0x3, 0x1, 0xf));

    // Expansion replicates the high bits.
    let back: Bgra32 = convert(Bgr565::pack(31, 63, 0)).unwrap();
    assert_eq!(back, Bgra32::new(255, 255, 0, 255));
    let back: Rgba32 = convert(Bgra4444::pack(0xa, 0, 0, 0x1)).unwrap();
    assert_eq!(back, Rgba32::new(0, 0, 0xaa, 0x11));
}

#[test]
fn test_luminance_paths() {
    let white = Rgb24::new(255, 255, 255);
    assert_eq!(convert::<_, Luminance8>(white).unwrap().l, 255);
    assert_eq!(convert::<_, Luminance16>(white).unwrap().l, 65535);
    assert_eq!(convert::<_, Luminance32F>(white).unwrap().l, 1.0);

    // Gray is exact through every color format.
    for format in FormatCode::ALL.into_iter().filter(|f| f.has_color()) {
        let bytes = convert_typed(FormatCode::Luminance8, format, &[0, 85, 170, 255]);
        let back = convert_typed(format, FormatCode::Luminance8, &bytes);
        if format.code() >= FormatCode::Bgr565.code() && format.code() <= FormatCode::Bgra4444.code() {
            // Packed formats drop low bits.
            assert!(back.iter().zip([0u8, 85, 170, 255]).all(|(a, b)| a.abs_diff(b) <= 17));
        } else {
            assert_eq!(back, [0, 85, 170, 255], "{format}");
        }
    }

    let l: Luminance32F = convert(Rgba128F::new(1.0, 0.0, 0.0, 0.25)).unwrap();
    assert_abs_diff_eq!(l.l, 0.2989 / (0.2989 + 0.5870 + 0.1140), epsilon = 1e-6);
}

#[test]
fn test_alpha_paths() {
    let a: Alpha8 = convert(Rgbp128F::new(0.1, 0.1, 0.1, 0.5)).unwrap();
    assert_eq!(a.a, 127);
    let a: Alpha8 = convert(Bgr24::new(1, 2, 3)).unwrap();
    assert_eq!(a.a, 255);

    let p: Bgrp32 = convert(Alpha8::new(77)).unwrap();
    assert_eq!(p, Bgrp32::new(0, 0, 0, 77));
    let err = convert::<_, Rgb24>(Alpha8::new(77)).unwrap_err();
    assert_eq!(
        err,
        Error::unsupported_conversion(FormatCode::Alpha8, FormatCode::Rgb24)
    );
}

#[test]
fn test_float_narrowing_truncates() {
    let px: Bgra32 = convert(Rgba128F::new(0.5, 2.0, -1.0, 1.0)).unwrap();
    assert_eq!(px, Bgra32::new(0, 255, 127, 255));
    let px: Rgbp32 = convert(Rgbp128F::new(0.9, 0.2, 0.0, 0.5)).unwrap();
    // Color is clamped to alpha on the way down.
    assert_eq!(px, Rgbp32::new(127, 51, 0, 127));
}

#[test]
fn test_converter_spans() {
    let conv = Converter::<Argb32, Rgbp128F>::new().unwrap();
    let src: Vec<Argb32> = (0..=255u8).map(|a| Argb32::new(a, 255, 128, 0)).collect();
    let out = conv.convert_to_vec(&src);
    for (s, d) in src.iter().zip(&out) {
        assert!(d.is_valid());
        assert_abs_diff_eq!(d.a, s.a as f32 / 255.0, epsilon = 1e-6);
        assert_abs_diff_eq!(d.r, d.a, epsilon = 1e-6);
    }
}

#[test]
fn test_strided_frame() {
    let width = 5;
    let height = 3;
    let src_stride = width * 4 + 3;
    let dst_stride = width * 3 + 1;
    let mut src = vec![0xeeu8; src_stride * height];
    let pixels = sample_bytes(FormatCode::Bgra32, width * height, 3);
    for y in 0..height {
        let row = &pixels[y * width * 4..(y + 1) * width * 4];
        src[y * src_stride..y * src_stride + width * 4].copy_from_slice(row);
    }
    let mut dst = vec![0x55u8; dst_stride * height];
    let conv = ByteConverter::new(FormatCode::Bgra32, FormatCode::Rgb24).unwrap();
    conv.convert_rows(&src, src_stride, &mut dst, dst_stride, width, height)
        .unwrap();

    for y in 0..height {
        let expect = convert_typed(
            FormatCode::Bgra32,
            FormatCode::Rgb24,
            &pixels[y * width * 4..(y + 1) * width * 4],
        );
        let row = &dst[y * dst_stride..(y + 1) * dst_stride];
        assert_eq!(&row[..width * 3], &expect[..]);
        assert_eq!(row[width * 3], 0x55);
    }
}
