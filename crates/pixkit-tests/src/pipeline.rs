//! End-to-end tests chaining decode, conversion, compositing and
//! interpolation.

use crate::{init_tracing, sample_bytes, straight_samples};
use approx::assert_abs_diff_eq;
use pixkit_composite::{
    compose_span, compose_span_f, source_over, BlendMode, Scale16384, Scale256, WeightScale,
};
use pixkit_convert::{convert_unchecked, ByteConverter, Converter};
use pixkit_core::prelude::*;
use pixkit_core::with_pixel_format;
use pixkit_interp::{
    float_kernel, has_float_kernel, has_quantized_kernel, quantized_kernel, resample_row,
    resample_row_f, FloatInterpolate, POSITION_ONE,
};
use pixkit_yuv::{
    decode_420_frame, decode_420_frame_par, Chroma420, ChromaOrder, Yuv420Frame, YuvDecoder,
    YuvLayout,
};

/// Planar 4:2:0 gradient: `(y, u, v)` planes for a tightly packed frame.
fn gradient_420(width: usize, height: usize) -> (Vec<u8>, Vec<u8>, Vec<u8>) {
    let (cw, ch) = (width.div_ceil(2), height.div_ceil(2));
    let y = (0..width * height).map(|i| (16 + i * 7 % 220) as u8).collect();
    let u = (0..cw * ch).map(|i| (40 + i * 13 % 180) as u8).collect();
    let v = (0..cw * ch).map(|i| (220 - i * 11 % 180) as u8).collect();
    (y, u, v)
}

#[test]
fn test_yuv_layouts_agree() {
    init_tracing();
    let (w, h) = (6, 4);
    let (y, u, v) = gradient_420(w, h);
    let nv12: Vec<u8> = u.iter().zip(&v).flat_map(|(&u, &v)| [u, v]).collect();
    let nv21: Vec<u8> = u.iter().zip(&v).flat_map(|(&u, &v)| [v, u]).collect();

    let frames = [
        (YuvLayout::I420, [&y[..], &u, &v].concat()),
        (YuvLayout::Yv12, [&y[..], &v, &u].concat()),
        (YuvLayout::Nv12, [&y[..], &nv12].concat()),
        (YuvLayout::Nv21, [&y[..], &nv21].concat()),
    ];
    let mut reference = vec![Bgr24::default(); w * h];
    YuvDecoder::new(YuvLayout::I420, w, h)
        .decode(&frames[0].1, &mut reference)
        .unwrap();
    for (layout, data) in &frames {
        let decoder = YuvDecoder::new(*layout, w, h);
        assert_eq!(data.len(), decoder.frame_size(), "{layout}");
        let mut out = vec![Bgr24::default(); w * h];
        decoder.decode(data, &mut out).unwrap();
        assert_eq!(out, reference, "{layout}");
    }
}

#[test]
fn test_yuv_parallel_matches_sequential() {
    let (w, h) = (17, 9);
    let (y, _, _) = gradient_420(w, h);
    let uv: Vec<u8> = (0..2 * w.div_ceil(2) * h.div_ceil(2))
        .map(|i| (i * 29 % 256) as u8)
        .collect();
    let frame = Yuv420Frame {
        width: w,
        height: h,
        y: &y,
        y_stride: w,
        chroma: Chroma420::Interleaved {
            uv: &uv,
            stride: 2 * w.div_ceil(2),
            order: ChromaOrder::Vu,
        },
    };
    let stride = w + 3;
    let mut a = vec![Rgbp128F::default(); stride * h];
    let mut b = a.clone();
    decode_420_frame(&frame, &mut a, stride).unwrap();
    decode_420_frame_par(&frame, &mut b, stride).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_yuv_into_any_color_format() {
    // 2x2 NV12: white top row, black bottom row, neutral chroma.
    let frame = [235u8, 235, 16, 16, 128, 128];
    let decoder = YuvDecoder::new(YuvLayout::Nv12, 2, 2);

    let mut bgra = [Bgra32::default(); 4];
    decoder.decode(&frame, &mut bgra).unwrap();
    assert_eq!(bgra[0], Bgra32::opaque(255, 255, 255));
    assert_eq!(bgra[2], Bgra32::opaque(0, 0, 0));

    // Converting the decoded pixels is the same as decoding into the target.
    let mut bytes = [0u8; 16];
    for (px, chunk) in bgra.iter().zip(bytes.chunks_exact_mut(4)) {
        px.write_bytes(chunk);
    }
    for dst in FormatCode::ALL.into_iter().filter(|f| f.has_color() && !f.is_luminance()) {
        let conv = ByteConverter::new(FormatCode::Bgra32, dst).unwrap();
        let mut converted = vec![0u8; 4 * dst.bytes_per_pixel()];
        conv.convert_row(&bytes, &mut converted).unwrap();

        let decoded = with_pixel_format!(dst, D => {
            let mut out = [D::default(); 4];
            decoder.decode(&frame, &mut out).unwrap();
            let mut raw = vec![0u8; 4 * D::BYTES];
            for (px, chunk) in out.iter().zip(raw.chunks_exact_mut(D::BYTES)) {
                px.write_bytes(chunk);
            }
            raw
        });
        assert_eq!(decoded, converted, "{dst}");
    }

    let mut luma = [Luminance8::default(); 4];
    assert!(matches!(
        decoder.decode(&frame, &mut luma),
        Err(Error::NotImplemented { .. })
    ));
}

#[test]
fn test_composite_converted_layers() {
    let background = sample_bytes(FormatCode::Rgba32, 64, 5);
    let to_premul = ByteConverter::new(FormatCode::Rgba32, FormatCode::Bgrp32).unwrap();
    let mut premul = vec![0u8; background.len()];
    to_premul.convert_row(&background, &mut premul).unwrap();
    let base: Vec<Bgrp32> = premul.chunks_exact(4).map(Bgrp32::read_bytes).collect();

    // Transparent layers leave the destination untouched.
    let clear = vec![Rgba32::new(9, 9, 9, 0); base.len()];
    for mode in BlendMode::ALL {
        let mut dst = base.clone();
        compose_span::<Scale256, _>(mode, &mut dst, &clear, Scale256::ONE);
        assert_eq!(dst, base, "{mode}");
    }

    // Opaque layers at full opacity replace it.
    let layer: Vec<Rgb24> = (0..base.len())
        .map(|i| Rgb24::new(i as u8, 255 - i as u8, 3 * i as u8))
        .collect();
    let expect = Converter::<Rgb24, Bgrp32>::new().unwrap().convert_to_vec(&layer);
    let mut dst = base.clone();
    compose_span::<Scale16384, _>(BlendMode::Normal, &mut dst, &layer, Scale16384::ONE);
    assert_eq!(dst, expect);

    // Every composite stays a valid premultiplied pixel.
    let src = straight_samples(base.len(), 9);
    for mode in BlendMode::ALL {
        let mut dst = base.clone();
        compose_span::<Scale16384, _>(mode, &mut dst, &src, Scale16384::weight(200));
        assert!(dst.iter().all(|p| p.is_valid()), "{mode}");

        let mut dst_f: Vec<Rgbp128F> = base.iter().map(|&p| convert_unchecked(p)).collect();
        compose_span_f(mode, &mut dst_f, &src, 200.0 / 255.0);
        let eps = 1e-6;
        assert!(
            dst_f.iter().all(|p| p.r <= p.a + eps && p.g <= p.a + eps && p.b <= p.a + eps),
            "{mode}"
        );
    }
}

#[test]
fn test_composite_decoded_frame() {
    let frame = [235u8, 235, 235, 235, 128, 128];
    let mut dst = [Bgrp32::default(); 4];
    YuvDecoder::new(YuvLayout::I420, 2, 2)
        .decode(&frame, &mut dst)
        .unwrap();
    assert_eq!(dst[0], Bgrp32::new(255, 255, 255, 255));

    source_over::<Scale16384, _>(&mut dst[0], Bgra32::new(0, 0, 0, 128), Scale16384::ONE);
    assert_eq!(dst[0].a, 255);
    assert!(dst[0].r.abs_diff(127) <= 1, "{:?}", dst[0]);
    assert_eq!((dst[0].b, dst[0].g), (dst[0].r, dst[0].r));
}

#[test]
fn test_interp_registry_coverage() {
    let mut quantized = 0;
    let mut float = 0;
    for src in FormatCode::ALL {
        for dst in FormatCode::ALL {
            assert_eq!(quantized_kernel(src, dst).is_some(), has_quantized_kernel(src, dst));
            assert_eq!(float_kernel(src, dst).is_some(), has_float_kernel(src, dst));
            quantized += has_quantized_kernel(src, dst) as usize;
            float += has_float_kernel(src, dst) as usize;
        }
    }
    assert_eq!(quantized, 13 * 13 - 5);
    assert_eq!(float, 19 * 6 - 3);
}

#[test]
fn test_interp_kernels_linear_is_flat_bilinear() {
    for src in FormatCode::ALL {
        let samples = sample_bytes(src, 8, 17 + src.code() as u64);
        let pairs: Vec<&[u8]> = samples.chunks_exact(src.bytes_per_pixel()).collect();
        for dst in FormatCode::ALL {
            let Some(kernel) = quantized_kernel(src, dst) else {
                continue;
            };
            let mut a = vec![0u8; dst.bytes_per_pixel()];
            let mut b = a.clone();
            for pair in pairs.windows(2) {
                for w in [0, 1, 700, 1024, 2047, 2048] {
                    kernel.linear(pair[0], pair[1], w, &mut a).unwrap();
                    kernel
                        .bilinear([pair[0], pair[1], pair[0], pair[1]], w, 0, &mut b)
                        .unwrap();
                    assert_eq!(a, b, "{src} -> {dst} w={w}");
                }
            }
        }
    }
}

#[test]
fn test_float_kernels_run_for_every_pair() {
    for src in FormatCode::ALL {
        let samples = sample_bytes(src, 2, 23);
        let px: Vec<&[u8]> = samples.chunks_exact(src.bytes_per_pixel()).collect();
        for dst in FormatCode::ALL {
            let Some(kernel) = float_kernel(src, dst) else {
                continue;
            };
            let mut out = vec![0u8; dst.bytes_per_pixel()];
            kernel.linear(px[2], px[3], 0.25, &mut out).unwrap();
            kernel
                .bilinear([px[0], px[1], px[2], px[3]], 0.5, 0.5, &mut out)
                .unwrap();
            let short = kernel.linear(&px[0][..0], px[1], 0.5, &mut out);
            assert!(short.unwrap_err().is_layout_error(), "{src} -> {dst}");
        }
    }
}

#[test]
fn test_resample_row_upscale() {
    let row = [Bgra32::opaque(0, 0, 0), Bgra32::opaque(255, 255, 255)];
    let mut out = [Rgb24::default(); 3];
    resample_row(&row, &row, 0, 0, POSITION_ONE / 2, &mut out);
    assert_eq!(
        out,
        [Rgb24::new(0, 0, 0), Rgb24::new(127, 127, 127), Rgb24::new(255, 255, 255)]
    );

    // A transparent neighbour does not bleed its color.
    let row = [Bgra32::new(0, 0, 255, 255), Bgra32::new(0, 255, 0, 0)];
    let mut out = [Bgra32::default(); 2];
    resample_row(&row, &row, 0, 0, POSITION_ONE / 2, &mut out);
    assert_eq!(out[1], Bgra32::new(0, 0, 255, 127));

    let mut out = [Rgba128F::default(); 2];
    resample_row_f(&row, &row, 0.0, 0.0, 0.5, &mut out);
    assert_abs_diff_eq!(out[1].r, 1.0, epsilon = 1e-6);
    assert_abs_diff_eq!(out[1].g, 0.0, epsilon = 1e-6);
    assert_abs_diff_eq!(out[1].a, 0.5, epsilon = 1e-6);

    let mid = Rgbp128F::interpolate_linear(row[0], row[1], 0.5);
    assert_abs_diff_eq!(mid.r, 0.5, epsilon = 1e-6);
}
