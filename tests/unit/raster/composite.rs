use super::*;

fn solid(w: u32, h: u32, px: PremulRgba8) -> PremulImage {
    PremulImage {
        width: w,
        height: h,
        data: px.iter().copied().cycle().take((w * h * 4) as usize).collect(),
    }
}

#[test]
fn over_opacity_0_is_noop() {
    let dst = [1, 2, 3, 4];
    let src = [200, 200, 200, 200];
    assert_eq!(over(dst, src, 0.0), dst);
}

#[test]
fn over_src_opaque_replaces_dst() {
    let dst = [0, 0, 0, 255];
    let src = [255, 0, 0, 255];
    assert_eq!(over(dst, src, 1.0), src);
}

#[test]
fn crossfade_endpoints_select_one_layer() {
    let day = [10, 20, 30, 255];
    let night = [200, 210, 220, 255];
    assert_eq!(crossfade(day, night, BlendWeights::at(0.0)), day);
    assert_eq!(crossfade(day, night, BlendWeights::at(1.0)), night);
}

#[test]
fn crossfade_of_opaque_layers_stays_opaque() {
    let day = [255, 255, 255, 255];
    let night = [0, 0, 0, 255];
    for i in 0..=20 {
        let px = crossfade(day, night, BlendWeights::at(f64::from(i) / 20.0));
        assert_eq!(px[3], 255);
    }
    let mid = crossfade(day, night, BlendWeights::at(0.5));
    assert_eq!(mid[0], 127);
}

#[test]
fn blend_images_stretches_both_layers_to_footprint() {
    let day = solid(4, 2, [255, 255, 255, 255]);
    let night = solid(1, 1, [0, 0, 0, 255]);
    let out = blend_images(Some(&day), Some(&night), BlendWeights::at(1.0), (4, 2)).unwrap();
    assert_eq!((out.width, out.height), (4, 2));
    assert!(out.data.chunks_exact(4).all(|p| p == [0, 0, 0, 255]));

    // A 2:1 footprint that differs from the day image's own 4:2 pixels.
    let out = blend_images(Some(&day), Some(&night), BlendWeights::at(0.0), (6, 3)).unwrap();
    assert_eq!((out.width, out.height), (6, 3));
    assert!(out.data.chunks_exact(4).all(|p| p == [255, 255, 255, 255]));
}

#[test]
fn lone_layer_fades_over_transparency() {
    let day = solid(2, 2, [255, 0, 0, 255]);
    let out = blend_images(Some(&day), None, BlendWeights::at(1.0), (2, 2)).unwrap();
    assert!(out.data.iter().all(|&b| b == 0));

    let out = blend_images(Some(&day), None, BlendWeights::at(0.0), (2, 2)).unwrap();
    assert_eq!(out, day);
}

#[test]
fn no_layers_yields_transparent_footprint() {
    let out = blend_images(None, None, BlendWeights::at(0.3), (3, 2)).unwrap();
    assert_eq!((out.width, out.height), (3, 2));
    assert!(out.data.iter().all(|&b| b == 0));
    assert!(blend_images(None, None, BlendWeights::at(0.3), (0, 2)).is_err());
}

#[test]
fn coverage_pair_always_sums_to_255() {
    for i in 0..=100 {
        let (day, night) = BlendWeights::at(f64::from(i) / 100.0).coverage();
        assert_eq!(day + night, 255);
    }
    assert_eq!(BlendWeights::at(0.0).coverage(), (255, 0));
    assert_eq!(BlendWeights::at(1.0).coverage(), (0, 255));
}

#[test]
fn in_place_helpers_reject_mismatched_buffers() {
    let mut dst = vec![0u8; 8];
    assert!(over_in_place(&mut dst, &[0u8; 4], 1.0).is_err());
    assert!(crossfade_in_place(&mut dst, &[0u8; 8], &[0u8; 4], BlendWeights::at(0.5)).is_err());
}
