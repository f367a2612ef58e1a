use super::*;
use crate::foundation::core::Point;
use crate::surface::recorder::RecordingSurface;

fn c(v: u32) -> Color {
    Color::from_u24(v)
}

fn sized(sizes: &[f64]) -> Vec<Stripe> {
    sizes
        .iter()
        .enumerate()
        .map(|(i, &s)| Stripe::new(c(i as u32 * 0x111111), s))
        .collect()
}

#[test]
fn band_widths_are_proportional_to_sizes() {
    let (w, h) = (3840.0, 2160.0);
    let sizes = [3.5, 1.0, 1.0, 2.0, 3.5];
    let layout = rotated_stripe_layout(w, h, &sized(&sizes), Diagonal::TlBr);
    let total: f64 = sizes.iter().sum();
    let d = (w * w + h * h).sqrt();

    assert!((layout.diagonal - d).abs() < 1e-9);
    assert_eq!(layout.bands.len(), sizes.len());
    for (band, size) in layout.bands.iter().zip(sizes) {
        let expected = size / total * d;
        assert!(
            (band.rect.width() - expected).abs() < 1e-6,
            "band width {} != {expected}",
            band.rect.width()
        );
        assert!((band.rect.height() - 2.0 * d).abs() < 1e-9);
    }
}

#[test]
fn bands_are_contiguous_and_span_the_diagonal() {
    let layout = rotated_stripe_layout(640.0, 360.0, &sized(&[1.0; 7]), Diagonal::BlTr);
    let half = layout.diagonal / 2.0;
    assert_eq!(layout.bands.first().unwrap().rect.x0, -half);
    assert_eq!(layout.bands.last().unwrap().rect.x1, half);
    for pair in layout.bands.windows(2) {
        assert_eq!(pair[0].rect.x1, pair[1].rect.x0);
    }
}

#[test]
fn rotated_frame_covers_every_canvas_corner() {
    let (w, h) = (1920.0, 1080.0);
    for dir in [Diagonal::TlBr, Diagonal::BlTr] {
        let layout = rotated_stripe_layout(w, h, &sized(&[1.0, 2.0]), dir);
        let inv = layout.transform.inverse();
        let half = layout.diagonal / 2.0;
        for corner in [
            Point::new(0.0, 0.0),
            Point::new(w, 0.0),
            Point::new(0.0, h),
            Point::new(w, h),
        ] {
            let local = inv * corner;
            assert!(local.x >= -half - 1e-6 && local.x <= half + 1e-6);
            assert!(local.y.abs() <= layout.diagonal);
        }
    }
}

#[test]
fn direction_decides_which_corner_gets_the_first_band() {
    let (w, h) = (400.0, 200.0);
    let tl_br = rotated_stripe_layout(w, h, &sized(&[1.0, 1.0]), Diagonal::TlBr);
    let bl_tr = rotated_stripe_layout(w, h, &sized(&[1.0, 1.0]), Diagonal::BlTr);

    // The start of the first band sits on the origin corner of the diagonal.
    let start = Point::new(-tl_br.diagonal / 2.0, 0.0);
    let tl = tl_br.transform * start;
    assert!(tl.x.abs() < 1e-9 && tl.y.abs() < 1e-9);

    let bl = bl_tr.transform * start;
    assert!(bl.x.abs() < 1e-9 && (bl.y - h).abs() < 1e-9);
}

#[test]
fn degenerate_sizes_produce_no_bands() {
    assert!(rotated_stripe_layout(10.0, 10.0, &[], Diagonal::TlBr).bands.is_empty());
    assert!(
        rotated_stripe_layout(10.0, 10.0, &sized(&[0.0, 0.0]), Diagonal::TlBr)
            .bands
            .is_empty()
    );
}

#[test]
fn drawing_bleeds_all_but_the_last_band_and_resets_transform() {
    let mut rec = RecordingSurface::new();
    let stripes = sized(&[1.0, 1.0, 1.0]);
    draw_rotated_stripes(&mut rec, 300.0, 300.0, &stripes, Diagonal::TlBr);

    let layout = rotated_stripe_layout(300.0, 300.0, &stripes, Diagonal::TlBr);
    let rects: Vec<_> = rec.rects().collect();
    assert_eq!(rects.len(), 3);
    for (i, (rect, transform, color)) in rects.iter().enumerate() {
        assert_eq!(*transform, layout.transform);
        assert_eq!(*color, stripes[i].color);
        assert_eq!(rect.x0, layout.bands[i].rect.x0);
        let bleed = if i < 2 { SEAM_BLEED_PX } else { 0.0 };
        assert!((rect.x1 - layout.bands[i].rect.x1 - bleed).abs() < 1e-9);
    }

    // A follow-up fill lands in canvas space again.
    rec.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), c(0));
    let (_, t, _) = rec.rects().last().unwrap();
    assert_eq!(t, Affine::IDENTITY);
}
