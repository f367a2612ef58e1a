use super::*;

#[test]
fn canvas_rejects_degenerate_and_oversized_sizes() {
    assert!(Canvas::new(0, 10).is_err());
    assert!(Canvas::new(10, 0).is_err());
    assert!(Canvas::new(70_000, 10).is_err());
    assert_eq!(Canvas::new(3840, 2160).unwrap(), Canvas::UHD);
}

#[test]
fn canvas_rect_spans_full_size() {
    let c = Canvas::new(64, 32).unwrap();
    assert_eq!(c.rect(), Rect::new(0.0, 0.0, 64.0, 32.0));
    assert_eq!(c.pixel_count(), 64 * 32);
}

#[test]
fn premul_roundtrip_is_exact_for_opaque_and_transparent() {
    let opaque = Rgba8Premul::from_straight_rgba(12, 200, 99, 255);
    assert_eq!(opaque.to_straight_rgba(), [12, 200, 99, 255]);

    let clear = Rgba8Premul::from_straight_rgba(12, 200, 99, 0);
    assert_eq!(clear, Rgba8Premul::transparent());
    assert_eq!(clear.to_straight_rgba(), [0, 0, 0, 0]);
}

#[test]
fn unpremul_half_alpha_is_close() {
    let p = Rgba8Premul::from_straight_rgba(200, 100, 0, 128);
    let [r, g, b, a] = p.to_straight_rgba();
    assert_eq!(a, 128);
    assert!((i32::from(r) - 200).abs() <= 1);
    assert!((i32::from(g) - 100).abs() <= 1);
    assert_eq!(b, 0);
}
