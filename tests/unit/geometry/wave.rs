use super::*;
use crate::surface::recorder::RecordingSurface;

fn c(hex: u32) -> Color {
    Color::from_u24(hex)
}

#[test]
fn params_validate_and_clamp() {
    assert!(WaveParams::new(1, 10).is_ok());
    assert!(WaveParams::new(8, 100).is_ok());
    assert!(WaveParams::new(0, 50).is_err());
    assert!(WaveParams::new(9, 50).is_err());
    assert!(WaveParams::new(4, 9).is_err());
    assert!(WaveParams::new(4, 101).is_err());

    assert_eq!(
        WaveParams::clamped(-3, 400),
        WaveParams {
            wave_count: 1,
            amplitude: 100
        }
    );
    assert_eq!(WaveParams::clamped(5, 42), WaveParams::new(5, 42).unwrap());
}

#[test]
fn params_deserialize_with_defaults_and_bounds() {
    let p: WaveParams = serde_json::from_str(r#"{"amplitude":30}"#).unwrap();
    assert_eq!(p, WaveParams::new(4, 30).unwrap());

    let p: WaveParams = serde_json::from_str(r#"{"waveCount":2,"amplitude":80}"#).unwrap();
    assert_eq!(p, WaveParams::new(2, 80).unwrap());

    assert!(serde_json::from_str::<WaveParams>(r#"{"waveCount":9}"#).is_err());
    assert_eq!(
        serde_json::to_string(&WaveParams::default()).unwrap(),
        r#"{"waveCount":4,"amplitude":60}"#
    );
}

#[test]
fn control_point_count_follows_wave_count() {
    for (n, amp) in [(1, 10), (4, 60), (8, 100)] {
        let params = WaveParams::new(n, amp).unwrap();
        let pts = wave_points(params);
        assert_eq!(pts.len(), 2 * n as usize + 1);
        assert_eq!(pts.len(), params.control_point_count());
    }
}

#[test]
fn points_run_right_to_left_past_both_edges() {
    let pts = wave_points(WaveParams::default());
    assert!((pts[0].x - 1.05).abs() < 1e-12);
    assert!((pts[pts.len() - 1].x + 0.05).abs() < 1e-12);
    assert!(pts.windows(2).all(|w| w[1].x < w[0].x));
    assert!(pts[0].amp.abs() < 1e-12);
}

#[test]
fn troughs_sit_deeper_than_neighbouring_crests() {
    let pts = wave_points(WaveParams::new(3, 100).unwrap());
    for k in (1..pts.len()).step_by(2) {
        assert!(pts[k].amp > pts[k - 1].amp, "k={k}");
        assert!(pts[k].amp > pts[k + 1].amp, "k={k}");
    }
}

#[test]
fn amplitude_scales_every_offset() {
    let full = wave_points(WaveParams::new(5, 100).unwrap());
    let half = wave_points(WaveParams::new(5, 50).unwrap());
    for (a, b) in full.iter().zip(&half) {
        assert_eq!(a.x, b.x);
        assert!((a.amp / 2.0 - b.amp).abs() < 1e-12);
    }
}

#[test]
fn layer_offsets_increase_and_stay_bounded() {
    for total in 1..=6 {
        let offsets: Vec<f64> = (0..total).map(|i| layer_offset(i, total)).collect();
        assert_eq!(offsets[0], 0.0);
        assert!(offsets.windows(2).all(|w| w[1] > w[0]));
        assert!(offsets[total - 1] < 0.35);
    }
    assert!((layer_offset(1, 2) - 0.10).abs() < 1e-12);
    assert!((layer_offset(1, 5) - 0.07).abs() < 1e-12);
}

#[test]
fn groups_split_by_temperature_darkest_first() {
    let palette = [c(0xe07a5f), c(0x3d405b), c(0xffffff), c(0x81b29a), c(0xf2cc8f)];
    let groups = group_wave_colors(&palette).unwrap();
    assert_eq!(groups.background, c(0xffffff));
    assert_eq!(groups.warm, vec![c(0xe07a5f), c(0xf2cc8f)]);
    assert_eq!(groups.cool, vec![c(0x3d405b), c(0x81b29a)]);
}

#[test]
fn single_temperature_palette_is_split_in_half() {
    let palette = [c(0x3d405b), c(0xffffff), c(0x1d3557), c(0x81b29a)];
    let groups = group_wave_colors(&palette).unwrap();
    assert_eq!(groups.background, c(0xffffff));
    assert_eq!(groups.warm, vec![c(0x3d405b), c(0x81b29a)]);
    assert_eq!(groups.cool, vec![c(0x1d3557)]);
}

#[test]
fn two_remaining_colors_fill_both_corners() {
    let groups = group_wave_colors(&[c(0x101010), c(0xfefefe), c(0x202020)]).unwrap();
    assert_eq!(groups.warm.len(), 1);
    assert_eq!(groups.cool.len(), 1);
    assert!(group_wave_colors(&[]).is_none());
}

#[test]
fn top_outline_is_anchored_above_the_canvas() {
    let wave = wave_points(WaveParams::default());
    let outline = corner_outline(Corner::TopLeft, &wave, 0.0);
    assert_eq!(outline.len(), wave.len() + 4);
    assert_eq!(outline[0], Point::new(-0.1, -0.5));
    assert_eq!(outline[1], Point::new(1.1, -0.5));
    assert!((outline[2].y - 0.38).abs() < 1e-12);

    let raised = corner_outline(Corner::TopLeft, &wave, 0.1);
    for (a, b) in outline[2..2 + wave.len()].iter().zip(&raised[2..]) {
        assert!((a.y - b.y - 0.1).abs() < 1e-12);
    }
}

#[test]
fn bottom_outline_reverses_the_wave_and_moves_down() {
    let wave = wave_points(WaveParams::default());
    let outline = corner_outline(Corner::BottomRight, &wave, 0.05);
    assert_eq!(outline[0], Point::new(1.1, 1.5));
    assert_eq!(outline[1], Point::new(-0.1, 1.5));
    let first = outline[2];
    let last_wave = wave[wave.len() - 1];
    assert!((first.x - last_wave.x).abs() < 1e-12);
    assert!((first.y - (0.62 + last_wave.amp + 0.05)).abs() < 1e-12);
}

#[test]
fn right_hand_corners_mirror_left_hand_ones() {
    let wave = wave_points(WaveParams::new(3, 70).unwrap());
    let left = corner_outline(Corner::TopLeft, &wave, 0.02);
    let right = corner_outline(Corner::TopRight, &wave, 0.02);
    for (l, r) in left.iter().zip(&right) {
        assert!((l.x - (1.0 - r.x)).abs() < 1e-12);
        assert_eq!(l.y, r.y);
    }

    let br = corner_outline(Corner::BottomRight, &wave, 0.02);
    let bl = corner_outline(Corner::BottomLeft, &wave, 0.02);
    for (a, b) in br.iter().zip(&bl) {
        assert!((a.x - (1.0 - b.x)).abs() < 1e-12);
    }
}

#[test]
fn corner_layers_carry_one_color_each() {
    let colors = [c(0x111111), c(0x222222), c(0x333333)];
    let layers = corner_layers(Corner::TopLeft, &colors, WaveParams::default());
    assert_eq!(layers.len(), 3);
    for (i, layer) in layers.iter().enumerate() {
        assert_eq!(layer.index, i);
        assert_eq!(layer.color, colors[i]);
        assert_eq!(layer.offset, layer_offset(i, 3));
        assert!(layer.to_path(3840.0, 2160.0).is_some());
    }
}

#[test]
fn draw_fills_background_then_every_layer() {
    let palette = [c(0xe07a5f), c(0x3d405b), c(0xffffff), c(0x81b29a), c(0xf2cc8f)];
    let mut rec = RecordingSurface::new();
    draw_corner_waves(
        &mut rec,
        400.0,
        300.0,
        &palette,
        WaveParams::default(),
        Corner::TopRight,
        Corner::BottomLeft,
    );

    let colors: Vec<Color> = rec.paths().map(|(_, color)| color).collect();
    assert_eq!(
        colors,
        vec![c(0xffffff), c(0xe07a5f), c(0xf2cc8f), c(0x3d405b), c(0x81b29a)]
    );
}
