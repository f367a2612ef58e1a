use super::*;

#[test]
fn parses_upper_and_lower_case() {
    let a = Color::from_hex("#C1121F").unwrap();
    let b = Color::from_hex("#c1121f").unwrap();
    assert_eq!(a, b);
    assert_eq!(a, Color::rgb(0xc1, 0x12, 0x1f));
    assert_eq!(a.to_hex(), "#c1121f");
}

#[test]
fn rejects_malformed_strings() {
    for bad in ["c1121f", "#c1121", "#c1121f0", "#fff", "#gg0000", "", "#", "#c1121f80"] {
        let err = Color::from_hex(bad).unwrap_err();
        assert!(
            matches!(err, BackdropError::Validation(_)),
            "expected validation error for {bad:?}"
        );
    }
}

#[test]
fn rejects_multibyte_input_without_panicking() {
    assert!(Color::from_hex("#ééé").is_err());
    assert!(Color::from_bare_hex("ab€d").is_err());
}

#[test]
fn bare_hex_matches_prefixed() {
    assert_eq!(
        Color::from_bare_hex("003049").unwrap(),
        Color::from_hex("#003049").unwrap()
    );
    assert_eq!(Color::from_u24(0x003049).to_bare_hex(), "003049");
}

#[test]
fn serde_uses_hex_strings() {
    let c = Color::from_u24(0x669bbc);
    let json = serde_json::to_string(&c).unwrap();
    assert_eq!(json, "\"#669bbc\"");
    let back: Color = serde_json::from_str(&json).unwrap();
    assert_eq!(back, c);
    assert!(serde_json::from_str::<Color>("\"#12345\"").is_err());
}

#[test]
fn parse_colors_reports_first_bad_entry() {
    let ok = parse_colors(&["#111111", "#222222"]).unwrap();
    assert_eq!(ok.len(), 2);

    let err = parse_colors(&["#111111", "nope", "#333333"]).unwrap_err();
    assert!(err.to_string().contains("nope"));
}
