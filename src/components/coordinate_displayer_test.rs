use super::*;

fn pos(x: f64, y: f64, crs: &str) -> Position {
    Position { x, y, crs: crs.to_owned() }
}

#[test]
fn no_position_is_blank() {
    let out = format_position(None, "EPSG:3857", &CrsRegistry::default(), &NumberFormat::default());
    assert_eq!(out, "");
}

#[test]
fn metric_crs_uses_zero_decimals() {
    let p = pos(2_600_123.4, 1_200_456.6, "EPSG:2056");
    let out = format_position(Some(&p), "EPSG:2056", &CrsRegistry::default(), &NumberFormat::default());
    assert_eq!(out, "2,600,123 1,200,457");
}

#[test]
fn degree_crs_uses_four_decimals() {
    let p = pos(0.0, 0.0, "EPSG:3857");
    let out = format_position(Some(&p), "EPSG:4326", &CrsRegistry::default(), &NumberFormat::default());
    assert_eq!(out, "0.0000 0.0000");
}

#[test]
fn reprojects_into_display_crs() {
    let p = pos(7.4474, 46.948, "EPSG:4326");
    let out = format_position(Some(&p), "EPSG:3857", &CrsRegistry::default(), &NumberFormat::default());
    assert_eq!(out, "829,041 5,933,590");
}

#[test]
fn unsupported_reprojection_is_blank() {
    let p = pos(7.4474, 46.948, "EPSG:4326");
    let out = format_position(Some(&p), "EPSG:2056", &CrsRegistry::default(), &NumberFormat::default());
    assert_eq!(out, "");
}

#[test]
fn uses_locale_separators() {
    let p = pos(2_600_000.0, 1_200_000.0, "EPSG:2056");
    let format = NumberFormat::for_locale("de-DE");
    let out = format_position(Some(&p), "EPSG:2056", &CrsRegistry::default(), &format);
    assert_eq!(out, "2.600.000 1.200.000");
}
