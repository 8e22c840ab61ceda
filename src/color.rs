use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Lighten, Srgb};

// ---------------------------------------------------------------------------
// Marker colours
// ---------------------------------------------------------------------------

/// Parse `#rrggbb` (the `#` is optional) into RGB bytes.
pub fn parse_hex_rgb(hex: &str) -> Option<[u8; 3]> {
    let rgb: Srgb<u8> = hex.trim().parse().ok()?;
    Some([rgb.red, rgb.green, rgb.blue])
}

pub fn to_color32(rgb: [u8; 3]) -> Color32 {
    Color32::from_rgb(rgb[0], rgb[1], rgb[2])
}

/// Lighter variant of a fill, used for the hovered marker.
pub fn highlight(rgb: [u8; 3]) -> Color32 {
    let base: Srgb = Srgb::new(rgb[0], rgb[1], rgb[2]).into_format();
    let hsl: Hsl = base.into_color();
    let lighter: Srgb = hsl.lighten(0.25).into_color();
    let out: Srgb<u8> = lighter.into_format();
    Color32::from_rgb(out.red, out.green, out.blue)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_rgb() {
        assert_eq!(parse_hex_rgb("#4286f4"), Some([0x42, 0x86, 0xf4]));
        assert_eq!(parse_hex_rgb("ff0000"), Some([255, 0, 0]));
        assert_eq!(parse_hex_rgb("#zzzzzz"), None);
    }

    #[test]
    fn test_highlight_is_lighter() {
        let base = [0x42, 0x86, 0xf4];
        let lit = highlight(base);
        let sum = |c: Color32| c.r() as u32 + c.g() as u32 + c.b() as u32;
        assert!(sum(lit) > sum(to_color32(base)));
    }
}
