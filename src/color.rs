//! Hex/RGB conversions and perceptual distance between brand colors.

use palette::{convert::FromColorUnclamped, Lab, Srgb};

use crate::types::BrandColor;

/// Formats 8-bit channels as `#RRGGBB`.
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{:02X}{:02X}{:02X}", r, g, b)
}

/// Formats 0.0-1.0 channels (as the design host reports them) as `#RRGGBB`.
pub fn unit_rgb_to_hex(r: f64, g: f64, b: f64) -> String {
    let channel = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    rgb_to_hex(channel(r), channel(g), channel(b))
}

/// Parses `#RGB`, `#RRGGBB`, or the same without `#`.
pub fn hex_to_rgb(hex: &str) -> Option<[u8; 3]> {
    let digits = hex.trim().trim_start_matches('#');
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let expanded: String = match digits.len() {
        3 => digits.chars().flat_map(|c| [c, c]).collect(),
        6 => digits.to_string(),
        _ => return None,
    };
    let channel = |i: usize| u8::from_str_radix(&expanded[i..i + 2], 16).ok();
    Some([channel(0)?, channel(2)?, channel(4)?])
}

/// Normalizes any accepted hex form to uppercase `#RRGGBB`.
pub fn normalize_hex(hex: &str) -> Option<String> {
    hex_to_rgb(hex).map(|[r, g, b]| rgb_to_hex(r, g, b))
}

fn to_lab(rgb: [u8; 3]) -> Lab {
    let srgb = Srgb::new(
        rgb[0] as f32 / 255.0,
        rgb[1] as f32 / 255.0,
        rgb[2] as f32 / 255.0,
    );
    Lab::from_color_unclamped(srgb)
}

fn lab_distance(a: Lab, b: Lab) -> f32 {
    let dl = a.l - b.l;
    let da = a.a - b.a;
    let db = a.b - b.b;
    (dl * dl + da * da + db * db).sqrt()
}

/// CIE76 color difference between two hex colors.
pub fn delta_e(a: &str, b: &str) -> Option<f32> {
    Some(lab_distance(to_lab(hex_to_rgb(a)?), to_lab(hex_to_rgb(b)?)))
}

/// Palette entry perceptually closest to `hex`; first entry wins ties.
pub fn closest_brand_color<'a>(hex: &str, palette: &'a [BrandColor]) -> Option<(&'a BrandColor, f32)> {
    let target = to_lab(hex_to_rgb(hex)?);
    palette
        .iter()
        .filter_map(|c| hex_to_rgb(&c.hex).map(|rgb| (c, lab_distance(target, to_lab(rgb)))))
        .fold(None, |best: Option<(&BrandColor, f32)>, candidate| match best {
            Some(b) if b.1 <= candidate.1 => Some(b),
            _ => Some(candidate),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ColorSource;

    fn brand(name: &str, hex: &str) -> BrandColor {
        BrandColor {
            name: name.to_string(),
            hex: hex.to_string(),
            source: ColorSource::Text,
        }
    }

    #[test]
    fn rgb_to_hex_pads_and_uppercases() {
        assert_eq!(rgb_to_hex(102, 126, 234), "#667EEA");
        assert_eq!(rgb_to_hex(0, 10, 255), "#000AFF");
    }

    #[test]
    fn hex_to_rgb_recovers_channels() {
        for (r, g, b) in [(0, 0, 0), (255, 255, 255), (102, 126, 234), (1, 128, 254)] {
            assert_eq!(hex_to_rgb(&rgb_to_hex(r, g, b)), Some([r, g, b]));
        }
    }

    #[test]
    fn short_hex_is_expanded() {
        assert_eq!(normalize_hex("#abc"), Some("#AABBCC".to_string()));
        assert_eq!(normalize_hex("ff0000"), Some("#FF0000".to_string()));
    }

    #[test]
    fn malformed_hex_is_rejected() {
        assert_eq!(normalize_hex("#abcd"), None);
        assert_eq!(normalize_hex("#GGGGGG"), None);
        assert_eq!(normalize_hex(""), None);
    }

    #[test]
    fn unit_channels_round_like_the_host() {
        assert_eq!(unit_rgb_to_hex(0.4, 0.494, 0.918), "#667EEA");
        assert_eq!(unit_rgb_to_hex(1.2, -0.1, 0.5), "#FF0080");
    }

    #[test]
    fn closest_brand_color_prefers_perceptual_neighbour() {
        let palette = vec![brand("Navy", "#1A237E"), brand("Crimson", "#C62828")];
        let (closest, distance) = closest_brand_color("#FF0000", &palette).expect("closest");
        assert_eq!(closest.name, "Crimson");
        assert!(distance > 0.0);
    }

    #[test]
    fn closest_brand_color_keeps_first_on_tie() {
        let palette = vec![brand("A", "#000000"), brand("B", "#000000")];
        let (closest, _) = closest_brand_color("#000000", &palette).expect("closest");
        assert_eq!(closest.name, "A");
    }

    #[test]
    fn identical_colors_have_zero_delta() {
        let d = delta_e("#667EEA", "#667eea").expect("delta");
        assert!(d.abs() < 1e-4);
    }
}
