use serde::{Deserialize, Serialize};

/// Interpolator used by continuous scales to produce output between range endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Interpolate {
    #[default]
    Number,
    /// Component-wise RGB interpolation between `#rrggbb` colors.
    Color,
}

#[must_use]
pub fn interpolate_number(t: f64, start: f64, stop: f64) -> f64 {
    start * (1.0 - t) + stop * t
}

/// An sRGB color parsed from `#rrggbb` notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[must_use]
    pub fn parse_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#')?;
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        Some(Self {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
        })
    }

    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Interpolates each channel and truncates toward zero.
#[must_use]
pub fn interpolate_color(t: f64, start: Rgb, stop: Rgb) -> Rgb {
    let channel = |a: u8, b: u8| {
        interpolate_number(t, f64::from(a), f64::from(b))
            .trunc()
            .clamp(0.0, 255.0) as u8
    };
    Rgb {
        r: channel(start.r, stop.r),
        g: channel(start.g, stop.g),
        b: channel(start.b, stop.b),
    }
}

#[cfg(test)]
mod tests {
    use super::{Rgb, interpolate_color, interpolate_number};

    #[test]
    fn number_interpolation_hits_endpoints() {
        assert_eq!(interpolate_number(0.0, 2.0, 6.0), 2.0);
        assert_eq!(interpolate_number(1.0, 2.0, 6.0), 6.0);
        assert_eq!(interpolate_number(0.5, 2.0, 6.0), 4.0);
    }

    #[test]
    fn hex_parsing_rejects_malformed_colors() {
        assert_eq!(
            Rgb::parse_hex("#ff8000"),
            Some(Rgb {
                r: 255,
                g: 128,
                b: 0
            })
        );
        assert!(Rgb::parse_hex("ff8000").is_none());
        assert!(Rgb::parse_hex("#fff").is_none());
        assert!(Rgb::parse_hex("#gg0000").is_none());
        assert!(Rgb::parse_hex("#+f+f+f").is_none());
    }

    #[test]
    fn color_interpolation_truncates_channels() {
        let black = Rgb::parse_hex("#000000").expect("black");
        let white = Rgb::parse_hex("#ffffff").expect("white");
        assert_eq!(interpolate_color(0.5, black, white).to_hex(), "#7f7f7f");
        assert_eq!(interpolate_color(1.0, black, white).to_hex(), "#ffffff");
    }
}
