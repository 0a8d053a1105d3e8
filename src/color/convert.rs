use super::gamut::Gamut;
use super::hsl::{hsl_to_rgb, rgb_to_hsl, Hsl};
use super::point::Point;
use super::transform::{rgb_to_xyz, to_u8, xyz_to_rgb};
use crate::error::ColorParseError;
use core::str::FromStr;
use log::trace;
use serde_derive::{Deserialize, Serialize};
use std::fmt;

/// 24-bit gamma encoded RGB
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    pub const fn new(r: u8, g: u8, b: u8) -> Rgb {
        Rgb { r, g, b }
    }

    /// Parse "rrggbb" with an optional leading '#'
    pub fn from_hex(s: &str) -> Result<Rgb, ColorParseError> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        let len = digits.chars().count();
        if len != 6 {
            return Err(ColorParseError::BadLength(len));
        }
        let mut value = 0u32;
        for c in digits.chars() {
            let Some(d) = c.to_digit(16) else {
                return Err(ColorParseError::BadDigit(c));
            };
            value = (value << 4) | d;
        }
        Ok(Rgb::new((value >> 16) as u8, (value >> 8) as u8, value as u8))
    }

    pub fn max_channel_diff(&self, other: &Rgb) -> u8 {
        self.r
            .abs_diff(other.r)
            .max(self.g.abs_diff(other.g))
            .max(self.b.abs_diff(other.b))
    }

    fn to_unit(self) -> [f64; 3] {
        [self.r, self.g, self.b].map(|c| c as f64 / 255.0)
    }
}

impl FromStr for Rgb {
    type Err = ColorParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rgb::from_hex(s)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Rgb {
        Rgb::new(r, g, b)
    }
}

impl From<Rgb> for (u8, u8, u8) {
    fn from(rgb: Rgb) -> (u8, u8, u8) {
        (rgb.r, rgb.g, rgb.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Color as sent to or read from a light: chromaticity and 8-bit brightness.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorSample {
    pub xy: Point,
    #[serde(rename = "bri")]
    pub brightness: u8,
}

impl ColorSample {
    pub fn new(x: f64, y: f64, brightness: u8) -> ColorSample {
        ColorSample {
            xy: Point::new(x, y),
            brightness,
        }
    }

    pub fn x(&self) -> f64 {
        self.xy.x
    }

    pub fn y(&self) -> f64 {
        self.xy.y
    }
}

impl fmt::Display for ColorSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "xy: {}, bri: {}", self.xy, self.brightness)
    }
}

/// Relative luminance to the 8-bit brightness value
pub fn brightness_from_luminance(lum: f64) -> u8 {
    to_u8(lum)
}

pub fn luminance_from_brightness(brightness: u8) -> f64 {
    brightness as f64 / 255.0
}

impl Gamut {
    /// Chromaticity, moved inside the gamut, and relative luminance of a
    /// gamma encoded RGB color.
    pub fn rgb_to_xyy(&self, rgb: Rgb) -> (Point, f64) {
        let [x, y, z] = rgb_to_xyz(rgb.to_unit());
        let sum = x + y + z;
        let p = if sum > 0.0 {
            Point::new(x / sum, y / sum)
        } else {
            Point::ORIGIN
        };
        (self.clamp(&p), y)
    }

    /// RGB color as a sample for the light
    pub fn to_xyy(&self, r: u8, g: u8, b: u8) -> ColorSample {
        let (xy, lum) = self.rgb_to_xyy(Rgb::new(r, g, b));
        let brightness = brightness_from_luminance(lum);
        trace!("{} -> {} Y: {:.6}", Rgb::new(r, g, b), xy, lum);
        ColorSample { xy, brightness }
    }

    /// Gamma encoded RGB for a chromaticity and relative luminance.
    /// Chromaticities with y = 0 give black.
    pub fn xyy_to_rgb(&self, p: Point, lum: f64) -> Rgb {
        let p = self.clamp(&p);
        if p.y == 0.0 {
            return Rgb::BLACK;
        }
        let z = 1.0 - p.x - p.y;
        let rgb = xyz_to_rgb([(lum / p.y) * p.x, lum, (lum / p.y) * z]);

        // Scale down uniformly to keep the hue
        let max = rgb[0].max(rgb[1]).max(rgb[2]);
        let rgb = if max > 1.0 { rgb.map(|c| c / max) } else { rgb };
        Rgb::new(to_u8(rgb[0]), to_u8(rgb[1]), to_u8(rgb[2]))
    }

    pub fn to_rgb(&self, x: f64, y: f64, brightness: u8) -> Rgb {
        self.xyy_to_rgb(Point::new(x, y), luminance_from_brightness(brightness))
    }

    pub fn to_hsl(&self, x: f64, y: f64, brightness: u8) -> Hsl {
        rgb_to_hsl(self.to_rgb(x, y, brightness))
    }

    pub fn hsl_to_xyy(&self, hsl: Hsl) -> ColorSample {
        let rgb = hsl_to_rgb(hsl);
        self.to_xyy(rgb.r, rgb.g, rgb.b)
    }
}

#[cfg(test)]
mod test {
    use super::{brightness_from_luminance, ColorSample, Rgb};
    use crate::color::gamut::{GamutType, GAMUT_A, GAMUT_B, GAMUT_C, GAMUT_D};
    use crate::color::hsl::rgb_to_hsl;
    use crate::color::point::Point;
    use crate::color::transform::rgb_to_xyz;
    use crate::error::ColorParseError;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn round_trip(gamut: &crate::color::gamut::Gamut, rgb: Rgb) -> Rgb {
        let sample = gamut.to_xyy(rgb.r, rgb.g, rgb.b);
        gamut.to_rgb(sample.x(), sample.y(), sample.brightness)
    }

    #[test]
    fn test_red_on_original_bulb() {
        let s = GAMUT_B.to_xyy(255, 0, 0);
        assert!((s.x() - 0.675).abs() < 1e-3, "{}", s);
        assert!((s.y() - 0.322).abs() < 1e-3, "{}", s);
        assert_eq!(s.xy, GAMUT_B.red());
        // Y of full red is 0.283881
        assert_eq!(s.brightness, 72);
    }

    #[test]
    fn test_white() {
        for t in [GamutType::A, GamutType::B, GamutType::C, GamutType::D] {
            let s = t.gamut().to_xyy(255, 255, 255);
            assert!((s.x() - 0.32273).abs() < 1e-4, "{}: {}", t, s);
            assert!((s.y() - 0.32902).abs() < 1e-4, "{}: {}", t, s);
            assert_eq!(s.brightness, 255);
        }
    }

    #[test]
    fn test_black() {
        let s = GAMUT_D.to_xyy(0, 0, 0);
        assert_eq!(s, ColorSample::new(0.0, 0.0, 0));
        // Black is outside gamut B, clamped but never NaN
        let s = GAMUT_B.to_xyy(0, 0, 0);
        assert!(s.xy.is_finite());
        assert!(GAMUT_B.contains(&s.xy) || GAMUT_B.closest_point(&s.xy) == s.xy);
        assert_eq!(s.brightness, 0);
        assert_eq!(GAMUT_D.to_rgb(0.3, 0.3, 0), Rgb::BLACK);
    }

    #[test]
    fn test_zero_y() {
        assert_eq!(GAMUT_D.to_rgb(0.5, 0.0, 255), Rgb::BLACK);
        assert_eq!(GAMUT_D.to_rgb(0.0, 0.0, 128), Rgb::BLACK);
    }

    #[test]
    fn test_round_trip() {
        let colors = [
            Rgb::new(255, 0, 0),
            Rgb::new(0, 255, 0),
            Rgb::new(0, 0, 255),
            Rgb::new(255, 255, 255),
            Rgb::new(128, 128, 128),
        ];
        for rgb in colors {
            let back = round_trip(&GAMUT_D, rgb);
            assert!(rgb.max_channel_diff(&back) <= 1, "{} -> {}", rgb, back);
        }
        for gamut in [&GAMUT_A, &GAMUT_B, &GAMUT_C] {
            for rgb in [Rgb::new(255, 255, 255), Rgb::new(128, 128, 128)] {
                let back = round_trip(gamut, rgb);
                assert!(rgb.max_channel_diff(&back) <= 1, "{} -> {}", rgb, back);
            }
        }
    }

    #[test]
    fn test_round_trip_inside_gamut() {
        let mut rng = StdRng::seed_from_u64(0xb1);
        for t in [GamutType::A, GamutType::B, GamutType::C, GamutType::D] {
            let gamut = t.gamut();
            let mut tested = 0;
            while tested < 2000 {
                let rgb = Rgb::new(rng.gen(), rng.gen(), rng.gen());
                let [x, y, z] = rgb_to_xyz(rgb.to_unit());
                let sum = x + y + z;
                // Dim colors lose too much in the 8-bit brightness
                if sum == 0.0 || brightness_from_luminance(y) < 40 {
                    continue;
                }
                if !gamut.contains(&Point::new(x / sum, y / sum)) {
                    continue;
                }
                let back = round_trip(gamut, rgb);
                assert!(rgb.max_channel_diff(&back) <= 1, "{}: {} -> {}", t, rgb, back);
                tested += 1;
            }
        }
    }

    #[test]
    fn test_tuple_conversion() {
        let rgb = Rgb::from((30, 120, 195));
        assert_eq!(rgb, Rgb::new(30, 120, 195));
        let (r, g, b): (u8, u8, u8) = rgb.into();
        assert_eq!((r, g, b), (30, 120, 195));
    }

    #[test]
    fn test_to_rgb_clamps_chromaticity() {
        // Far outside, same result as the closest point on the boundary
        let p = Point::new(0.9, 0.6);
        let c = GAMUT_C.closest_point(&p);
        assert_eq!(GAMUT_C.to_rgb(p.x, p.y, 200), GAMUT_C.to_rgb(c.x, c.y, 200));
    }

    #[test]
    fn test_to_rgb_normalizes() {
        // Saturated red at full brightness exceeds 1.0 and is scaled down
        let red = GAMUT_B.red();
        let rgb = GAMUT_B.to_rgb(red.x, red.y, 255);
        assert_eq!(rgb.r, 255);
        assert!(rgb.g < 128 && rgb.b < 128, "{}", rgb);
        // Same hue as at lower brightness
        let dim = GAMUT_B.to_rgb(red.x, red.y, 72);
        let h1 = rgb_to_hsl(rgb).h;
        let h2 = rgb_to_hsl(dim).h;
        assert!((h1 - h2).abs() < 2.0, "{} {}", h1, h2);
    }

    #[test]
    fn test_to_hsl() {
        let s = GAMUT_D.to_xyy(255, 0, 0);
        let hsl = GAMUT_D.to_hsl(s.x(), s.y(), s.brightness);
        assert!(hsl.h < 1.0 || hsl.h > 359.0, "{}", hsl);
        assert!(hsl.s > 0.99);
        assert!((hsl.l - 0.5).abs() < 0.01);
        let s = GAMUT_B.to_xyy(255, 255, 255);
        let hsl = GAMUT_B.to_hsl(s.x(), s.y(), s.brightness);
        assert!(hsl.l > 0.99, "{}", hsl);
    }

    #[test]
    fn test_hsl_to_xyy() {
        let colors = [
            Rgb::new(255, 0, 0),
            Rgb::new(0, 255, 0),
            Rgb::new(0, 0, 255),
            Rgb::new(255, 255, 255),
            Rgb::new(128, 128, 128),
        ];
        for rgb in colors {
            let s = GAMUT_D.hsl_to_xyy(rgb_to_hsl(rgb));
            assert_eq!(s, GAMUT_D.to_xyy(rgb.r, rgb.g, rgb.b));
            let back = GAMUT_D.to_rgb(s.x(), s.y(), s.brightness);
            assert!(rgb.max_channel_diff(&back) <= 1, "{} -> {}", rgb, back);
        }
    }

    #[test]
    fn test_brightness_rounding() {
        assert_eq!(brightness_from_luminance(0.0), 0);
        assert_eq!(brightness_from_luminance(1.0), 255);
        assert_eq!(brightness_from_luminance(0.5), 127);
        assert_eq!(brightness_from_luminance(2.0), 255);
    }

    #[test]
    fn test_hex() {
        assert_eq!(Rgb::from_hex("#ff8000"), Ok(Rgb::new(255, 128, 0)));
        assert_eq!("0A0b0C".parse::<Rgb>(), Ok(Rgb::new(10, 11, 12)));
        assert_eq!(Rgb::from_hex("#fff"), Err(ColorParseError::BadLength(3)));
        assert_eq!(Rgb::from_hex("12345g"), Err(ColorParseError::BadDigit('g')));
        assert_eq!(Rgb::new(1, 171, 255).to_string(), "#01abff");
    }

    #[test]
    fn test_serialize_sample() {
        let s = ColorSample::new(0.5, 0.25, 200);
        let json = serde_json::to_string(&s).unwrap();
        assert_eq!(json, r#"{"xy":[0.5,0.25],"bri":200}"#);
        let back: ColorSample = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);
    }
}
