use crate::color::convert::{ColorSample, Rgb};
use crate::color::gamut::Gamut;
use crate::color::hsl::Hsl;
use crate::color::point::Point;

/// Requested state of a light
#[derive(PartialEq, Clone, Debug)]
pub struct LightValue {
    pub brightness: u8,
    pub color: LightColor,
}

#[derive(PartialEq, Clone, Debug)]
pub enum LightColor {
    ColorTemp { mired: u16 },
    Coordinate { x: f64, y: f64 }, // CIE 1931 color coordinates
    Rgb { r: u8, g: u8, b: u8 },
    Hsl { h: f64, s: f64, l: f64 },
}

impl LightColor {
    /// Colors given as RGB or HSL carry their own luminance and ignore
    /// `brightness`.
    pub fn to_sample(&self, gamut: &Gamut, brightness: u8) -> ColorSample {
        match *self {
            LightColor::ColorTemp { mired } => {
                let (x, y) = cct_to_xy(mired_to_kelvin(mired));
                ColorSample {
                    xy: gamut.clamp(&Point::new(x, y)),
                    brightness,
                }
            }
            LightColor::Coordinate { x, y } => ColorSample {
                xy: gamut.clamp(&Point::from((x, y))),
                brightness,
            },
            LightColor::Rgb { r, g, b } => gamut.to_xyy(r, g, b),
            LightColor::Hsl { h, s, l } => gamut.hsl_to_xyy(Hsl::new(h, s, l)),
        }
    }
}

impl From<Rgb> for LightColor {
    fn from(rgb: Rgb) -> LightColor {
        LightColor::Rgb {
            r: rgb.r,
            g: rgb.g,
            b: rgb.b,
        }
    }
}

impl LightValue {
    pub fn to_sample(&self, gamut: &Gamut) -> ColorSample {
        self.color.to_sample(gamut, self.brightness)
    }
}

pub fn mired_to_kelvin(mired: u16) -> u32 {
    1_000_000 / (mired.max(1) as u32)
}

pub fn kelvin_to_mired(kelvin: u32) -> u16 {
    (1_000_000 / kelvin.max(16)).min(u16::MAX as u32) as u16
}

// Algorithm from:
// Bongsoon Kang; Ohak Moon; Changhee Hong; Honam Lee; Bonghwan Cho; Youngsun Kim (December 2002).
// "Design of Advanced Color Temperature Control System for HDTV Applications"
// Equations 8 and 9

pub fn cct_to_xy(kelvin: u32) -> (f64, f64) {
    let t = kelvin.max(1) as f64;
    let t2 = t * t;
    let t3 = t2 * t;
    let x = if kelvin < 4000 {
        -0.2661239e9 / t3 - 0.2343589e6 / t2 + 0.8776956e3 / t + 0.179910
    } else {
        -3.0258469e9 / t3 + 2.1070379e6 / t2 + 0.2226347e3 / t + 0.24039
    };
    let x2 = x * x;
    let x3 = x2 * x;
    let y = if kelvin < 2222 {
        -1.1063814 * x3 - 1.34811020 * x2 + 2.18555832 * x - 0.20219683
    } else if kelvin < 4000 {
        -0.9549476 * x3 - 1.37418593 * x2 + 2.09137015 * x - 0.16748867
    } else {
        3.0817580 * x3 - 5.8733867 * x2 + 3.75112997 * x - 0.37001483
    };
    (x, y)
}
