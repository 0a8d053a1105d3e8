use super::convert::Rgb;
use super::transform::to_u8;
use serde_derive::{Deserialize, Serialize};
use std::fmt;

/// Hue in degrees [0, 360), saturation and lightness in [0, 1]
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    pub fn new(h: f64, s: f64, l: f64) -> Hsl {
        Hsl { h, s, l }
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "h: {:.1}, s: {:.3}, l: {:.3}", self.h, self.s, self.l)
    }
}

pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let rf = rgb.r as f64 / 255.0;
    let gf = rgb.g as f64 / 255.0;
    let bf = rgb.b as f64 / 255.0;

    let max = rf.max(gf).max(bf);
    let min = rf.min(gf).min(bf);
    let l = (max + min) / 2.0;

    if max == min {
        // Achromatic
        return Hsl::new(0.0, 0.0, l);
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    let h = if max == rf {
        let h = (gf - bf) / d;
        if gf < bf {
            h + 6.0
        } else {
            h
        }
    } else if max == gf {
        (bf - rf) / d + 2.0
    } else {
        (rf - gf) / d + 4.0
    };

    Hsl::new(h / 6.0 * 360.0, s, l)
}

fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// Inverse of `rgb_to_hsl`. Hue wraps around, saturation and lightness are
/// clamped to [0, 1].
pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let s = hsl.s.clamp(0.0, 1.0);
    let l = hsl.l.clamp(0.0, 1.0);
    if s == 0.0 {
        let v = to_u8(l);
        return Rgb::new(v, v, v);
    }
    let h = hsl.h.rem_euclid(360.0) / 360.0;
    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    Rgb::new(
        to_u8(hue_to_channel(p, q, h + 1.0 / 3.0)),
        to_u8(hue_to_channel(p, q, h)),
        to_u8(hue_to_channel(p, q, h - 1.0 / 3.0)),
    )
}
