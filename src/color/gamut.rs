use super::point::Point;
use crate::error::GamutError;
use log::debug;
use serde_derive::{Deserialize, Serialize};
use std::fmt;

/// Triangle in xy chromaticity space spanned by the primaries of a light.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Gamut {
    red: Point,
    green: Point,
    blue: Point,
}

/// LivingColors Iris, Bloom, Aura, LightStrips
pub const GAMUT_A: Gamut = Gamut {
    red: Point::new(0.704, 0.296),
    green: Point::new(0.2151, 0.7106),
    blue: Point::new(0.138, 0.08),
};

/// Original Hue bulbs
pub const GAMUT_B: Gamut = Gamut {
    red: Point::new(0.675, 0.322),
    green: Point::new(0.4091, 0.518),
    blue: Point::new(0.167, 0.04),
};

/// Hue gen 3, Hue Go, LightStrips plus, BR30
pub const GAMUT_C: Gamut = Gamut {
    red: Point::new(0.692, 0.308),
    green: Point::new(0.17, 0.7),
    blue: Point::new(0.153, 0.048),
};

/// Everything in the unit square below x + y = 1
pub const GAMUT_D: Gamut = Gamut {
    red: Point::new(1.0, 0.0),
    green: Point::new(0.0, 1.0),
    blue: Point::new(0.0, 0.0),
};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamutType {
    A,
    B,
    C,
    D,
}

impl GamutType {
    pub const DEFAULT: GamutType = GamutType::D;

    pub const fn gamut(&self) -> &'static Gamut {
        match self {
            GamutType::A => &GAMUT_A,
            GamutType::B => &GAMUT_B,
            GamutType::C => &GAMUT_C,
            GamutType::D => &GAMUT_D,
        }
    }
}

impl Default for GamutType {
    fn default() -> GamutType {
        GamutType::DEFAULT
    }
}

impl fmt::Display for GamutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GamutType::A => "A",
            GamutType::B => "B",
            GamutType::C => "C",
            GamutType::D => "D",
        };
        write!(f, "Gamut {}", name)
    }
}

impl Gamut {
    /// Build a gamut from custom primaries. Fails if the vertices are not
    /// finite or are collinear.
    pub fn new(red: Point, green: Point, blue: Point) -> Result<Gamut, GamutError> {
        if !(red.is_finite() && green.is_finite() && blue.is_finite()) {
            return Err(GamutError::Degenerate);
        }
        let v1 = green - red;
        let v2 = blue - red;
        let area2 = v1.cross(&v2);
        if area2 == 0.0 || !area2.is_finite() {
            return Err(GamutError::Degenerate);
        }
        Ok(Gamut { red, green, blue })
    }

    pub fn red(&self) -> Point {
        self.red
    }

    pub fn green(&self) -> Point {
        self.green
    }

    pub fn blue(&self) -> Point {
        self.blue
    }

    /// Red, green and blue vertex in that order
    pub fn vertices(&self) -> [Point; 3] {
        [self.red, self.green, self.blue]
    }

    /// True if the light can reproduce the chromaticity `p`. Points on the
    /// boundary are included.
    pub fn contains(&self, p: &Point) -> bool {
        let v1 = self.green - self.red;
        let v2 = self.blue - self.red;
        let q = *p - self.red;
        let denom = v1.cross(&v2);

        let s = q.cross(&v2) / denom;
        let t = v1.cross(&q) / denom;

        s >= 0.0 && t >= 0.0 && s + t <= 1.0
    }

    /// Point on the triangle boundary closest to `p`.
    pub fn closest_point(&self, p: &Point) -> Point {
        // Evaluation order decides ties
        let candidates = [
            p.closest_on_segment(&self.red, &self.green),
            p.closest_on_segment(&self.blue, &self.red),
            p.closest_on_segment(&self.green, &self.blue),
        ];
        let dists = candidates.map(|c| p.distance(&c));
        let min = dists.iter().copied().fold(f64::INFINITY, f64::min);
        let index = dists.iter().position(|&d| d == min).unwrap_or(2);
        candidates[index]
    }

    /// `p` if reachable, otherwise the closest reachable point
    pub fn clamp(&self, p: &Point) -> Point {
        if self.contains(p) {
            *p
        } else {
            let c = self.closest_point(p);
            debug!("{} not in reach, using {}", p, c);
            c
        }
    }
}

impl fmt::Display for Gamut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "red {}, green {}, blue {}",
            self.red, self.green, self.blue
        )
    }
}
