use super::gamut::{Gamut, GamutType};

/// Known light models and the gamut of their primaries. Models not listed
/// get the default gamut.
pub const MODEL_GAMUTS: &[(&str, GamutType)] = &[
    ("LST001", GamutType::A),
    ("LLC010", GamutType::A),
    ("LLC011", GamutType::A),
    ("LLC012", GamutType::A),
    ("LLC006", GamutType::A),
    ("LLC007", GamutType::A),
    ("LLC013", GamutType::A),
    ("LCT001", GamutType::B),
    ("LCT007", GamutType::B),
    ("LCT002", GamutType::B),
    ("LCT003", GamutType::B),
    ("LLM001", GamutType::B),
    ("LCT010", GamutType::C),
    ("LCT014", GamutType::C),
    ("LCT011", GamutType::C),
    ("LLC020", GamutType::C),
    ("LST002", GamutType::C),
];

impl GamutType {
    pub fn for_model(model: &str) -> GamutType {
        MODEL_GAMUTS
            .iter()
            .find(|(id, _)| *id == model)
            .map(|&(_, t)| t)
            .unwrap_or(GamutType::DEFAULT)
    }
}

/// Gamut for a light model identifier (the `modelid` reported by the bridge)
pub fn select_gamut(model: &str) -> &'static Gamut {
    GamutType::for_model(model).gamut()
}
