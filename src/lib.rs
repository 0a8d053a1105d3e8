pub mod error;

pub mod color {
    pub mod convert;
    pub mod gamut;
    pub mod hsl;
    pub mod model_table;
    pub mod point;
    pub mod transform;

    pub use convert::{ColorSample, Rgb};
    pub use gamut::{Gamut, GamutType};
    pub use model_table::select_gamut;
    pub use point::Point;
}

pub mod light_control {
    pub mod colored_light;
}
