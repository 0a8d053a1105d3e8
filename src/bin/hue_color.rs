use std::process::ExitCode;

use clap::{Parser, Subcommand};
use log::debug;
use serde::Serialize;
use serde_derive::Serialize;
use tracing_subscriber::EnvFilter;

use hue::color::convert::{luminance_from_brightness, ColorSample, Rgb};
use hue::color::gamut::GamutType;
use hue::color::point::Point;
use hue::error::DynResult;
use hue::light_control::colored_light::LightColor;
use hue_color as hue;

#[derive(Parser, Debug)]
/// Convert colors for Hue lights
struct CmdArgs {
    /// Light model identifier, e.g. LCT001
    #[arg(short = 'm', long, default_value = "")]
    model: String,
    /// Print results as JSON
    #[arg(long)]
    json: bool,
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// RGB to xy and brightness
    Xy {
        #[arg(required_unless_present = "hex")]
        r: Option<u8>,
        #[arg(required_unless_present = "hex")]
        g: Option<u8>,
        #[arg(required_unless_present = "hex")]
        b: Option<u8>,
        /// Color as #rrggbb
        #[arg(long, conflicts_with_all = ["r", "g", "b"])]
        hex: Option<String>,
    },
    /// xy and brightness to RGB
    Rgb { x: f64, y: f64, bri: u8 },
    /// xy and brightness to HSL
    Hsl { x: f64, y: f64, bri: u8 },
    /// Color temperature in mired to xy
    Ct {
        mired: u16,
        #[arg(long, default_value_t = 254)]
        bri: u8,
    },
    /// Show the gamut used for the model
    Gamut,
}

#[derive(Serialize)]
struct GamutReport<'a> {
    model: &'a str,
    gamut: GamutType,
    red: Point,
    green: Point,
    blue: Point,
}

fn output<T>(json: bool, value: &T, text: String) -> DynResult<()>
where
    T: Serialize,
{
    if json {
        println!("{}", serde_json::to_string(value)?);
    } else {
        println!("{}", text);
    }
    Ok(())
}

fn print_sample(json: bool, sample: &ColorSample) -> DynResult<()> {
    output(
        json,
        sample,
        format!(
            "x: {:.4} y: {:.4} bri: {}",
            sample.x(),
            sample.y(),
            sample.brightness
        ),
    )
}

fn run(args: &CmdArgs) -> DynResult<()> {
    let gamut_type = GamutType::for_model(&args.model);
    let gamut = gamut_type.gamut();
    debug!("Model '{}' uses {}", args.model, gamut_type);
    match args.cmd {
        Cmd::Xy { r, g, b, ref hex } => {
            let rgb = match hex {
                Some(hex) => Rgb::from_hex(hex)?,
                None => Rgb::from((r.unwrap_or(0), g.unwrap_or(0), b.unwrap_or(0))),
            };
            let sample = gamut.to_xyy(rgb.r, rgb.g, rgb.b);
            print_sample(args.json, &sample)
        }
        Cmd::Rgb { x, y, bri } => {
            let rgb = gamut.xyy_to_rgb(Point::from((x, y)), luminance_from_brightness(bri));
            let (r, g, b): (u8, u8, u8) = rgb.into();
            output(args.json, &rgb, format!("r: {} g: {} b: {} ({})", r, g, b, rgb))
        }
        Cmd::Hsl { x, y, bri } => {
            let hsl = gamut.to_hsl(x, y, bri);
            output(args.json, &hsl, hsl.to_string())
        }
        Cmd::Ct { mired, bri } => {
            let sample = LightColor::ColorTemp { mired }.to_sample(gamut, bri);
            print_sample(args.json, &sample)
        }
        Cmd::Gamut => {
            let report = GamutReport {
                model: &args.model,
                gamut: gamut_type,
                red: gamut.red(),
                green: gamut.green(),
                blue: gamut.blue(),
            };
            output(args.json, &report, format!("{}: {}", gamut_type, gamut))
        }
    }
}

fn main() -> ExitCode {
    // Keep stdout for results only
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    let args = CmdArgs::parse();
    if let Err(e) = run(&args) {
        eprintln!("{}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
