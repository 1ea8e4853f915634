use clap::Parser;
use pixfind::io::{load_color_image, save_color_image};
use pixfind::{
    binarize_adaptive, contains, contains_par, find_smaller_subimage_positions, find_subimage,
    BinarizeConfig, Color, OwnedImage, PixFindResult, SearchConfig,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const SCHEMA_JSON: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.schema.json"));
const EXAMPLE_JSON: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.example.json"));

#[derive(Parser, Debug)]
#[command(author, version, about = "pixfind CLI (JSON config driven)")]
struct Cli {
    /// Path to the JSON configuration file.
    #[arg(short, long, value_name = "FILE", default_value = "config.json")]
    config: PathBuf,
    /// Print the JSON schema and exit.
    #[arg(long)]
    print_schema: bool,
    /// Print an example config and exit.
    #[arg(long)]
    print_example: bool,
    /// Enable tracing output for performance profiling.
    #[arg(long)]
    trace: bool,
}

#[derive(Debug, Deserialize, Clone, Copy, Default)]
#[serde(rename_all = "snake_case")]
enum Operation {
    #[default]
    Find,
    FindSmaller,
    Contains,
    Binarize,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct SearchConfigJson {
    max_mismatch: usize,
    /// `null` or missing: accept only after the whole pattern was compared.
    enough_similarity: Option<usize>,
    gray_exception: bool,
    color_tolerance: u8,
    parallel: bool,
}

impl Default for SearchConfigJson {
    fn default() -> Self {
        let cfg = SearchConfig::default();
        Self {
            max_mismatch: cfg.max_mismatch,
            enough_similarity: None,
            gray_exception: cfg.gray_exception,
            color_tolerance: cfg.color_tolerance,
            parallel: cfg.parallel,
        }
    }
}

impl From<SearchConfigJson> for SearchConfig {
    fn from(value: SearchConfigJson) -> Self {
        Self {
            max_mismatch: value.max_mismatch,
            enough_similarity: value.enough_similarity.unwrap_or(usize::MAX),
            gray_exception: value.gray_exception,
            color_tolerance: value.color_tolerance,
            parallel: value.parallel,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct WindowConfigJson {
    color_tolerance: u8,
    allowed_mismatches: usize,
    parallel: bool,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct BinarizeConfigJson {
    reference: [u8; 3],
    region_size: u16,
    invert: bool,
    /// Write the image with alpha 255 instead of the thresholder's alpha 0.
    opaque: bool,
}

impl Default for BinarizeConfigJson {
    fn default() -> Self {
        let cfg = BinarizeConfig::default();
        Self {
            reference: [cfg.reference.r, cfg.reference.g, cfg.reference.b],
            region_size: cfg.region_size,
            invert: cfg.invert,
            opaque: false,
        }
    }
}

impl From<BinarizeConfigJson> for BinarizeConfig {
    fn from(value: BinarizeConfigJson) -> Self {
        Self {
            reference: Color::from(value.reference),
            region_size: value.region_size,
            invert: value.invert,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct Config {
    operation: Operation,
    image_path: String,
    pattern_path: String,
    output_path: Option<String>,
    search: SearchConfigJson,
    window: WindowConfigJson,
    binarize: BinarizeConfigJson,
}

#[derive(Debug, Serialize)]
struct PositionRecord {
    x: usize,
    y: usize,
}

#[derive(Debug, Serialize)]
#[serde(tag = "operation", rename_all = "snake_case")]
enum Report {
    Find { offsets: Vec<usize> },
    FindSmaller { positions: Vec<PositionRecord> },
    Contains { found: bool },
    Binarize {
        output_path: String,
        width: usize,
        height: usize,
        alpha: u8,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.trace {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env().add_directive("pixfind=info".parse()?))
            .with_target(false)
            .init();
    }

    if cli.print_schema {
        println!("{SCHEMA_JSON}");
        return Ok(());
    }
    if cli.print_example {
        println!("{EXAMPLE_JSON}");
        return Ok(());
    }

    let config_text = fs::read_to_string(&cli.config)?;
    let config: Config = serde_json::from_str(&config_text)?;
    if config.image_path.is_empty() {
        return Err("image_path must be set in the config".into());
    }

    let image = load_color_image(&config.image_path)?;
    let report = match config.operation {
        Operation::Find => {
            let pattern = load_pattern(&config.pattern_path)?;
            let search: SearchConfig = config.search.into();
            let offsets = find_subimage(image.view(), pattern.view(), &search)?;
            Report::Find { offsets }
        }
        Operation::FindSmaller => {
            let pattern = load_pattern(&config.pattern_path)?;
            let search: SearchConfig = config.search.into();
            let positions = find_smaller_subimage_positions(image.view(), pattern.view(), &search)?
                .into_iter()
                .map(|(x, y)| PositionRecord { x, y })
                .collect();
            Report::FindSmaller { positions }
        }
        Operation::Contains => {
            let pattern = load_pattern(&config.pattern_path)?;
            let window = &config.window;
            let found = if window.parallel {
                contains_par(
                    image.view(),
                    pattern.view(),
                    window.color_tolerance,
                    window.allowed_mismatches,
                )
            } else {
                contains(
                    image.view(),
                    pattern.view(),
                    window.color_tolerance,
                    window.allowed_mismatches,
                )
            };
            Report::Contains { found }
        }
        Operation::Binarize => {
            let Some(output_path) = config.output_path.clone() else {
                return Err("output_path must be set for binarize".into());
            };
            let opaque = config.binarize.opaque;
            let mut out = binarize_adaptive(image.view(), &config.binarize.into());
            if opaque {
                out = with_alpha(out, u8::MAX)?;
            }
            save_color_image(&out, &output_path)?;
            let alpha = out.data().first().map_or(0, |c| c.a);
            tracing::info!(path = %output_path, alpha, "binarized image written");
            Report::Binarize {
                output_path,
                width: out.width(),
                height: out.height(),
                alpha,
            }
        }
    };

    let json = serde_json::to_string_pretty(&report)?;
    match (config.operation, config.output_path) {
        (Operation::Binarize, _) | (_, None) => println!("{json}"),
        (_, Some(path)) => fs::write(path, json)?,
    }

    Ok(())
}

fn load_pattern(path: &str) -> Result<OwnedImage<Color>, Box<dyn std::error::Error>> {
    if path.is_empty() {
        return Err("pattern_path must be set for search operations".into());
    }
    Ok(load_color_image(path)?)
}

/// Replaces the alpha channel of every pixel.
fn with_alpha(image: OwnedImage<Color>, alpha: u8) -> PixFindResult<OwnedImage<Color>> {
    let (width, height) = (image.width(), image.height());
    let data = image
        .into_data()
        .into_iter()
        .map(|c| Color { a: alpha, ..c })
        .collect();
    OwnedImage::new(data, width, height)
}

#[cfg(test)]
mod tests {
    use super::{with_alpha, BinarizeConfigJson, Config};
    use pixfind::{binarize_adaptive, BinarizeConfig, Color, OwnedImage};

    #[test]
    fn binarize_output_is_transparent_unless_opaque() {
        let img = OwnedImage::new(vec![Color::WHITE, Color::BLACK], 2, 1).unwrap();
        let out = binarize_adaptive(img.view(), &BinarizeConfig::default());
        assert!(out.data().iter().all(|c| c.a == 0));

        let opaque = with_alpha(out.clone(), u8::MAX).unwrap();
        assert!(opaque.data().iter().all(|c| c.a == u8::MAX));
        for (before, after) in out.data().iter().zip(opaque.data()) {
            assert_eq!((before.r, before.g, before.b), (after.r, after.g, after.b));
        }
    }

    #[test]
    fn opaque_flag_defaults_off() {
        assert!(!BinarizeConfigJson::default().opaque);

        let json = r#"{ "binarize": { "opaque": true } }"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert!(config.binarize.opaque);
        assert_eq!(config.binarize.region_size, 15);
    }
}
