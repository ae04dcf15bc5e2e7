use crate::error::IconError;
use crate::lookup::LookupFormat;
use crate::metrics::TOTAL_WIDTH;
use crate::render::{RenderOptions, DEFAULT_COLOR, STROKE_COLOR, STROKE_WIDTH};
use anyhow::Result;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    // Inputs
    pub colors_file: PathBuf,
    pub templates_dir: PathBuf,

    // Outputs
    pub output_dir: PathBuf,
    pub lookup_file: Option<PathBuf>,
    pub lookup_format: LookupFormat,

    // Rendering
    pub default_color: String,
    pub total_width: i64,
    pub stroke_color: String,
    pub stroke_width: String,

    // Failure handling
    pub continue_on_error: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // Inputs
            colors_file: std::env::var("COLORS_FILE")
                .unwrap_or_else(|_| "data/colors.json".to_string())
                .into(),
            templates_dir: std::env::var("TEMPLATES_DIR")
                .unwrap_or_else(|_| "templates".to_string())
                .into(),

            // Outputs
            output_dir: std::env::var("OUTPUT_DIR")
                .unwrap_or_else(|_| "icons".to_string())
                .into(),
            lookup_file: std::env::var("LOOKUP_FILE")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
            lookup_format: match std::env::var("LOOKUP_FORMAT") {
                Ok(value) => value.parse()?,
                Err(_) => LookupFormat::default(),
            },

            // Rendering
            default_color: std::env::var("DEFAULT_COLOR")
                .unwrap_or_else(|_| DEFAULT_COLOR.to_string()),
            total_width: parse_var("TOTAL_WIDTH", TOTAL_WIDTH)?,
            stroke_color: std::env::var("STROKE_COLOR")
                .unwrap_or_else(|_| STROKE_COLOR.to_string()),
            stroke_width: std::env::var("STROKE_WIDTH")
                .unwrap_or_else(|_| STROKE_WIDTH.to_string()),

            // Failure handling
            continue_on_error: parse_var("CONTINUE_ON_ERROR", false)?,
        })
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            default_color: self.default_color.clone(),
            total_width: self.total_width,
            stroke_color: self.stroke_color.clone(),
            stroke_width: self.stroke_width.clone(),
        }
    }
}

/// Read an optional variable, rejecting values that do not parse.
fn parse_var<T: std::str::FromStr>(key: &'static str, default: T) -> Result<T, IconError> {
    match std::env::var(key) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|_| IconError::InvalidConfig { key, value }),
        Err(_) => Ok(default),
    }
}
