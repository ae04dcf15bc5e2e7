//! Color format validation.
//!
//! Colors are substituted into templates verbatim, so a typo in the
//! configuration silently produces a broken fill. This module flags colors
//! that are not `#RGB` or `#RRGGBB` hex notation as warnings, since named
//! colors such as `white` are still valid SVG. Blank colors are errors.

use crate::colors::ColorConfig;
use regex::Regex;
use std::sync::OnceLock;

/// Validation report containing errors and warnings about a color configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Problems that make the configuration unusable
    pub errors: Vec<String>,

    /// Suspicious values that are still rendered
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for configured colors.
pub struct ColorValidator;

static HEX_COLOR_REGEX: OnceLock<Regex> = OnceLock::new();

impl ColorValidator {
    /// Check every configured color and report the ones that are not hex.
    pub fn validate(config: &ColorConfig) -> ValidationReport {
        let mut report = ValidationReport::new();

        for (code, colors) in config.iter() {
            for (index, color) in colors.iter().enumerate() {
                if color.trim().is_empty() {
                    report
                        .errors
                        .push(format!("Color {} of '{}' is empty", index + 1, code));
                } else if !Self::is_hex_color(color) {
                    report.warnings.push(format!(
                        "Color {} of '{}' is not a hex color: '{}'",
                        index + 1,
                        code,
                        color
                    ));
                }
            }
        }

        report
    }

    /// Whether `color` is `#RGB` or `#RRGGBB`.
    pub fn is_hex_color(color: &str) -> bool {
        let regex = HEX_COLOR_REGEX.get_or_init(|| {
            Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").expect("hex color regex is valid")
        });
        regex.is_match(color)
    }
}
