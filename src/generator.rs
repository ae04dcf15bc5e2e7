//! Batch generation: render every configured language and write the results.

use crate::colors::{ColorConfig, LanguageCode};
use crate::config::Config;
use crate::lookup::write_lookup;
use crate::render::{GeneratedIcon, IconRenderer};
use crate::template::TemplateSet;
use crate::validator::ColorValidator;
use anyhow::{bail, Context, Result};
use futures::future::{join_all, try_join_all};
use std::path::PathBuf;
use tracing::{error, info, warn};

/// What to do when writing one icon fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Abort the batch on the first failure. Icons already written stay on disk.
    #[default]
    Strict,
    /// Attempt every icon and collect the failures.
    ContinueOnError,
}

/// An icon that could not be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconFailure {
    pub code: LanguageCode,
    pub error: String,
}

/// Outcome of a batch run.
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    /// Every rendered icon, sorted by code
    pub icons: Vec<GeneratedIcon>,
    /// Files written successfully
    pub written: Vec<PathBuf>,
    /// Icons that failed to write (only with `ContinueOnError`)
    pub failures: Vec<IconFailure>,
}

impl BatchReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Renders and writes icons for a whole color configuration.
pub struct IconGenerator {
    templates: TemplateSet,
    renderer: IconRenderer,
    output_dir: PathBuf,
    policy: FailurePolicy,
}

impl IconGenerator {
    pub fn new(templates: TemplateSet, renderer: IconRenderer, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            templates,
            renderer,
            output_dir: output_dir.into(),
            policy: FailurePolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Load templates and rendering options from `config`.
    pub async fn from_config(config: &Config) -> Result<Self> {
        let templates = TemplateSet::load(&config.templates_dir).await?;
        let policy = if config.continue_on_error {
            FailurePolicy::ContinueOnError
        } else {
            FailurePolicy::Strict
        };
        Ok(Self::new(templates, IconRenderer::new(config.render_options()), &config.output_dir)
            .with_policy(policy))
    }

    /// Render every language without touching the filesystem.
    pub fn render_all(&self, colors: &ColorConfig) -> Vec<GeneratedIcon> {
        colors
            .iter()
            .map(|(code, list)| self.renderer.render_icon(&self.templates, code, list))
            .collect()
    }

    /// Render every language and write `<code>.svg` into the output directory.
    pub async fn generate_all(&self, colors: &ColorConfig) -> Result<BatchReport> {
        info!("Generating {} icons...", colors.len());

        tokio::fs::create_dir_all(&self.output_dir)
            .await
            .with_context(|| {
                format!("Failed to create output directory {}", self.output_dir.display())
            })?;

        let icons = self.render_all(colors);
        let mut report = BatchReport::default();

        match self.policy {
            FailurePolicy::Strict => {
                report.written = try_join_all(icons.iter().map(|icon| self.write_icon(icon))).await?;
            }
            FailurePolicy::ContinueOnError => {
                let results = join_all(icons.iter().map(|icon| self.write_icon(icon))).await;
                for (icon, result) in icons.iter().zip(results) {
                    match result {
                        Ok(path) => report.written.push(path),
                        Err(e) => {
                            error!("Failed to write icon '{}': {:#}", icon.code, e);
                            report.failures.push(IconFailure {
                                code: icon.code.clone(),
                                error: format!("{:#}", e),
                            });
                        }
                    }
                }
            }
        }

        report.icons = icons;
        if report.is_success() {
            info!("✓ Generated {} icons", report.written.len());
        } else {
            warn!(
                "Generated {} icons, {} failed",
                report.written.len(),
                report.failures.len()
            );
        }
        Ok(report)
    }

    async fn write_icon(&self, icon: &GeneratedIcon) -> Result<PathBuf> {
        let path = self.output_dir.join(icon.file_name());
        tokio::fs::write(&path, &icon.svg)
            .await
            .with_context(|| format!("Failed to write icon {}", path.display()))?;
        info!("Generated {}", path.display());
        Ok(path)
    }
}

/// Full pipeline: load colors and templates, write icons and the lookup table.
pub async fn run(config: &Config) -> Result<BatchReport> {
    let colors = ColorConfig::load(&config.colors_file)?;

    let validation = ColorValidator::validate(&colors);
    for warning in &validation.warnings {
        warn!("{}", warning);
    }
    if validation.has_errors() {
        bail!(
            "Invalid color configuration {}: {}",
            config.colors_file.display(),
            validation.errors.join("; ")
        );
    }

    let generator = IconGenerator::from_config(config).await?;
    let report = generator.generate_all(&colors).await?;

    if let Some(lookup_file) = &config.lookup_file {
        write_lookup(lookup_file, &report.icons, config.lookup_format).await?;
        info!("✓ Wrote lookup table {}", lookup_file.display());
    }

    Ok(report)
}
