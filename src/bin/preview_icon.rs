//! Preview binary - renders a single language icon and prints it to stdout
//!
//! Usage:
//!   cargo run --bin preview -- en
//!   cargo run --bin preview -- fr > fr.svg
//!
//! Reads the same environment variables as the main binary
//! (COLORS_FILE, TEMPLATES_DIR, DEFAULT_COLOR, TOTAL_WIDTH, ...).
//! Nothing is written to the output directory.

use anyhow::{Context, Result};
use language_icons::{
    colors::ColorConfig, config::Config, render::IconRenderer, template::TemplateSet,
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    // Logs go to stderr so stdout stays valid SVG
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("language_icons=info".parse()?),
        )
        .init();

    let code = std::env::args()
        .nth(1)
        .context("Usage: preview <language-code>")?;

    let config = Config::from_env()?;
    let colors = ColorConfig::load(&config.colors_file)?;
    let (code, list) = colors
        .get(&code)
        .with_context(|| format!("'{}' is not in {}", code, config.colors_file.display()))?;

    let templates = TemplateSet::load(&config.templates_dir).await?;
    let icon = IconRenderer::new(config.render_options()).render_icon(&templates, code, list);

    info!("Rendered '{}' with the {} template", icon.code, icon.kind.name());
    println!("{}", icon.svg);

    Ok(())
}
