//! SVG templates and the rule that picks one for a color list.
//!
//! There are three template variants, one per number of colors. Each carries
//! literal placeholder tokens that the renderer replaces exactly once.

use crate::colors::ColorList;
use crate::error::IconError;
use anyhow::{Context, Result};
use std::path::Path;

/// Replaced with the uppercase language code.
pub const LANGUAGE_CODE_TOKEN: &str = "LANGUAGE_CODE";

/// The text element's x attribute, replaced with the centering offset.
pub const X_POSITION_TOKEN: &str = r#"x="20""#;

/// Fill color tokens, in slot order.
pub const COLOR_TOKENS: [&str; 3] = ["COLOR_1", "COLOR_2", "COLOR_3"];

/// Opening of the text element, where a stroke attribute is inserted.
pub const TEXT_ANCHOR: &str = "<text ";

/// The three template variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    OneColor,
    TwoColors,
    ThreeColors,
}

impl TemplateKind {
    pub const ALL: [TemplateKind; 3] = [
        TemplateKind::OneColor,
        TemplateKind::TwoColors,
        TemplateKind::ThreeColors,
    ];

    /// Template variant for a color list.
    ///
    /// An empty list falls back to the two-colors template.
    pub fn for_colors(colors: &ColorList) -> Self {
        match colors.len() {
            1 => TemplateKind::OneColor,
            0 | 2 => TemplateKind::TwoColors,
            // ColorList never holds more than three
            _ => TemplateKind::ThreeColors,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            TemplateKind::OneColor => "one-color",
            TemplateKind::TwoColors => "two-colors",
            TemplateKind::ThreeColors => "three-colors",
        }
    }

    pub fn file_name(&self) -> String {
        format!("{}.svg", self.name())
    }

    /// Number of color tokens this variant carries.
    pub fn color_slots(&self) -> usize {
        match self {
            TemplateKind::OneColor => 1,
            TemplateKind::TwoColors => 2,
            TemplateKind::ThreeColors => 3,
        }
    }
}

/// An immutable template text of a known variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    kind: TemplateKind,
    text: String,
}

impl Template {
    /// Wrap template text, checking that every token its variant needs is present.
    pub fn new(kind: TemplateKind, text: impl Into<String>) -> Result<Self, IconError> {
        let text = text.into();
        let required = [LANGUAGE_CODE_TOKEN, X_POSITION_TOKEN]
            .into_iter()
            .chain(COLOR_TOKENS[..kind.color_slots()].iter().copied())
            .chain([TEXT_ANCHOR]);

        for token in required {
            if !text.contains(token) {
                return Err(IconError::MissingToken {
                    template: kind.name(),
                    token,
                });
            }
        }

        Ok(Self { kind, text })
    }

    pub fn kind(&self) -> TemplateKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// The three templates, loaded once and shared read-only.
#[derive(Debug, Clone)]
pub struct TemplateSet {
    templates: [Template; 3],
}

impl TemplateSet {
    pub fn new(one: Template, two: Template, three: Template) -> Result<Self, IconError> {
        for (template, kind) in [&one, &two, &three].into_iter().zip(TemplateKind::ALL) {
            if template.kind() != kind {
                return Err(IconError::WrongTemplate {
                    expected: kind.name(),
                    found: template.kind().name(),
                });
            }
        }
        Ok(Self {
            templates: [one, two, three],
        })
    }

    /// Read `one-color.svg`, `two-colors.svg` and `three-colors.svg`
    /// concurrently from `dir`.
    pub async fn load(dir: &Path) -> Result<Self> {
        let (one, two, three) = tokio::try_join!(
            read_template(dir, TemplateKind::OneColor),
            read_template(dir, TemplateKind::TwoColors),
            read_template(dir, TemplateKind::ThreeColors),
        )?;
        Ok(Self::new(one, two, three)?)
    }

    pub fn get(&self, kind: TemplateKind) -> &Template {
        match kind {
            TemplateKind::OneColor => &self.templates[0],
            TemplateKind::TwoColors => &self.templates[1],
            TemplateKind::ThreeColors => &self.templates[2],
        }
    }

    /// Pick the template for a color list.
    pub fn select(&self, colors: &ColorList) -> &Template {
        self.get(TemplateKind::for_colors(colors))
    }
}

async fn read_template(dir: &Path, kind: TemplateKind) -> Result<Template> {
    let path = dir.join(kind.file_name());
    let text = tokio::fs::read_to_string(&path)
        .await
        .with_context(|| format!("Failed to read template {}", path.display()))?;
    Ok(Template::new(kind, text)?)
}
