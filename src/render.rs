use crate::colors::{ColorList, LanguageCode};
use crate::metrics::{self, left_margin_within};
use crate::template::{
    Template, TemplateKind, TemplateSet, COLOR_TOKENS, LANGUAGE_CODE_TOKEN, TEXT_ANCHOR,
    X_POSITION_TOKEN,
};
use tracing::{debug, warn};

/// Fill used for the first slot when a language has no colors.
pub const DEFAULT_COLOR: &str = "#2980b9";

/// Stroke drawn around the label when one of the fills is white.
pub const STROKE_COLOR: &str = "#000000";
pub const STROKE_WIDTH: &str = "1";

/// Tunable rendering constants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub default_color: String,
    pub total_width: i64,
    pub stroke_color: String,
    pub stroke_width: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            default_color: DEFAULT_COLOR.to_string(),
            total_width: metrics::TOTAL_WIDTH,
            stroke_color: STROKE_COLOR.to_string(),
            stroke_width: STROKE_WIDTH.to_string(),
        }
    }
}

/// Final SVG text for one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedIcon {
    pub code: LanguageCode,
    pub kind: TemplateKind,
    pub svg: String,
}

impl GeneratedIcon {
    pub fn file_name(&self) -> String {
        format!("{}.svg", self.code)
    }
}

/// Substitutes a language's label, offset, and colors into a template.
#[derive(Debug, Clone, Default)]
pub struct IconRenderer {
    options: RenderOptions,
}

impl IconRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Select the template for `colors` and render it.
    pub fn render_icon(
        &self,
        templates: &TemplateSet,
        code: &LanguageCode,
        colors: &ColorList,
    ) -> GeneratedIcon {
        if colors.is_empty() {
            warn!(
                "'{}' has no colors, rendering {} on the two-colors template",
                code, self.options.default_color
            );
        }
        let template = templates.select(colors);
        GeneratedIcon {
            code: code.clone(),
            kind: template.kind(),
            svg: self.render(code, colors, template),
        }
    }

    /// Render `template` for one language.
    ///
    /// Every token is replaced at its first occurrence only. Color tokens
    /// without a matching color are left in place.
    pub fn render(&self, code: &LanguageCode, colors: &ColorList, template: &Template) -> String {
        let mut svg = template.text().to_string();
        for (token, value) in self.fields(code, colors) {
            svg = svg.replacen(token, &value, 1);
        }

        if colors.contains_white() {
            debug!("Adding contrast stroke to '{}'", code);
            let stroked = format!(
                r#"{}stroke="{}" stroke-width="{}" "#,
                TEXT_ANCHOR, self.options.stroke_color, self.options.stroke_width
            );
            svg = svg.replacen(TEXT_ANCHOR, &stroked, 1);
        }

        svg.trim().to_string()
    }

    /// Ordered `(token, value)` pairs to substitute.
    fn fields(&self, code: &LanguageCode, colors: &ColorList) -> Vec<(&'static str, String)> {
        let margin = left_margin_within(code.as_str(), self.options.total_width);
        let mut fields = vec![
            (LANGUAGE_CODE_TOKEN, code.label()),
            (X_POSITION_TOKEN, format!(r#"x="{}""#, margin)),
            (
                COLOR_TOKENS[0],
                colors
                    .get(0)
                    .unwrap_or(self.options.default_color.as_str())
                    .to_string(),
            ),
        ];
        for (slot, token) in COLOR_TOKENS.iter().copied().enumerate().skip(1) {
            if let Some(color) = colors.get(slot) {
                fields.push((token, color.to_string()));
            }
        }
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::tests::{template_set, ONE, THREE, TWO};

    fn language(code: &str, colors: &[&str]) -> (LanguageCode, ColorList) {
        let code = LanguageCode::new(code).unwrap();
        let colors =
            ColorList::new(&code, colors.iter().map(|c| c.to_string()).collect()).unwrap();
        (code, colors)
    }

    fn one_color() -> Template {
        Template::new(TemplateKind::OneColor, ONE).unwrap()
    }

    fn two_colors() -> Template {
        Template::new(TemplateKind::TwoColors, TWO).unwrap()
    }

    fn assert_no_placeholders(svg: &str) {
        for token in [LANGUAGE_CODE_TOKEN, X_POSITION_TOKEN]
            .iter()
            .chain(COLOR_TOKENS.iter())
        {
            assert!(!svg.contains(token), "{} left in {}", token, svg);
        }
    }

    // ==================== Substitution Tests ====================

    #[test]
    fn test_render_two_colors() {
        let renderer = IconRenderer::default();
        let (code, colors) = language("EN", &["#FF0000", "#00FF00"]);
        let icon = renderer.render_icon(&template_set(), &code, &colors);

        assert_eq!(icon.kind, TemplateKind::TwoColors);
        assert!(icon.svg.contains(">EN<"));
        assert!(icon.svg.contains("#FF0000"));
        assert!(icon.svg.contains("#00FF00"));
        assert!(icon.svg.contains(r#"x="19""#));
        assert!(!icon.svg.contains("stroke"));
        assert_no_placeholders(&icon.svg);
    }

    #[test]
    fn test_render_exact_output() {
        let renderer = IconRenderer::default();
        let (code, colors) = language("de", &["#000000", "#DD0000", "#FFCE00"]);
        let icon = renderer.render_icon(&template_set(), &code, &colors);

        // D = 46, E = 43 -> (128 - 89) / 2 = 19
        assert_eq!(
            icon.svg,
            r##"<svg><rect fill="#000000"/><rect fill="#DD0000"/><rect fill="#FFCE00"/><text x="19" y="80">DE</text></svg>"##
        );
    }

    #[test]
    fn test_render_uppercases_label() {
        let renderer = IconRenderer::default();
        let (code, colors) = language("pt", &["#006600"]);
        let svg = renderer.render(&code, &colors, &one_color());
        assert!(svg.contains(">PT<"));
        assert!(!svg.contains(">pt<"));
    }

    #[test]
    fn test_render_only_first_occurrence() {
        let text = r#"<svg fill="COLOR_1" stroke="COLOR_1"><text x="20" x="20">LANGUAGE_CODE LANGUAGE_CODE</text></svg>"#;
        let template = Template::new(TemplateKind::OneColor, text).unwrap();
        let (code, colors) = language("it", &["#009246"]);
        let svg = IconRenderer::default().render(&code, &colors, &template);

        assert_eq!(
            svg,
            r##"<svg fill="#009246" stroke="COLOR_1"><text x="35" x="20">IT LANGUAGE_CODE</text></svg>"##
        );
    }

    #[test]
    fn test_render_trims_whitespace() {
        let template =
            Template::new(TemplateKind::OneColor, format!("\n  {}\n\n", ONE)).unwrap();
        let (code, colors) = language("en", &["#012169"]);
        let svg = IconRenderer::default().render(&code, &colors, &template);
        assert!(svg.starts_with("<svg>"));
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn test_render_negative_margin_is_kept() {
        let (code, colors) = language("mmm", &["#123456"]);
        let svg = IconRenderer::default().render(&code, &colors, &one_color());
        assert!(svg.contains(r#"x="-16""#));
    }

    #[test]
    fn test_render_is_idempotent() {
        let renderer = IconRenderer::default();
        let set = template_set();
        let (code, colors) = language("fr", &["#0055A4", "#FFFFFF", "#EF4135"]);
        let first = renderer.render_icon(&set, &code, &colors);
        let second = renderer.render_icon(&set, &code, &colors);
        assert_eq!(first, second);
    }

    // ==================== Empty Color List Tests ====================

    #[test]
    fn test_render_empty_colors_uses_default_in_slot_one() {
        let renderer = IconRenderer::default();
        let (code, colors) = language("fr", &[]);
        let icon = renderer.render_icon(&template_set(), &code, &colors);

        assert_eq!(icon.kind, TemplateKind::TwoColors);
        assert!(icon.svg.contains(r##"<rect fill="#2980b9"/>"##));
        assert!(icon.svg.contains(r#"<rect fill="COLOR_2"/>"#));
    }

    #[test]
    fn test_render_custom_default_color() {
        let renderer = IconRenderer::new(RenderOptions {
            default_color: "#abcdef".to_string(),
            ..RenderOptions::default()
        });
        let (code, colors) = language("xx", &[]);
        let icon = renderer.render_icon(&template_set(), &code, &colors);
        assert!(icon.svg.contains("#abcdef"));
        assert!(!icon.svg.contains(DEFAULT_COLOR));
    }

    #[test]
    fn test_render_custom_total_width() {
        let renderer = IconRenderer::new(RenderOptions {
            total_width: 256,
            ..RenderOptions::default()
        });
        let (code, colors) = language("en", &["#012169"]);
        let svg = renderer.render(&code, &colors, &one_color());
        assert!(svg.contains(r#"x="83""#));
    }

    // ==================== Contrast Stroke Tests ====================

    #[test]
    fn test_white_adds_stroke() {
        let renderer = IconRenderer::default();
        let (code, colors) = language("fr", &["#0055A4", "#FFFFFF", "#EF4135"]);
        let template = Template::new(TemplateKind::ThreeColors, THREE).unwrap();
        let svg = renderer.render(&code, &colors, &template);
        assert!(svg.contains(r##"<text stroke="#000000" stroke-width="1" x="21" y="80">"##));
    }

    #[test]
    fn test_lowercase_white_adds_stroke() {
        let renderer = IconRenderer::default();
        let (code, colors) = language("pl", &["#ffffff", "#dc143c"]);
        let svg = renderer.render(&code, &colors, &two_colors());
        assert!(svg.contains(r#"stroke-width="1""#));
    }

    #[test]
    fn test_custom_stroke() {
        let renderer = IconRenderer::new(RenderOptions {
            stroke_color: "#333333".to_string(),
            stroke_width: "2".to_string(),
            ..RenderOptions::default()
        });
        let (code, colors) = language("jp", &["#FFFFFF"]);
        let svg = renderer.render(&code, &colors, &one_color());
        assert!(svg.contains(r##"<text stroke="#333333" stroke-width="2" "##));
    }

    #[test]
    fn test_no_white_no_stroke() {
        let renderer = IconRenderer::default();
        let (code, colors) = language("es", &["#AA151B", "#F1BF00"]);
        let svg = renderer.render(&code, &colors, &two_colors());
        assert!(!svg.contains("stroke"));
    }

    #[test]
    fn test_generated_icon_file_name_keeps_case() {
        let renderer = IconRenderer::default();
        let (code, colors) = language("pt-br", &["#009C3B"]);
        let icon = renderer.render_icon(&template_set(), &code, &colors);
        assert_eq!(icon.file_name(), "pt-br.svg");
    }
}
