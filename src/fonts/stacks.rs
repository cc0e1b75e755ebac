//! Global font-stack table.

use super::{get_available_fonts, FontCategory, FontConfig};

/// CSS fallback stack for a font id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontStack {
    /// Font id
    pub id: &'static str,
    /// Display name
    pub label: &'static str,
    /// Classification
    pub category: FontCategory,
    /// CSS `font-family` value
    pub family: &'static str,
}

/// Process-wide font-stack table.
pub const FONT_STACKS: &[FontStack] = &[
    FontStack {
        id: "inter",
        label: "Inter",
        category: FontCategory::Sans,
        family: "'Inter', system-ui, -apple-system, 'Segoe UI', sans-serif",
    },
    FontStack {
        id: "roboto",
        label: "Roboto",
        category: FontCategory::Sans,
        family: "'Roboto', 'Helvetica Neue', Arial, sans-serif",
    },
    FontStack {
        id: "open-sans",
        label: "Open Sans",
        category: FontCategory::Sans,
        family: "'Open Sans', 'Segoe UI', Arial, sans-serif",
    },
    FontStack {
        id: "lato",
        label: "Lato",
        category: FontCategory::Sans,
        family: "'Lato', 'Helvetica Neue', Arial, sans-serif",
    },
    FontStack {
        id: "merriweather",
        label: "Merriweather",
        category: FontCategory::Serif,
        family: "'Merriweather', Georgia, 'Times New Roman', serif",
    },
    FontStack {
        id: "lora",
        label: "Lora",
        category: FontCategory::Serif,
        family: "'Lora', Georgia, serif",
    },
    FontStack {
        id: "playfair-display",
        label: "Playfair Display",
        category: FontCategory::Serif,
        family: "'Playfair Display', Didot, Georgia, serif",
    },
    FontStack {
        id: "jetbrains-mono",
        label: "JetBrains Mono",
        category: FontCategory::Mono,
        family: "'JetBrains Mono', Menlo, Consolas, monospace",
    },
    FontStack {
        id: "fira-code",
        label: "Fira Code",
        category: FontCategory::Mono,
        family: "'Fira Code', Menlo, Consolas, monospace",
    },
];

/// Look up the CSS `font-family` stack for a font id.
pub fn font_stack(id: &str) -> Option<&'static str> {
    FONT_STACKS.iter().find(|s| s.id == id).map(|s| s.family)
}

/// CSS rules for every available font that has a known stack.
///
/// One `.font-{id}` rule per font, in `all_fonts` order. Fonts without a
/// table entry are skipped.
pub fn font_stylesheet(config: &FontConfig) -> String {
    let mut css = String::new();
    for font in get_available_fonts(config) {
        match font_stack(&font.id) {
            Some(family) => {
                css.push_str(&format!(".font-{} {{ font-family: {}; }}\n", font.id, family));
            }
            None => log::trace!("no font stack for '{}'", font.id),
        }
    }
    css
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fonts::FontMeta;

    #[test]
    fn test_font_stack_lookup() {
        assert!(font_stack("inter").unwrap().contains("sans-serif"));
        assert!(font_stack("jetbrains-mono").unwrap().ends_with("monospace"));
        assert_eq!(font_stack("comic-sans"), None);
    }

    #[test]
    fn test_table_ids_unique() {
        for (i, a) in FONT_STACKS.iter().enumerate() {
            for b in &FONT_STACKS[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_stylesheet_follows_allow_list() {
        let config = FontConfig::builtin().with_allowed(["lora", "inter"]);
        let css = font_stylesheet(&config);
        let lines: Vec<&str> = css.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with(".font-inter {"));
        assert!(lines[1].starts_with(".font-lora {"));
    }

    #[test]
    fn test_stylesheet_skips_unknown_stacks() {
        let config = FontConfig::new(vec![FontMeta::new("house-font", "House")], "house-font");
        assert_eq!(font_stylesheet(&config), "");
    }
}
