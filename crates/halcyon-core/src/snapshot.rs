//! Serializable record of every exported constant, rendered as JSON, TOML
//! or CSS custom properties for consumers outside Rust.

use std::fmt::{self, Write as _};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::ExportConfig;
use crate::constants::*;
use crate::error::HalcyonError;
use crate::layout::{Layout, Length};

/// Output format of [`Snapshot::render`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Json,
    Toml,
    Css,
}

impl ExportFormat {
    pub const ALL: &[ExportFormat] = &[Self::Json, Self::Toml, Self::Css];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Toml => "toml",
            Self::Css => "css",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = HalcyonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|f| f.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| HalcyonError::UnknownFormat(s.to_string()))
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One exported value, tagged with how it renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstantValue {
    Text(&'static str),
    Count(u32),
    Length(Length),
}

impl ConstantValue {
    /// CSS value: quoted text, bare count, length with unit.
    fn css(&self) -> String {
        match self {
            Self::Text(s) => format!("{s:?}"),
            Self::Count(n) => n.to_string(),
            Self::Length(len) => len.to_string(),
        }
    }
}

impl fmt::Display for ConstantValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Count(n) => write!(f, "{n}"),
            Self::Length(len) => write!(f, "{}", len.value),
        }
    }
}

/// Every constant by its exported name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct Snapshot {
    pub uncategorized: &'static str,
    pub page_size: u32,
    pub light_mode: &'static str,
    pub dark_mode: &'static str,
    pub auto_mode: &'static str,
    pub default_theme: &'static str,
    pub banner_height: u32,
    pub banner_height_extend: u32,
    pub banner_height_home: u32,
    pub main_panel_overlaps_banner_height: u32,
    pub page_width: u32,
}

impl Snapshot {
    pub const CURRENT: Snapshot = Snapshot {
        uncategorized: UNCATEGORIZED,
        page_size: PAGE_SIZE,
        light_mode: LIGHT_MODE,
        dark_mode: DARK_MODE,
        auto_mode: AUTO_MODE,
        default_theme: DEFAULT_THEME,
        banner_height: BANNER_HEIGHT,
        banner_height_extend: BANNER_HEIGHT_EXTEND,
        banner_height_home: BANNER_HEIGHT_HOME,
        main_panel_overlaps_banner_height: MAIN_PANEL_OVERLAPS_BANNER_HEIGHT,
        page_width: PAGE_WIDTH,
    };

    /// `(name, value)` pairs in declaration order.
    pub fn entries(&self) -> [(&'static str, ConstantValue); 11] {
        use ConstantValue::{Count, Text};

        let layout = Layout::CURRENT;
        let len = |unit_of: Length, value: u32| ConstantValue::Length(Length { value, ..unit_of });
        [
            ("UNCATEGORIZED", Text(self.uncategorized)),
            ("PAGE_SIZE", Count(self.page_size)),
            ("LIGHT_MODE", Text(self.light_mode)),
            ("DARK_MODE", Text(self.dark_mode)),
            ("AUTO_MODE", Text(self.auto_mode)),
            ("DEFAULT_THEME", Text(self.default_theme)),
            ("BANNER_HEIGHT", len(layout.banner_height, self.banner_height)),
            (
                "BANNER_HEIGHT_EXTEND",
                len(layout.banner_height_extend, self.banner_height_extend),
            ),
            (
                "BANNER_HEIGHT_HOME",
                len(layout.banner_height_home, self.banner_height_home),
            ),
            (
                "MAIN_PANEL_OVERLAPS_BANNER_HEIGHT",
                len(
                    layout.main_panel_overlaps_banner_height,
                    self.main_panel_overlaps_banner_height,
                ),
            ),
            ("PAGE_WIDTH", len(layout.page_width, self.page_width)),
        ]
    }

    /// Render in `format`, honoring the pretty/prefix settings of `config`.
    pub fn render(
        &self,
        format: ExportFormat,
        config: &ExportConfig,
    ) -> Result<String, HalcyonError> {
        let out = match format {
            ExportFormat::Json if config.export.pretty => serde_json::to_string_pretty(self)
                .map_err(|e| HalcyonError::Serialize(e.to_string()))?,
            ExportFormat::Json => {
                serde_json::to_string(self).map_err(|e| HalcyonError::Serialize(e.to_string()))?
            }
            ExportFormat::Toml => {
                toml::to_string(self).map_err(|e| HalcyonError::Serialize(e.to_string()))?
            }
            ExportFormat::Css => self.to_css(&config.css.prefix),
        };
        tracing::debug!(%format, bytes = out.len(), "Rendered constants snapshot");
        Ok(out)
    }

    /// A `:root` block with one custom property per constant.
    pub fn to_css(&self, prefix: &str) -> String {
        let mut css = String::from(":root {\n");
        for (name, value) in self.entries() {
            let property = name.to_ascii_lowercase().replace('_', "-");
            // Writing into a String cannot fail.
            let _ = writeln!(css, "  --{prefix}{property}: {};", value.css());
        }
        css.push_str("}\n");
        css
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::CURRENT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_follow_constants() {
        let entries = Snapshot::CURRENT.entries();
        assert_eq!(entries[0], ("UNCATEGORIZED", ConstantValue::Text("__uncategorized__")));
        assert_eq!(entries[1], ("PAGE_SIZE", ConstantValue::Count(8)));
        assert_eq!(entries[5], ("DEFAULT_THEME", ConstantValue::Text("auto")));
        assert_eq!(
            entries[8],
            ("BANNER_HEIGHT_HOME", ConstantValue::Length(Length::vh(35)))
        );
        assert_eq!(entries[10], ("PAGE_WIDTH", ConstantValue::Length(Length::rem(70))));
    }

    #[test]
    fn entry_names_are_unique() {
        let entries = Snapshot::CURRENT.entries();
        let mut names: Vec<_> = entries.iter().map(|(name, _)| *name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), entries.len());
    }

    #[test]
    fn json_keys_are_constant_names() {
        let config = ExportConfig::default();
        let json = Snapshot::CURRENT.render(ExportFormat::Json, &config).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["UNCATEGORIZED"], "__uncategorized__");
        assert_eq!(value["DEFAULT_THEME"], "auto");
        assert_eq!(value["BANNER_HEIGHT_HOME"], 35);
        assert_eq!(value["MAIN_PANEL_OVERLAPS_BANNER_HEIGHT"], 3);
        assert_eq!(value.as_object().unwrap().len(), 11);
    }

    #[test]
    fn compact_json_is_single_line() {
        let mut config = ExportConfig::default();
        config.export.pretty = false;
        let json = Snapshot::CURRENT.render(ExportFormat::Json, &config).unwrap();
        assert!(!json.contains('\n'));
    }

    #[test]
    fn toml_table() {
        let config = ExportConfig::default();
        let out = Snapshot::CURRENT.render(ExportFormat::Toml, &config).unwrap();
        let table: toml::Table = toml::from_str(&out).unwrap();

        assert_eq!(table["PAGE_SIZE"].as_integer(), Some(8));
        assert_eq!(table["LIGHT_MODE"].as_str(), Some("light"));
        assert_eq!(table["PAGE_WIDTH"].as_integer(), Some(70));
    }

    #[test]
    fn css_custom_properties() {
        let css = Snapshot::CURRENT.to_css("");

        assert!(css.starts_with(":root {\n"));
        assert!(css.ends_with("}\n"));
        assert!(css.contains("  --banner-height-home: 35vh;\n"));
        assert!(css.contains("  --page-width: 70rem;\n"));
        assert!(css.contains("  --main-panel-overlaps-banner-height: 3rem;\n"));
        assert!(css.contains("  --page-size: 8;\n"));
        assert!(css.contains("  --uncategorized: \"__uncategorized__\";\n"));
    }

    #[test]
    fn css_prefix_from_config() {
        let mut config = ExportConfig::default();
        config.css.prefix = "hc-".into();
        let css = Snapshot::CURRENT.render(ExportFormat::Css, &config).unwrap();
        assert!(css.contains("--hc-banner-height: 25vh;"));
        assert!(!css.contains("  --banner-height:"));
    }

    #[test]
    fn format_parse() {
        assert_eq!("css".parse::<ExportFormat>().unwrap(), ExportFormat::Css);
        assert_eq!("TOML".parse::<ExportFormat>().unwrap(), ExportFormat::Toml);
        assert!(matches!(
            "yaml".parse::<ExportFormat>(),
            Err(HalcyonError::UnknownFormat(_))
        ));
    }
}
