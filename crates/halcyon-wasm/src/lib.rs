//! JavaScript bindings for the halcyon constants.

use halcyon_core::constants;
use halcyon_core::{ExportConfig, ExportFormat, Snapshot, ThemeMode};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(js_name = uncategorized)]
pub fn uncategorized() -> String {
    constants::UNCATEGORIZED.to_string()
}

#[wasm_bindgen(js_name = pageSize)]
pub fn page_size() -> u32 {
    constants::PAGE_SIZE
}

#[wasm_bindgen(js_name = lightMode)]
pub fn light_mode() -> String {
    constants::LIGHT_MODE.to_string()
}

#[wasm_bindgen(js_name = darkMode)]
pub fn dark_mode() -> String {
    constants::DARK_MODE.to_string()
}

#[wasm_bindgen(js_name = autoMode)]
pub fn auto_mode() -> String {
    constants::AUTO_MODE.to_string()
}

#[wasm_bindgen(js_name = defaultTheme)]
pub fn default_theme() -> String {
    constants::DEFAULT_THEME.to_string()
}

#[wasm_bindgen(js_name = bannerHeight)]
pub fn banner_height() -> u32 {
    constants::BANNER_HEIGHT
}

#[wasm_bindgen(js_name = bannerHeightExtend)]
pub fn banner_height_extend() -> u32 {
    constants::BANNER_HEIGHT_EXTEND
}

#[wasm_bindgen(js_name = bannerHeightHome)]
pub fn banner_height_home() -> u32 {
    constants::BANNER_HEIGHT_HOME
}

#[wasm_bindgen(js_name = mainPanelOverlapsBannerHeight)]
pub fn main_panel_overlaps_banner_height() -> u32 {
    constants::MAIN_PANEL_OVERLAPS_BANNER_HEIGHT
}

#[wasm_bindgen(js_name = pageWidth)]
pub fn page_width() -> u32 {
    constants::PAGE_WIDTH
}

/// All constants as a compact JSON object keyed by constant name.
#[wasm_bindgen(js_name = constantsJson)]
pub fn constants_json() -> String {
    let mut config = ExportConfig::default();
    config.export.pretty = false;
    Snapshot::CURRENT
        .render(ExportFormat::Json, &config)
        .unwrap_or_else(|_| "{}".to_string())
}

/// Whether `value` is one of the theme identifiers.
#[wasm_bindgen(js_name = isThemeMode)]
pub fn is_theme_mode(value: &str) -> bool {
    ThemeMode::from_identifier(value).is_some()
}
