//! Named constants read by the front-end: pagination, theme identifiers and
//! banner/page geometry.
//!
//! Names and values are part of the public surface. Changing one is a
//! breaking change for every consumer.

// ── Categories ───────────────────────────────────────────────────

/// Key under which posts without a category are grouped.
pub const UNCATEGORIZED: &str = "__uncategorized__";

// ── Pagination ───────────────────────────────────────────────────

/// Posts per page in paginated listings.
pub const PAGE_SIZE: u32 = 8;

// ── Theme identifiers ────────────────────────────────────────────

pub const LIGHT_MODE: &str = "light";
pub const DARK_MODE: &str = "dark";
/// Follow the system color scheme preference.
pub const AUTO_MODE: &str = "auto";

/// Theme used when the visitor has no stored preference.
pub const DEFAULT_THEME: &str = AUTO_MODE;

// ── Banner (unit: vh) ────────────────────────────────────────────

/// Banner height on every page except home.
pub const BANNER_HEIGHT: u32 = 25;
/// Extra height added to the banner on the home page.
pub const BANNER_HEIGHT_EXTEND: u32 = 10;
pub const BANNER_HEIGHT_HOME: u32 = BANNER_HEIGHT + BANNER_HEIGHT_EXTEND;

// ── Page layout (unit: rem) ──────────────────────────────────────

/// How far the main panel is pulled up over the banner.
pub const MAIN_PANEL_OVERLAPS_BANNER_HEIGHT: u32 = 3;
/// Maximum content width.
pub const PAGE_WIDTH: u32 = 70;

const _: () = assert!(
    str_eq(DEFAULT_THEME, LIGHT_MODE)
        || str_eq(DEFAULT_THEME, DARK_MODE)
        || str_eq(DEFAULT_THEME, AUTO_MODE),
    "DEFAULT_THEME must be one of the theme identifiers"
);

/// Byte-wise string equality usable in `const` context.
pub(crate) const fn str_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}
