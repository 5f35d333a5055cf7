//! Banner and page geometry paired with the CSS unit each value is
//! expressed in.

use std::fmt;

use serde::Serialize;

use crate::constants::{
    BANNER_HEIGHT, BANNER_HEIGHT_EXTEND, BANNER_HEIGHT_HOME, MAIN_PANEL_OVERLAPS_BANNER_HEIGHT,
    PAGE_WIDTH,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    /// Percent of the viewport height.
    Vh,
    /// Multiples of the root font size.
    Rem,
}

impl Unit {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Vh => "vh",
            Self::Rem => "rem",
        }
    }
}

/// A magnitude with its unit. Displays as a CSS length, e.g. `25vh`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Length {
    pub value: u32,
    pub unit: Unit,
}

impl Length {
    pub const fn vh(value: u32) -> Self {
        Self {
            value,
            unit: Unit::Vh,
        }
    }

    pub const fn rem(value: u32) -> Self {
        Self {
            value,
            unit: Unit::Rem,
        }
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit.as_str())
    }
}

/// Layout dimensions shared by every page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Layout {
    pub banner_height: Length,
    pub banner_height_extend: Length,
    pub banner_height_home: Length,
    pub main_panel_overlaps_banner_height: Length,
    pub page_width: Length,
}

impl Layout {
    pub const CURRENT: Layout = Layout {
        banner_height: Length::vh(BANNER_HEIGHT),
        banner_height_extend: Length::vh(BANNER_HEIGHT_EXTEND),
        banner_height_home: Length::vh(BANNER_HEIGHT_HOME),
        main_panel_overlaps_banner_height: Length::rem(MAIN_PANEL_OVERLAPS_BANNER_HEIGHT),
        page_width: Length::rem(PAGE_WIDTH),
    };

    /// Banner height for the home page or any other page.
    pub const fn banner_height_for(&self, is_home: bool) -> Length {
        if is_home {
            self.banner_height_home
        } else {
            self.banner_height
        }
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::CURRENT
    }
}
