//! Site-wide layout and theme constants for the halcyon blog front-end.
//!
//! [`constants`] is the compatibility surface read by the presentation layer.
//! The remaining modules give those values a typed shape and export them to
//! other toolchains; none of them change a value.

pub mod config;
pub mod constants;
pub mod error;
pub mod layout;
pub mod snapshot;
pub mod theme;

pub use config::ExportConfig;
pub use error::HalcyonError;
pub use layout::{Layout, Length, Unit};
pub use snapshot::{ConstantValue, ExportFormat, Snapshot};
pub use theme::ThemeMode;
