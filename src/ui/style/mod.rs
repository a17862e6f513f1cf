//! Visual styling for the terminal UI.

pub mod theme;

pub use theme::{Theme, ThemeDefinition, builtin_themes, by_name, default_theme, names};
