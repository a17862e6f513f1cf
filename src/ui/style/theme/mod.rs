mod builtins;
mod types;

pub use types::{Theme, ThemeDefinition};

/// Themes bundled with the application, default first.
#[must_use]
pub fn builtin_themes() -> &'static [ThemeDefinition] {
	builtins::DEFINITIONS
}

#[must_use]
pub fn default_theme() -> Theme {
	builtins::SLATE
}

/// Look up a bundled theme by name or alias.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	builtin_themes()
		.iter()
		.find(|definition| definition.matches(name.trim()))
		.map(|definition| definition.theme)
}

/// Canonical names of the bundled themes.
pub fn names() -> impl Iterator<Item = &'static str> {
	builtin_themes().iter().map(|definition| definition.name)
}

impl Default for Theme {
	fn default() -> Self {
		default_theme()
	}
}
