//! Interactive terminal UI for the explorer.
//!
//! [`ExplorerUi`] is the public builder. The remaining submodules implement the
//! event loop, the background load, rendering and key handling. Key handling
//! maps raw events onto the four [`crate::countries::Explorer`] operations and
//! does nothing else to the data.

mod actions;
mod builder;
pub mod components;
mod config;
pub mod input;
mod loading;
mod render;
mod runtime;
mod state;
pub mod style;

pub use builder::ExplorerUi;
pub use config::UiLabels;
pub use loading::spawn_loader;
pub use runtime::run;
pub use state::{App, ExplorerOutcome, Focus};
pub use style::{Theme, builtin_themes, default_theme};
