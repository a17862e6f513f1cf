//! Widgets that make up the explorer screen.

mod detail;
mod list;
mod prompt;

pub use detail::{DetailContext, render_detail};
pub use list::{ListContext, render_country_list};
pub use prompt::{PromptContext, StatusState, render_prompt};
