//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome and page sections. Shared behavior comes
//! from `state` (pure rules) and `util` (browser wiring such as `use_reveal`).

pub mod about;
pub mod contact_form;
pub mod footer;
pub mod hero;
pub mod markdown_body;
pub mod navigation;
pub mod post_card;
pub mod project_card;
pub mod skills_grid;
pub mod tag_list;
pub mod theme_toggle;
