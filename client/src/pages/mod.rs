//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its route-scoped state (filters, params, reveal scopes)
//! and delegates rendering details to `components`.

pub mod blog;
pub mod blog_post;
pub mod contact;
pub mod home;
pub mod not_found;
pub mod project_detail;
pub mod projects;
