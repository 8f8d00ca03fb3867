//! Client-side UI state.
//!
//! DESIGN
//! ======
//! Each module keeps its decisions in plain Rust types so they can be tested
//! without a browser. Components hold these in signals; browser side effects
//! live in `util`.

pub mod contact;
pub mod nav;
pub mod reveal;
pub mod theme;
