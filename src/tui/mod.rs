//! Terminal UI building blocks for rendering `varview`.
//!
//! The submodules here expose reusable widgets, input helpers, and supporting
//! utilities used by the higher level UI orchestration code.

pub mod components;
pub mod input;
pub mod theme;
