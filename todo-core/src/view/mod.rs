//! View Layer
//!
//! Pure read path: records in, presentation rows out.

mod escape;
mod render;

pub use escape::escape_html;
pub use render::{render, ListView, RowView, Stats};
