//! UI components for the review form.
//!
//! Components render to plain strings of fixed display width; the view
//! stacks them into a frame.

pub mod review_pane;
pub mod text;

pub use review_pane::{ReviewPaneComponent, ReviewPaneViewContext};
