//! TUI pane rendering modules
//!
//! Each module exports a stateless `render_*` function; scroll offsets live in
//! [`App`](crate::ui::App) and are passed in by reference.
//!
//! - [`source`]: source editor with lexer-driven highlighting and line numbers
//! - [`output`]: compiler report (errors, warnings, symbol table)
//! - [`status`]: title bar and status bar with keybindings

pub mod output;
pub mod source;
pub mod status;

pub use output::render_output_pane;
pub use source::render_source_pane;
pub use status::{render_status_bar, render_title_bar};
