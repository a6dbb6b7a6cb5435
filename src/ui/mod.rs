//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into four layers:
//!
//! - **[`app`]** : application state, keyboard event loop, pane focus
//! - **[`editor`]** : the text buffer behind the source pane
//! - **[`panes`]** : stateless render functions for each visible pane (title bar,
//!   source, compiler output, status bar)
//! - **[`theme`]** : centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with the initial source
//! text and call [`App::run`] to start the event loop. Compiling goes through
//! [`compile`](crate::compiler::compile) and nothing else.
//!
//! [`App::run`]: app::App::run

pub mod app;
pub mod editor;
pub mod panes;
pub mod theme;

pub use app::App;
