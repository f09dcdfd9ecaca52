//! tabstrip: keyboard-accessible tab widget for the terminal.

pub mod a11y;
pub mod error;
pub mod focus;
pub mod logging;
pub mod nav;
pub mod snapshot;
pub mod tui;
pub mod types;
pub mod widget;
