//! TUI module for the interactive session.
//!
//! Organized along FP/Unix boundaries:
//! - `state`: page data types (App, Focus, Action, Transition)
//! - `update`: event dispatch, widget first then page defaults
//! - `view`: pure rendering, returns the frame's tab buttons
//! - `theme`: style constants
//! - `run`: effects (terminal, event loop)

pub mod run;
pub mod state;
pub mod theme;
pub mod update;
pub mod view;
