//! Interactive TUI interface
//!
//! Full-screen duel built on ratatui and crossterm.

pub mod app;
pub mod rendering;

pub use app::{App, InputMode, run_tui};
