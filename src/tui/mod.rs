//! Terminal User Interface module
//!
//! The interactive report screen, built on ratatui: pick a month, view its
//! report, and download it as a PDF.

pub mod app;
pub mod event;
pub mod handler;
pub mod layout;
pub mod terminal;
pub mod views;
pub mod widgets;

pub use app::App;
pub use terminal::run_tui;
