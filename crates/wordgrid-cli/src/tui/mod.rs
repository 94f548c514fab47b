//! Minimal terminal application runtime.
//!
//! [`Tui::run`] drives an [`App`] with crossterm input, optional ticks for
//! time-based updates, and redraws after every handled event.

mod app;
mod event;
mod event_loop;
mod runner;

pub use self::{app::App, runner::Tui};
