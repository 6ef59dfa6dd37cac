//! Garage partner registration wizard
//!
//! The binary drives [`app::App`]; the library exposes the form model, the
//! wizard state machine and the screen so they can be exercised headless.

pub mod app;
pub mod config;
pub mod form;
pub mod logging;
pub mod ui;
pub mod wizard;
