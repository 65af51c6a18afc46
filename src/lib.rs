//! Parley is a full-screen terminal chat with a simulated counterpart.
//!
//! The crate is organized around a small set of collaborating layers:
//! - [`core`] owns the message store, the action layer that mutates it,
//!   configuration, and the scheduler that delivers delayed canned replies.
//! - [`ui`] renders the terminal interface and runs the interactive event loop
//!   that drives user input and display updates.
//! - [`utils`] holds color handling, scroll bookkeeping and log setup.
//!
//! Runtime entrypoints live in the binary crate (`src/main.rs`) and route
//! through [`crate::cli::main`], which initializes and dispatches into
//! [`core::app`] and [`ui::chat_loop`] for interactive sessions.

pub mod cli;
pub mod core;
pub mod ui;
pub mod utils;
