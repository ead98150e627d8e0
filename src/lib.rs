//! An interactive contact assistant plus a few small file utilities.
//!
//! The heart of the crate is [`Interpreter`]: a line-oriented command
//! interpreter over an in-memory contact table. One line of input is parsed
//! into a [`command::Command`] with argument tokens, dispatched against the
//! [`book::ContactBook`], and answered with a single textual response.
//! Failures are values ([`error::BotError`]), never panics, so the read loop
//! survives any input.
//!
//! The leaf modules [`salary`], [`records`] and [`tree`] are independent
//! utilities exposed as subcommands of the binary: summing numbers found in a
//! text file, parsing a comma-delimited record file, and rendering a
//! directory tree.

pub mod book;
pub mod command;
pub mod error;
mod interpreter;
pub mod records;
pub mod salary;
pub mod tree;

/// Convenient re-export of the interactive command interpreter.
pub use interpreter::Interpreter;
