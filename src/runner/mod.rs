//! The runner is responsible for loading the seed account list, feeding the
//! raw input lines through a session driver, and writing the transcript to
//! a writer.
//!
//! This module provides both a synchronous and an asynchronous runner
//! implementation.

mod async_runner;
mod sync_runner;

pub use async_runner::run as run_async;
pub use sync_runner::run;
