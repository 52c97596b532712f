//! Core library for the `volley` CLI.
//!
//! `volley` replays a file of JSON payloads as POST requests against a target
//! endpoint through a fixed-size worker pool, appends every response to a
//! result log, and reports latency statistics. The modules here are the
//! building blocks of the binary: argument and config handling, payload
//! loading, the dispatch pool, the recorder, and run orchestration.
pub mod args;
pub mod config;
pub mod dispatch;
pub mod entry;
pub mod error;
pub mod logger;
pub mod payload;
pub mod recorder;
pub mod run;

#[cfg(test)]
pub(crate) mod test_support;
