//! ShapeSwifter (workspace facade crate).
//!
//! Re-exports the puzzle logic from `crates/` as `shapeswifter::{core,types}` and
//! adds the environment configuration used by the CLI.

pub mod config;

pub use shapeswifter_core as core;
pub use shapeswifter_types as types;

pub use config::AppConfig;
