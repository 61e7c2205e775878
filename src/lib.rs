//! Sliding-tile merge puzzle (workspace facade crate).
//!
//! Exposes `twofortyeight::{core, types}` while the implementation lives in
//! dedicated crates under `crates/`, plus the autoplay policies used by the
//! headless runner.

pub mod autoplay;

pub use twofortyeight_core as core;
pub use twofortyeight_types as types;
