//! travelog
//! ========
//!
//! Workspace crate. Re-exports [`travelog_core`] so the demos under `demos/`
//! can be run with `cargo run --example <name>` from the repository root.
#![cfg_attr(docsrs, feature(doc_cfg))]

pub use travelog_core::*;
