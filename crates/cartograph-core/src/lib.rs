//! Cartograph Core Types
//!
//! This crate provides the architecture model consumed by Cartograph reports:
//!
//! - **Identifiers**: Interned, dot-delimited element identifiers ([`identifier::Id`])
//! - **Model**: Elements, relationships and source locations ([`model`] module)
//! - **Graph**: The [`graph::ModelGraph`] accessor trait and the in-memory [`graph::Model`]
//! - **Snapshot**: A serde-facing model format ([`snapshot`] module)

pub mod error;
pub mod graph;
pub mod identifier;
pub mod model;
pub mod snapshot;

pub use error::ModelError;
