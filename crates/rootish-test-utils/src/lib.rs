//! Test utilities and reference models for rootish development.
//!
//! Provides [`DropTracker`] for ownership accounting, a [`StackOp`]
//! vocabulary that can be replayed against both a [`RootishArrayStack`]
//! and a `Vec` model, and proptest strategies over that vocabulary.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod model;

pub use fixtures::{DropTracker, Tracked};
pub use model::{apply_op, arb_op, arb_ops, ModelMismatch, StackOp};

pub use rootish::RootishArrayStack;
