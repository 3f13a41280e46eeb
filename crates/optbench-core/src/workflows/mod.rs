//! # Workflows Module
//!
//! This module provides the high-level entry points that turn a
//! `(version, function id, instance, dimension)` request into a
//! ready-to-evaluate problem.
//!
//! ## Overview
//!
//! Workflows carry the per-suite function tables: which kernel (or blend of
//! kernels) backs each function id, the per-kernel shrink rates, hybrid chunk
//! proportions, and composition blend parameters. They orchestrate auxiliary
//! data loading through the [`crate::engine::store::AuxiliaryDataStore`] and
//! apply the configured missing-data policy, so callers only deal with a
//! constructed problem or a construction error.
//!
//! ## Architecture
//!
//! - **Continuous Factory** ([`cec`]) - Shifted/rotated, hybrid, and
//!   composition functions for the wired suite versions.
//! - **Pseudo-Boolean Factory** ([`pbo`]) - Bit-string functions with W-model
//!   layers and instance-derived transformations.

pub mod cec;
pub mod pbo;
