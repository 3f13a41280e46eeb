//! # Transform Module
//!
//! Stateless transformation primitives applied to inputs before kernel
//! evaluation.
//!
//! - [`continuous`] - shift, scale, rotate, and shuffle operations on real
//!   vectors, plus their canonical shift -> scale -> rotate composition.
//! - [`discrete`] - the W-model layers for bit strings: dummy-variable
//!   selection, neutrality folding, epistasis remapping, and ruggedness
//!   value permutations.

pub mod continuous;
pub mod discrete;
