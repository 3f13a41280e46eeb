//! # Optbench Core Library
//!
//! A transformation and composition engine for reproducible, parameterized
//! optimization benchmark problems.
//!
//! ## Architectural Philosophy
//!
//! The library is designed with a strict three-layer architecture to ensure a clear
//! separation of concerns, making it modular, testable, and extensible.
//!
//! - **[`core`]: The Foundation.** Contains the stateless mathematics: base kernels
//!   (`kernels`), coordinate and bit-string transformation primitives (`transforms`),
//!   and the deterministic uniform generator benchmark instances are derived from.
//!
//! - **[`engine`]: The Logic Core.** This stateful layer binds kernels to their
//!   auxiliary transformation data. It includes the `AuxiliaryDataStore` for loading
//!   and sharing shift/rotation/shuffle data, the per-version layout and bias tables,
//!   the composition engine for blended functions, and the `Problem` lifecycle with
//!   its construction-time optimum derivation.
//!
//! - **[`workflows`]: The Public API.** This is the highest-level, user-facing layer.
//!   It carries the per-suite function tables and the factories that turn a
//!   (version, function id, instance, dimension) request into a ready-to-evaluate
//!   problem. It provides a simple and powerful entry point for end-users of the
//!   library.

pub mod core;
pub mod engine;
pub mod workflows;
