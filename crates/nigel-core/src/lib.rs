//! # nigel-core — Computational Core of the Nigel Number Service
//!
//! The Nigel Number of a positive integer N is the sum of all primes ≤ N.
//! This crate owns the only logic in the service that is worth testing in
//! isolation: classifying raw input and enumerating primes.
//!
//! ## Components
//!
//! - [`Validator`] turns the raw, optional query value into a
//!   [`ValidatedInput`] or a classified [`ValidationError`].
//! - [`PrimeSumEngine`] runs a sieve of Eratosthenes over a validated input
//!   and returns a [`CalculationResult`] or a [`CalculationError`].
//!
//! ```text
//! raw input ──► Validator ──► PrimeSumEngine ──► CalculationResult
//!                  │                 │
//!                  ▼                 ▼
//!           ValidationError   CalculationError
//! ```
//!
//! ## Crate Policy
//!
//! - No dependencies on other `nigel-*` crates (this is the leaf of the DAG).
//! - No I/O, no logging, no shared mutable state. Every call owns its inputs.
//! - No `panic!()` or `.unwrap()` outside tests. Every failure path returns a
//!   classified error value.
//! - HTTP status codes and response bodies are the caller's concern.

pub mod engine;
pub mod error;
pub mod sieve;
pub mod validator;

pub use engine::{CalculationResult, PrimeSumEngine};
pub use error::{CalculationError, NigelError, ValidationError};
pub use validator::{ValidatedInput, Validator, DEFAULT_MAX_N, PARAMETER_NAME};
