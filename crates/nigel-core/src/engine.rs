//! # Prime Sum Engine
//!
//! Computes the Nigel Number of a validated input: the ascending list of
//! primes ≤ N and their sum.
//!
//! The engine is a stateless unit value. Concurrent callers each get an
//! independent sieve; nothing is cached between calls, so computing the same
//! N twice yields identical results.

use std::panic::{self, AssertUnwindSafe};

use serde::Serialize;

use crate::error::CalculationError;
use crate::sieve;
use crate::validator::ValidatedInput;

/// Outcome of a successful calculation.
///
/// Fields are private so the invariant `nigel_number == Σ primes_found`
/// cannot be broken after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalculationResult {
    input: u64,
    nigel_number: u64,
    primes_found: Vec<u64>,
}

impl CalculationResult {
    /// The N the result was computed for.
    pub fn input(&self) -> u64 {
        self.input
    }

    /// Sum of all primes ≤ N.
    pub fn nigel_number(&self) -> u64 {
        self.nigel_number
    }

    /// Primes ≤ N, strictly ascending.
    pub fn primes_found(&self) -> &[u64] {
        &self.primes_found
    }

    /// Consume the result, returning `(input, nigel_number, primes_found)`.
    pub fn into_parts(self) -> (u64, u64, Vec<u64>) {
        (self.input, self.nigel_number, self.primes_found)
    }
}

/// Sieve-backed Nigel Number calculator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PrimeSumEngine;

impl PrimeSumEngine {
    /// Create an engine.
    pub fn new() -> Self {
        Self
    }

    /// Compute the primes ≤ N and their sum.
    ///
    /// Any fault inside the computation, including a panic, is returned as
    /// [`CalculationError::InternalFailure`]. The marker vector lives only
    /// for the duration of this call.
    pub fn compute(&self, input: ValidatedInput) -> Result<CalculationResult, CalculationError> {
        let n = input.get();
        let limit = usize::try_from(n).map_err(|_| {
            CalculationError::InternalFailure(format!("n = {n} exceeds the host address width"))
        })?;

        let primes_found = panic::catch_unwind(AssertUnwindSafe(|| sieve::primes_up_to(limit)))
            .map_err(|payload| {
                CalculationError::InternalFailure(format!(
                    "sieve panicked: {}",
                    panic_message(payload.as_ref())
                ))
            })??;

        let nigel_number = primes_found
            .iter()
            .try_fold(0u64, |acc, &p| acc.checked_add(p))
            .ok_or_else(|| {
                CalculationError::InternalFailure(format!("prime sum overflows u64 for n = {n}"))
            })?;

        Ok(CalculationResult {
            input: n,
            nigel_number,
            primes_found,
        })
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("non-string panic payload")
}
