//! # Sieve of Eratosthenes
//!
//! Enumerates every prime in `[2, limit]` in O(limit · log log limit) time
//! and O(limit) space. Both the marker vector and the output vector are
//! allocated fallibly, so memory pressure surfaces as a
//! [`CalculationError`] instead of aborting the process.

use crate::error::CalculationError;

/// All primes `p` with `2 ≤ p ≤ limit`, ascending.
pub fn primes_up_to(limit: usize) -> Result<Vec<u64>, CalculationError> {
    if limit < 2 {
        return Ok(Vec::new());
    }

    let len = limit.checked_add(1).ok_or_else(|| {
        CalculationError::InternalFailure(format!("sieve length overflows for limit {limit}"))
    })?;

    let mut is_prime: Vec<bool> = Vec::new();
    is_prime.try_reserve_exact(len).map_err(|e| {
        CalculationError::InternalFailure(format!("marker allocation of {len} bytes failed: {e}"))
    })?;
    is_prime.resize(len, true);
    is_prime[0] = false;
    is_prime[1] = false;

    // Multiples below i*i were already crossed off by a smaller factor.
    let mut i = 2usize;
    while i <= limit / i {
        if is_prime[i] {
            for multiple in (i * i..=limit).step_by(i) {
                is_prime[multiple] = false;
            }
        }
        i += 1;
    }

    let mut primes = Vec::new();
    let capacity = prime_count_upper_bound(limit);
    primes.try_reserve_exact(capacity).map_err(|e| {
        CalculationError::InternalFailure(format!(
            "prime list allocation for {capacity} entries failed: {e}"
        ))
    })?;
    primes.extend(
        is_prime
            .iter()
            .enumerate()
            .filter(|&(_, &prime)| prime)
            .map(|(p, _)| p as u64),
    );

    Ok(primes)
}

/// Upper bound on π(x) (Rosser & Schoenfeld): π(x) < 1.25506 · x / ln x for x > 1.
fn prime_count_upper_bound(limit: usize) -> usize {
    let x = limit as f64;
    (1.25506 * x / x.ln()).ceil() as usize
}
