//! Toy RSA encryption.

use thiserror::Error;

/// Raised when the key material cannot form a usable modulus.
#[derive(Debug, Error)]
pub enum RsaError {
    #[error("prime factors must each be at least 2 (got {p} and {q})")]
    ModulusTooSmall { p: u64, q: u64 },
    #[error("modulus {p} * {q} overflows a 64-bit integer")]
    ModulusOverflow { p: u64, q: u64 },
}

/// Computes `message ^ exponent mod (p * q)`.
///
/// The message is reduced modulo the modulus first, so congruent messages
/// yield identical ciphertexts.
pub fn encrypt(message: u64, exponent: u64, p: u64, q: u64) -> Result<u64, RsaError> {
    if p < 2 || q < 2 {
        return Err(RsaError::ModulusTooSmall { p, q });
    }
    let modulus = p
        .checked_mul(q)
        .ok_or(RsaError::ModulusOverflow { p, q })?;
    Ok(mod_pow(message % modulus, exponent, modulus))
}

/// Square-and-multiply in `u128` intermediates so no product overflows.
fn mod_pow(base: u64, mut exponent: u64, modulus: u64) -> u64 {
    let modulus = u128::from(modulus);
    let mut result: u128 = 1 % modulus;
    let mut base = u128::from(base) % modulus;
    while exponent > 0 {
        if exponent & 1 == 1 {
            result = result * base % modulus;
        }
        base = base * base % modulus;
        exponent >>= 1;
    }
    result as u64
}
