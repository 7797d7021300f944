// src/integer_math/combinatorics.rs

use log::debug;
use crate::core::error::MathError;
use crate::integer_math::modular::Modular;

/// Precomputed factorials mod m. Build once, then answer `ncr` queries in
/// O(1) table lookups plus two modular inverses. Worth the O(bound) build
/// whenever more than a handful of queries share the same modulus.
pub struct FactorialTable {
    modular: Modular,
    fact: Vec<u64>,
}

impl FactorialTable {
    /// Builds `fact[0..=bound]` with `fact[0] = 1` and
    /// `fact[i] = fact[i-1] * i mod m`.
    pub fn build(bound: usize, modular: Modular) -> Self {
        let mut fact = vec![1u64; bound + 1];
        for i in 1..=bound {
            fact[i] = modular.mul(fact[i - 1], i as u64);
        }
        debug!("factorial table built for 0..={}", bound);
        FactorialTable { modular, fact }
    }

    pub fn bound(&self) -> u64 {
        (self.fact.len() - 1) as u64
    }

    pub fn modular(&self) -> &Modular {
        &self.modular
    }

    /// `n! mod m` straight from the table.
    pub fn factorial(&self, n: u64) -> Result<u64, MathError> {
        self.check_bound(n)?;
        Ok(self.fact[n as usize])
    }

    /// `C(n, r) mod m` as `n! * (r!)^-1 * ((n-r)!)^-1`.
    ///
    /// Returns 0 when `r > n`, 1 when `r` is 0 or `n`, and an
    /// `OutOfRange` error when `n` exceeds the precomputed bound.
    pub fn ncr(&self, n: u64, r: u64) -> Result<u64, MathError> {
        if r > n {
            return Ok(0);
        }
        if r == 0 || r == n {
            return Ok(1);
        }
        self.check_bound(n)?;
        let inv_r = self.modular.inverse(self.fact[r as usize])?;
        let inv_nr = self.modular.inverse(self.fact[(n - r) as usize])?;
        let ret = self.modular.mul(self.fact[n as usize], inv_r);
        Ok(self.modular.mul(ret, inv_nr))
    }

    fn check_bound(&self, n: u64) -> Result<(), MathError> {
        if n >= self.fact.len() as u64 {
            return Err(MathError::OutOfRange {
                value: n,
                bound: self.bound(),
            });
        }
        Ok(())
    }
}

/// `C(n, r) mod m` with no precomputation.
///
/// Multiplies out the `r` highest numerator terms and divides by `r!`
/// through a single modular inverse, after shrinking `r` to
/// `min(r, n - r)`. O(r) per call; the right tool when queries are few or
/// `n` is far too large for a factorial table.
pub fn ncr_direct(modular: &Modular, n: u64, r: u64) -> Result<u64, MathError> {
    if r > n {
        return Ok(0);
    }
    if r == 0 || r == n {
        return Ok(1);
    }
    let r = r.min(n - r);
    let mut ret = 1;
    for j in (n - r + 1)..=n {
        ret = modular.mul(ret, j);
    }
    let mut denominator = 1;
    for j in 1..=r {
        denominator = modular.mul(denominator, j);
    }
    let inv = modular.inverse(denominator)?;
    Ok(modular.mul(ret, inv))
}
