// src/integer_math/factorization.rs

use log::debug;
use crate::core::error::MathError;

/// Per-index prime factor table over `2..=bound`, built with sieve-style
/// marking. Each prime pass overwrites the marks of earlier, smaller
/// primes, so the stored value is the largest prime factor of its index;
/// repeated division by it still peels a number down to 1, which is all
/// `factorize` needs. Index 0 and 1 keep a 0 sentinel.
pub struct FactorTable {
    factor: Vec<u64>,
}

impl FactorTable {
    /// # Time complexity
    ///
    /// *O*(N log log N)
    pub fn new(bound: u64) -> Self {
        let len = bound as usize + 1;
        let mut factor = vec![0u64; len.max(2)];
        for i in 2..len {
            if factor[i] == 0 {
                let mut j = i;
                while j < len {
                    factor[j] = i as u64;
                    j += i;
                }
            }
        }
        debug!("factor table built for 2..={}", bound);
        FactorTable { factor }
    }

    pub fn bound(&self) -> u64 {
        (self.factor.len() - 1) as u64
    }

    /// Prime factors of `n` with multiplicity, ascending.
    /// `factorize(1)` is empty.
    ///
    /// # Time complexity
    ///
    /// *O*(log n) per call.
    pub fn factorize(&self, n: u64) -> Result<Vec<u64>, MathError> {
        self.check_query(n)?;
        let mut factors = Vec::new();
        let mut n = n;
        while n > 1 {
            let p = self.factor[n as usize];
            factors.push(p);
            n /= p;
        }
        factors.reverse();
        Ok(factors)
    }

    /// Factorization of `n` grouped into ascending `(prime, exponent)`
    /// pairs.
    pub fn factor_pairs(&self, n: u64) -> Result<Vec<(u64, u32)>, MathError> {
        let factors = self.factorize(n)?;
        let mut pairs: Vec<(u64, u32)> = Vec::new();
        for p in factors {
            match pairs.last_mut() {
                Some(last) if last.0 == p => last.1 += 1,
                _ => pairs.push((p, 1)),
            }
        }
        Ok(pairs)
    }

    /// All positive divisors of `n`, in no particular order.
    ///
    /// Walks the factor-pair vector, branching at each pair: leave the
    /// running product alone, or fold the prime in 1..=exponent times.
    /// Exhausting the pairs records the product, so exactly
    /// prod(exponent + 1) divisors come out.
    ///
    /// # Examples
    ///
    /// ```
    /// use contest_math::integer_math::factorization::FactorTable;
    ///
    /// let table = FactorTable::new(100);
    /// let mut divisors = table.divisors(12).unwrap();
    /// divisors.sort_unstable();
    /// assert_eq!(divisors, vec![1, 2, 3, 4, 6, 12]);
    /// ```
    pub fn divisors(&self, n: u64) -> Result<Vec<u64>, MathError> {
        let pairs = self.factor_pairs(n)?;
        let mut divisors = Vec::new();
        Self::push_divisors(1, &pairs, &mut divisors);
        Ok(divisors)
    }

    fn push_divisors(product: u64, pairs: &[(u64, u32)], out: &mut Vec<u64>) {
        match pairs.split_first() {
            None => out.push(product),
            Some((&(p, e), rest)) => {
                Self::push_divisors(product, rest, out);
                let mut value = product;
                for _ in 0..e {
                    value *= p;
                    Self::push_divisors(value, rest, out);
                }
            }
        }
    }

    fn check_query(&self, n: u64) -> Result<(), MathError> {
        if n == 0 {
            return Err(MathError::InvalidInput(
                "cannot factorize 0".to_string(),
            ));
        }
        if n >= self.factor.len() as u64 {
            return Err(MathError::OutOfRange {
                value: n,
                bound: self.bound(),
            });
        }
        Ok(())
    }
}
