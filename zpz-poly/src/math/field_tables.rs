use std::ops::Range;

use itertools::Itertools;
use serde::Deserialize;
use serde::Serialize;

use crate::P_MAX;
use crate::error::FieldTablesError;

/// Precomputed arithmetic of ℤ/pℤ for one modulus `p`.
///
/// All six operations are answered by a single lookup. The modulus may be
/// composite, in which case some non-zero elements have no multiplicative
/// inverse; [`inverse`](Self::inverse) and [`quotient`](Self::quotient)
/// report this as `None`.
///
/// Elements are represented by their canonical representative in `[0, p)`.
/// Passing anything outside that range to a lookup is a bug in the caller.
///
/// Serializes as the bare modulus. Deserializing rebuilds the tables, so
/// tables are never taken on trust from the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct FieldTables {
    modulus: u32,

    /// Row-major, `sum[a·p + b] = a + b`.
    sum: Vec<u32>,
    product: Vec<u32>,
    negate: Vec<u32>,
    inverse: Vec<Option<u32>>,
    difference: Vec<u32>,
    quotient: Vec<Option<u32>>,
}

impl FieldTables {
    pub const MIN_MODULUS: u32 = 2;

    /// Compute all arithmetic tables of ℤ/pℤ.
    ///
    /// # Errors
    ///
    /// Returns [`FieldTablesError::InvalidModulus`] if `modulus` is not in
    /// `[2, P_MAX]`.
    pub fn build(modulus: u32) -> Result<Self, FieldTablesError> {
        if !(Self::MIN_MODULUS..=P_MAX).contains(&modulus) {
            return Err(FieldTablesError::InvalidModulus(modulus));
        }

        let p = modulus;
        let index = |a: u32, b: u32| (a * p + b) as usize;
        let pairs = || (0..p).cartesian_product(0..p);

        let sum = pairs().map(|(a, b)| (a + b) % p).collect_vec();
        let product = pairs().map(|(a, b)| (a * b) % p).collect_vec();
        let negate = (0..p).map(|a| (p - a) % p).collect_vec();
        let inverse = (0..p).map(|a| modular_inverse(a, p)).collect_vec();

        // derived from the tables above
        let difference = pairs()
            .map(|(a, b)| sum[index(a, negate[b as usize])])
            .collect_vec();
        let quotient = pairs()
            .map(|(a, b)| inverse[b as usize].map(|b_inv| product[index(a, b_inv)]))
            .collect_vec();

        let num_units = inverse.iter().flatten().count();
        log::debug!("built arithmetic tables for Z/{p}Z; {num_units} elements are invertible");

        Ok(Self {
            modulus,
            sum,
            product,
            negate,
            inverse,
            difference,
            quotient,
        })
    }

    pub fn modulus(&self) -> u32 {
        self.modulus
    }

    /// All elements of ℤ/pℤ, in increasing order.
    pub fn elements(&self) -> Range<u32> {
        0..self.modulus
    }

    /// Whether ℤ/pℤ is a field, _i.e._, whether every non-zero element is
    /// invertible. Holds if and only if the modulus is prime.
    pub fn is_field(&self) -> bool {
        self.inverse.iter().skip(1).all(Option::is_some)
    }

    /// The canonical representative of `z mod p`, always in `[0, p)`, also
    /// for negative `z`.
    pub fn reduce(&self, z: i64) -> u32 {
        // the result is smaller than the modulus, which fits into a `u32`
        z.rem_euclid(i64::from(self.modulus)) as u32
    }

    /// # Panics
    ///
    /// Panics if `a` or `b` are not smaller than the modulus. Applies to all
    /// lookups.
    pub fn sum(&self, a: u32, b: u32) -> u32 {
        self.sum[self.pair_index(a, b)]
    }

    pub fn product(&self, a: u32, b: u32) -> u32 {
        self.product[self.pair_index(a, b)]
    }

    pub fn negate(&self, a: u32) -> u32 {
        self.negate[self.element_index(a)]
    }

    /// The unique `b` with `a·b = 1`, or `None` if `a` is not a unit, which is
    /// always the case for `a = 0`.
    pub fn inverse(&self, a: u32) -> Option<u32> {
        self.inverse[self.element_index(a)]
    }

    pub fn is_invertible(&self, a: u32) -> bool {
        self.inverse(a).is_some()
    }

    pub fn difference(&self, a: u32, b: u32) -> u32 {
        self.difference[self.pair_index(a, b)]
    }

    /// `a · b⁻¹`, or `None` if `b` has no [inverse](Self::inverse).
    pub fn quotient(&self, a: u32, b: u32) -> Option<u32> {
        self.quotient[self.pair_index(a, b)]
    }

    fn element_index(&self, a: u32) -> usize {
        assert!(
            a < self.modulus,
            "element {a} must be smaller than the modulus {}",
            self.modulus
        );
        a as usize
    }

    fn pair_index(&self, a: u32, b: u32) -> usize {
        let row = self.element_index(a);
        let column = self.element_index(b);
        row * self.modulus as usize + column
    }
}

impl TryFrom<u32> for FieldTables {
    type Error = FieldTablesError;

    fn try_from(modulus: u32) -> Result<Self, Self::Error> {
        Self::build(modulus)
    }
}

impl From<FieldTables> for u32 {
    fn from(tables: FieldTables) -> Self {
        tables.modulus
    }
}

/// Solve `a·x ≡ 1 (mod p)` using the extended Euclidean algorithm.
fn modular_inverse(a: u32, p: u32) -> Option<u32> {
    let (mut old_r, mut r) = (i64::from(a), i64::from(p));
    let (mut old_s, mut s) = (1_i64, 0_i64);
    while r != 0 {
        let q = old_r / r;
        (old_r, r) = (r, old_r - q * r);
        (old_s, s) = (s, old_s - q * s);
    }

    // `old_r` is gcd(a, p)
    (old_r == 1).then(|| old_s.rem_euclid(i64::from(p)) as u32)
}
