use proptest::collection::vec;
use proptest::prelude::*;

use crate::math::polynomial::Polynomial;

/// Polynomials over ℤ/pℤ of degree at most `max_degree`, the zero polynomial
/// included.
pub(crate) fn arb_polynomial(modulus: u32, max_degree: usize) -> BoxedStrategy<Polynomial> {
    vec(0..modulus, 0..=max_degree + 1)
        .prop_map(Polynomial::from_reduced)
        .boxed()
}
