use itertools::Itertools;
use rand::Rng;
use rand::seq::IndexedRandom;

use crate::math::field_tables::FieldTables;
use crate::math::polynomial::Polynomial;

/// Generate `n` random elements of ℤ/pℤ using [`rand::rng()`].
pub fn random_elements(tables: &FieldTables, n: usize) -> Vec<u32> {
    let mut rng = rand::rng();
    (0..n).map(|_| rng.random_range(tables.elements())).collect()
}

/// A random invertible element of ℤ/pℤ.
pub fn random_unit(tables: &FieldTables) -> u32 {
    let units = tables
        .elements()
        .filter(|&a| tables.is_invertible(a))
        .collect_vec();

    // 1 is always a unit
    units.choose(&mut rand::rng()).copied().unwrap_or(1)
}

/// A random polynomial of exactly the given degree. Its leading coefficient
/// is a [unit](random_unit), so the polynomial is a valid divisor.
pub fn random_polynomial(tables: &FieldTables, degree: usize) -> Polynomial {
    let mut coefficients = random_elements(tables, degree);
    coefficients.push(random_unit(tables));
    Polynomial::from_reduced(coefficients)
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use proptest::prelude::*;
    use test_strategy::proptest;

    use super::*;
    use crate::P_MAX;

    #[proptest(cases = 50)]
    fn random_polynomial_has_requested_degree_and_invertible_leading_coefficient(
        #[strategy(2..=P_MAX)] modulus: u32,
        #[strategy(0usize..50)] degree: usize,
    ) {
        let tables = FieldTables::build(modulus)?;
        let polynomial = random_polynomial(&tables, degree);
        prop_assert_eq!(degree as isize, polynomial.degree());

        let leading_coefficient = polynomial.leading_coefficient().unwrap();
        prop_assert!(tables.is_invertible(leading_coefficient));
    }

    #[proptest(cases = 50)]
    fn random_elements_are_reduced(#[strategy(2..=P_MAX)] modulus: u32) {
        let tables = FieldTables::build(modulus)?;
        let elements = random_elements(&tables, 100);
        prop_assert_eq!(100, elements.len());
        prop_assert!(elements.into_iter().all(|a| a < modulus));
    }
}
