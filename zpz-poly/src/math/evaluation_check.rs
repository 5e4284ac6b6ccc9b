//! Verification of polynomial arithmetic by evaluation.
//!
//! Evaluation in a point z is a ring homomorphism from polynomials over ℤ/pℤ
//! to ℤ/pℤ. Hence, for example, `(a + b)(z)` must equal `a(z) + b(z)` for
//! every z. Checking this on all of ℤ/pℤ compares every polynomial operation
//! against the elementwise [arithmetic tables](FieldTables).

use rayon::prelude::*;
use serde::Serialize;

use crate::config;
use crate::error::DivisionError;
use crate::math::field_tables::FieldTables;
use crate::math::polynomial::Polynomial;

/// The results of applying every arithmetic operation to one pair of
/// polynomials `a`, `b`, and one scalar `m`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArithmeticResults {
    pub a: Polynomial,
    pub b: Polynomial,

    /// Reduced modulo p.
    pub m: u32,

    pub sum: Polynomial,
    pub difference: Polynomial,
    pub scaled: Polynomial,
    pub product: Polynomial,

    /// Quotient and remainder of `a / b`.
    pub division: Result<(Polynomial, Polynomial), DivisionError>,
}

/// An expected value, computed from the arithmetic tables, and the value
/// observed by evaluating a result polynomial.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Comparison {
    pub expected: u32,
    pub observed: u32,
}

impl Comparison {
    pub fn holds(&self) -> bool {
        self.expected == self.observed
    }
}

/// All comparisons in one point `z`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct EvaluationCheck {
    pub z: u32,
    pub a_z: u32,
    pub b_z: u32,
    pub sum: Comparison,
    pub difference: Comparison,
    pub scaled: Comparison,
    pub product: Comparison,

    /// `a(z)` against `q(z)·b(z) + r(z)`. `None` if the division failed.
    pub division: Option<Comparison>,
}

impl EvaluationCheck {
    pub fn all_hold(&self) -> bool {
        [self.sum, self.difference, self.scaled, self.product]
            .iter()
            .chain(&self.division)
            .all(Comparison::holds)
    }
}

impl ArithmeticResults {
    pub fn compute(tables: &FieldTables, a: &Polynomial, b: &Polynomial, m: i64) -> Self {
        let m = tables.reduce(m);
        let division = a.divide(tables, b);
        if let Err(err) = &division {
            log::debug!("division of {a} by {b} is not defined: {err}");
        }

        Self {
            a: a.clone(),
            b: b.clone(),
            m,
            sum: a.add(tables, b),
            difference: a.subtract(tables, b),
            scaled: a.scale(tables, i64::from(m)),
            product: a.multiply(tables, b),
            division,
        }
    }

    /// One [`EvaluationCheck`] for every element of ℤ/pℤ, in increasing
    /// order of the evaluation point.
    pub fn check_by_evaluation(&self, tables: &FieldTables) -> Vec<EvaluationCheck> {
        tables.elements().map(|z| self.check_at(tables, z)).collect()
    }

    /// Parallel version of [`check_by_evaluation`](Self::check_by_evaluation).
    pub fn par_check_by_evaluation(&self, tables: &FieldTables) -> Vec<EvaluationCheck> {
        if (tables.modulus() as usize) < config::parallel_evaluation_cutoff() {
            return self.check_by_evaluation(tables);
        }

        tables
            .elements()
            .into_par_iter()
            .map(|z| self.check_at(tables, z))
            .collect()
    }

    /// Whether `a - (q·b + r)` is the zero polynomial. `None` if the division
    /// failed.
    pub fn division_round_trip_holds(&self, tables: &FieldTables) -> Option<bool> {
        let (quotient, remainder) = self.division.as_ref().ok()?;
        let recomposed = quotient.multiply(tables, &self.b).add(tables, remainder);
        Some(self.a.subtract(tables, &recomposed).is_zero())
    }

    fn check_at(&self, tables: &FieldTables, z: u32) -> EvaluationCheck {
        let evaluate = |polynomial: &Polynomial| polynomial.evaluate(tables, i64::from(z));
        let a_z = evaluate(&self.a);
        let b_z = evaluate(&self.b);

        let compare = |expected, polynomial: &Polynomial| Comparison {
            expected,
            observed: evaluate(polynomial),
        };

        let division = self.division.as_ref().ok().map(|(quotient, remainder)| {
            let q_times_b = tables.product(evaluate(quotient), b_z);
            Comparison {
                expected: a_z,
                observed: tables.sum(q_times_b, evaluate(remainder)),
            }
        });

        EvaluationCheck {
            z,
            a_z,
            b_z,
            sum: compare(tables.sum(a_z, b_z), &self.sum),
            difference: compare(tables.difference(a_z, b_z), &self.difference),
            scaled: compare(tables.product(self.m, a_z), &self.scaled),
            product: compare(tables.product(a_z, b_z), &self.product),
            division,
        }
    }
}
