use std::fmt::Display;
use std::fmt::Formatter;
use std::thread::available_parallelism;

use itertools::EitherOrBoth;
use itertools::Itertools;
use rayon::prelude::*;
use serde::Serialize;

use crate::N_MAX;
use crate::config;
use crate::error::DivisionError;
use crate::error::PolynomialError;
use crate::math::field_tables::FieldTables;

/// A univariate polynomial with coefficients in ℤ/pℤ, in monomial form.
///
/// The polynomial does not know its modulus. Every operation takes the
/// [`FieldTables`] of the modulus explicitly, and all coefficient arithmetic
/// is routed through those tables. Mixing polynomials built for different
/// moduli is a bug in the caller.
///
/// Every `Polynomial` is normalized: its leading coefficient is non-zero. The
/// zero polynomial has no coefficients and [degree](Self::degree) -1.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Polynomial {
    /// The polynomial's coefficients, in order of increasing degree. That is, the polynomial's
    /// leading coefficient is the last element of the vector.
    coefficients: Vec<u32>,
}

impl Display for Polynomial {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        let degree = match self.degree() {
            -1 => return write!(f, "0"),
            d => d as usize,
        };

        for pow in (0..=degree).rev() {
            let coeff = self.coefficients[pow];
            if coeff == 0 {
                continue;
            }

            if pow != degree {
                write!(f, " + ")?;
            }
            if coeff != 1 || pow == 0 {
                write!(f, "{coeff}")?;
            }
            match pow {
                0 => (),
                1 => write!(f, "x")?,
                _ => write!(f, "x^{pow}")?,
            }
        }

        Ok(())
    }
}

impl Polynomial {
    pub const fn zero() -> Self {
        Self {
            coefficients: vec![],
        }
    }

    /// Build a polynomial from raw, not necessarily reduced integers, as
    /// parsed from `degree: c_0 c_1 … c_degree`.
    ///
    /// Every coefficient is [reduced](FieldTables::reduce) modulo p and the
    /// result is [normalized](Self::normalize). A negative `degree` denotes
    /// the zero polynomial. Coefficients beyond `degree` are ignored.
    ///
    /// # Errors
    ///
    /// - [`PolynomialError::DegreeTooLarge`] if `degree` exceeds [`N_MAX`].
    /// - [`PolynomialError::MissingCoefficients`] if fewer than `degree + 1`
    ///   coefficients are given.
    pub fn from_coefficients(
        tables: &FieldTables,
        coefficients: &[i64],
        degree: i64,
    ) -> Result<Self, PolynomialError> {
        if degree > N_MAX as i64 {
            return Err(PolynomialError::DegreeTooLarge(degree));
        }
        let Ok(degree) = usize::try_from(degree) else {
            return Ok(Self::zero());
        };

        let num_coefficients = degree + 1;
        if coefficients.len() < num_coefficients {
            return Err(PolynomialError::MissingCoefficients {
                expected: num_coefficients,
                actual: coefficients.len(),
            });
        }

        let reduced = coefficients[..num_coefficients]
            .iter()
            .map(|&c| tables.reduce(c))
            .collect();
        Ok(Self::from_reduced(reduced))
    }

    pub fn from_constant(tables: &FieldTables, constant: i64) -> Self {
        Self::from_reduced(vec![tables.reduce(constant)])
    }

    /// Coefficients must already lie in `[0, p)`.
    pub(crate) fn from_reduced(coefficients: Vec<u32>) -> Self {
        let mut polynomial = Self { coefficients };
        polynomial.normalize();
        polynomial
    }

    /// `coefficient · x^power`, with the coefficient
    /// [reduced](FieldTables::reduce) modulo p.
    pub fn monomial(tables: &FieldTables, coefficient: i64, power: usize) -> Self {
        let mut coefficients = vec![0; power];
        coefficients.push(tables.reduce(coefficient));
        Self::from_reduced(coefficients)
    }

    /// Strip leading zero coefficients. A polynomial all of whose
    /// coefficients are zero becomes the zero polynomial of degree -1.
    pub fn normalize(&mut self) {
        while self.coefficients.last().is_some_and(|&c| c == 0) {
            self.coefficients.pop();
        }
    }

    /// -1 for the zero polynomial.
    pub fn degree(&self) -> isize {
        self.coefficients.len() as isize - 1
    }

    /// The coefficients `c_0, …, c_degree`. Empty for the zero polynomial.
    pub fn coefficients(&self) -> &[u32] {
        &self.coefficients
    }

    /// The coefficient of the polynomial's term of highest power. `None` if (and only if) `self`
    /// [is zero](Self::is_zero).
    ///
    /// Furthermore, is never `Some(0)`.
    pub fn leading_coefficient(&self) -> Option<u32> {
        self.coefficients.last().copied()
    }

    pub fn is_zero(&self) -> bool {
        self.coefficients.is_empty()
    }

    /// Evaluate the polynomial in `z` using Horner's rule. The point `z` is
    /// [reduced](FieldTables::reduce) modulo p first.
    pub fn evaluate(&self, tables: &FieldTables, z: i64) -> u32 {
        let z = tables.reduce(z);
        let mut coefficients = self.coefficients.iter().rev();
        let Some(&leading_coefficient) = coefficients.next() else {
            return 0;
        };

        coefficients.fold(leading_coefficient, |acc, &c| {
            tables.sum(c, tables.product(z, acc))
        })
    }

    /// Evaluate the polynomial on a batch of points.
    pub fn batch_evaluate(&self, tables: &FieldTables, domain: &[i64]) -> Vec<u32> {
        domain.iter().map(|&z| self.evaluate(tables, z)).collect()
    }

    /// Parallel version of [`batch_evaluate`](Self::batch_evaluate).
    ///
    /// Domains smaller than the
    /// [configured cutoff](crate::config::set_parallel_evaluation_cutoff)
    /// are evaluated sequentially.
    pub fn par_batch_evaluate(&self, tables: &FieldTables, domain: &[i64]) -> Vec<u32> {
        if domain.len() < config::parallel_evaluation_cutoff() {
            return self.batch_evaluate(tables, domain);
        }

        let num_threads = available_parallelism()
            .map(|non_zero_usize| non_zero_usize.get())
            .unwrap_or(1);
        let chunk_size = domain.len().div_ceil(num_threads);
        domain
            .par_chunks(chunk_size)
            .flat_map(|chunk| self.batch_evaluate(tables, chunk))
            .collect()
    }

    #[must_use]
    pub fn add(&self, tables: &FieldTables, other: &Self) -> Self {
        let summed = self
            .coefficients
            .iter()
            .zip_longest(&other.coefficients)
            .map(|pair| match pair {
                EitherOrBoth::Both(&l, &r) => tables.sum(l, r),
                EitherOrBoth::Left(&l) => l,
                EitherOrBoth::Right(&r) => r,
            })
            .collect();

        // leading coefficients might have cancelled
        Self::from_reduced(summed)
    }

    /// The additive inverse. Has the same degree as `self`.
    #[must_use]
    pub fn negate(&self, tables: &FieldTables) -> Self {
        let coefficients = self
            .coefficients
            .iter()
            .map(|&c| tables.negate(c))
            .collect();

        Self { coefficients }
    }

    #[must_use]
    pub fn subtract(&self, tables: &FieldTables, other: &Self) -> Self {
        self.add(tables, &other.negate(tables))
    }

    /// Multiply the polynomial with a scalar, _i.e._, compute `m · self(x)`.
    /// The scalar is [reduced](FieldTables::reduce) modulo p first.
    ///
    /// For composite moduli, the degree drops if `m` is a zero divisor
    /// annihilating the leading coefficient.
    #[must_use]
    pub fn scale(&self, tables: &FieldTables, m: i64) -> Self {
        let m = tables.reduce(m);
        let coefficients = self
            .coefficients
            .iter()
            .map(|&c| tables.product(m, c))
            .collect();

        Self::from_reduced(coefficients)
    }

    /// Schoolbook multiplication. The degree of the product is smaller than
    /// the sum of the operands' degrees if the product of their leading
    /// coefficients is zero, which can happen for composite moduli.
    #[must_use]
    pub fn multiply(&self, tables: &FieldTables, other: &Self) -> Self {
        let Ok(degree_lhs) = usize::try_from(self.degree()) else {
            return Self::zero();
        };
        let Ok(degree_rhs) = usize::try_from(other.degree()) else {
            return Self::zero();
        };

        let mut product = vec![0; degree_lhs + degree_rhs + 1];
        for (i, &lhs) in self.coefficients.iter().enumerate() {
            for (j, &rhs) in other.coefficients.iter().enumerate() {
                product[i + j] = tables.sum(product[i + j], tables.product(lhs, rhs));
            }
        }

        Self::from_reduced(product)
    }

    /// Euclidean division. Return (quotient, remainder) such that
    /// `self = quotient · divisor + remainder` and the degree of the remainder
    /// is smaller than the degree of the divisor.
    ///
    /// # Errors
    ///
    /// In order of precedence:
    /// - [`DivisionError::DivisionByZero`] if `divisor` is zero.
    /// - [`DivisionError::DegreeMismatch`] if the degree of `divisor` exceeds
    ///   the degree of `self`.
    /// - [`DivisionError::NonInvertibleLeadingCoefficient`] if the leading
    ///   coefficient of `divisor` is not a unit modulo p.
    pub fn divide(
        &self,
        tables: &FieldTables,
        divisor: &Self,
    ) -> Result<(Self, Self), DivisionError> {
        let Some(divisor_lc) = divisor.leading_coefficient() else {
            log::debug!("rejecting division of {self} by the zero polynomial");
            return Err(DivisionError::DivisionByZero);
        };

        if divisor.degree() > self.degree() {
            log::debug!("rejecting division of {self} by {divisor} of higher degree");
            return Err(DivisionError::DegreeMismatch {
                dividend: self.degree(),
                divisor: divisor.degree(),
            });
        }

        let non_invertible = DivisionError::NonInvertibleLeadingCoefficient(divisor_lc);
        if !tables.is_invertible(divisor_lc) {
            log::debug!(
                "rejecting division by {divisor}: leading coefficient {divisor_lc} is not \
                invertible modulo {}",
                tables.modulus()
            );
            return Err(non_invertible);
        }

        // both are non-zero, the dividend is of at least the divisor's degree
        let divisor_degree = divisor.coefficients.len() - 1;
        let quotient_degree = self.coefficients.len() - divisor.coefficients.len();

        let mut quotient = vec![0; quotient_degree + 1];
        let mut remainder = self.coefficients.clone();
        for i in (0..=quotient_degree).rev() {
            let quotient_coefficient = tables
                .quotient(remainder[i + divisor_degree], divisor_lc)
                .ok_or(non_invertible)?;
            quotient[i] = quotient_coefficient;

            // subtract `quotient_coefficient · x^i · divisor` in place
            for (j, &d) in divisor.coefficients.iter().enumerate() {
                let subtrahend = tables.product(quotient_coefficient, d);
                remainder[i + j] = tables.difference(remainder[i + j], subtrahend);
            }
            log::trace!("long division step {i}: quotient coefficient {quotient_coefficient}");
        }

        // every coefficient from `divisor_degree` upwards has been cancelled
        let remainder = Self::from_reduced(remainder);
        Ok((Self::from_reduced(quotient), remainder))
    }
}
