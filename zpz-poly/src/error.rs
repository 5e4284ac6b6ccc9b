use thiserror::Error;

use crate::N_MAX;
use crate::P_MAX;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Error)]
#[non_exhaustive]
pub enum FieldTablesError {
    #[error("modulus {0} is outside of the supported range [2, {P_MAX}]")]
    InvalidModulus(u32),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Error)]
#[non_exhaustive]
pub enum PolynomialError {
    #[error("degree {0} is greater than the maximum ({N_MAX})")]
    DegreeTooLarge(i64),

    #[error("degree requires {expected} coefficients, but got {actual}")]
    MissingCoefficients { expected: usize, actual: usize },
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Error)]
#[non_exhaustive]
pub enum DivisionError {
    #[error("division by the zero polynomial")]
    DivisionByZero,

    #[error("divisor degree {divisor} is bigger than dividend degree {dividend}")]
    DegreeMismatch { dividend: isize, divisor: isize },

    #[error("leading coefficient {0} of the divisor is not invertible")]
    NonInvertibleLeadingCoefficient(u32),
}
