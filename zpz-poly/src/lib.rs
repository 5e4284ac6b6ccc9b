#![deny(clippy::shadow_unrelated)]
//! Exact arithmetic on univariate polynomials over ℤ/pℤ.
//!
//! The modulus p may be composite. All coefficient arithmetic goes through
//! [`FieldTables`](math::field_tables::FieldTables), a set of lookup tables
//! built once per modulus and passed explicitly to every polynomial
//! operation.
//!
//! ```
//! # use zpz_poly::prelude::*;
//! let tables = FieldTables::build(5).unwrap();
//! let a = Polynomial::from_coefficients(&tables, &[0, 1, 3], 2).unwrap();
//! let b = Polynomial::from_coefficients(&tables, &[2, 1], 1).unwrap();
//!
//! let (quotient, remainder) = a.divide(&tables, &b).unwrap();
//! let recomposed = quotient.multiply(&tables, &b).add(&tables, &remainder);
//! assert_eq!(a, recomposed);
//! ```

pub mod config;
pub mod error;
pub mod math;
pub mod prelude;

#[cfg(test)]
pub(crate) mod test_shared;

/// The largest supported modulus.
pub const P_MAX: u32 = 100;

/// The largest degree accepted for polynomials built from raw coefficients.
pub const N_MAX: usize = 1000;
