pub use crate::N_MAX;
pub use crate::P_MAX;
pub use crate::error::DivisionError;
pub use crate::error::FieldTablesError;
pub use crate::error::PolynomialError;
pub use crate::math::evaluation_check::ArithmeticResults;
pub use crate::math::evaluation_check::Comparison;
pub use crate::math::evaluation_check::EvaluationCheck;
pub use crate::math::field_tables::FieldTables;
pub use crate::math::polynomial::Polynomial;
