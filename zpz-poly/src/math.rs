pub mod evaluation_check;
pub mod field_tables;
pub mod other;
pub mod polynomial;
