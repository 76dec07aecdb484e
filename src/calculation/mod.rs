//! Salary structuring for the compensation engine.
//!
//! This module turns an annual CTC into a monthly break-down under one of
//! the two ratio schemes, using integer paise arithmetic and whole-rupee
//! rounding throughout.

mod rounding;
mod salary_structure;

pub use rounding::MONTHS_PER_YEAR;
pub use salary_structure::{
    BASIC_PERCENT, CONVEYANCE_ANNUAL, DA_PERCENT, HRA_PERCENT_OF_BASIC, MEDICAL_ANNUAL,
    RUPEES_PER_LAKH, SalaryStructureResult, annual_ctc_from_lakhs, calculate_salary_components,
    structure, structure_with_audit,
};
