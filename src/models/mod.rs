//! Core data models for the compensation engine.
//!
//! This module contains the amount type, salary structure types and the
//! result returned to letter generators.

mod amount;
mod calculation_result;
mod salary;

pub use amount::{Amount, PAISE_PER_RUPEE};
pub use calculation_result::{AuditStep, AuditTrace, CompensationResult, FormattedLine};
pub use salary::{AllowanceRateTable, ComponentLine, SalaryComponents, SchemeId};
