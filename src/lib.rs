//! Compensation engine for Indian HR letters
//!
//! This crate spells amounts out in Indian-English words using the lakh and
//! crore grouping, reads such phrases back, breaks an annual cost to company
//! into monthly salary components, and formats amounts for letter tables.
//!
//! The four operations letter templates call are re-exported at the root:
//!
//! ```
//! use compensation_engine::{
//!     calculate_salary_components, format_indian_currency, number_to_words, words_to_number,
//! };
//! use compensation_engine::models::SchemeId;
//! use rust_decimal::Decimal;
//!
//! assert_eq!(number_to_words(800_000).unwrap(), "Eight Lakh");
//! assert_eq!(words_to_number("Eight Lakh").unwrap(), Decimal::from(800_000));
//!
//! let components = calculate_salary_components(Decimal::from(8), SchemeId::WithoutHra).unwrap();
//! assert_eq!(
//!     format_indian_currency(components.total_monthly.to_rupees()).unwrap(),
//!     "₹66,667"
//! );
//! ```

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod formatting;
pub mod models;
pub mod numerals;

pub use calculation::calculate_salary_components;
pub use formatting::format_indian_currency;
pub use numerals::{number_to_words, words_to_number};
