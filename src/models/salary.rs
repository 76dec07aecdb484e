//! Salary structure models.
//!
//! This module defines the ratio schemes, the caller-supplied allowance rate
//! table and the monthly [`SalaryComponents`] break-down produced from an
//! annual CTC.

use serde::{Deserialize, Serialize};

use super::Amount;

/// The ratio scheme used to break an annual CTC into monthly components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemeId {
    /// Basic, HRA and rate-table allowances. Used for appointment letters.
    WithHra,
    /// Basic, DA and conveyance with no HRA. Used for appraisal letters.
    WithoutHra,
}

impl SchemeId {
    /// Returns the snake_case identifier of the scheme.
    pub fn as_str(self) -> &'static str {
        match self {
            SchemeId::WithHra => "with_hra",
            SchemeId::WithoutHra => "without_hra",
        }
    }

    /// Returns the kind of letter this scheme is used for.
    pub fn letter_kind(self) -> &'static str {
        match self {
            SchemeId::WithHra => "appointment",
            SchemeId::WithoutHra => "appraisal",
        }
    }
}

/// Fixed monthly allowances for the HRA scheme.
///
/// The values are supplied by the caller (or loaded from a dated rate file)
/// and are paid before the special allowance absorbs the remainder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllowanceRateTable {
    /// Children's education allowance per month.
    pub education: Amount,
    /// Leave travel allowance per month.
    pub leave_travel: Amount,
    /// Statutory bonus per month.
    pub statutory_bonus: Amount,
    /// Medical and other reimbursements per month.
    pub reimbursement: Amount,
}

impl AllowanceRateTable {
    /// The standard appointment-letter rates: ₹200, ₹1,250, ₹583 and ₹1,250.
    pub const fn standard() -> Self {
        Self {
            education: Amount::from_paise(20_000),
            leave_travel: Amount::from_paise(125_000),
            statutory_bonus: Amount::from_paise(58_300),
            reimbursement: Amount::from_paise(125_000),
        }
    }

    /// A table with every allowance set to zero.
    pub const fn zero() -> Self {
        Self {
            education: Amount::ZERO,
            leave_travel: Amount::ZERO,
            statutory_bonus: Amount::ZERO,
            reimbursement: Amount::ZERO,
        }
    }
}

impl Default for AllowanceRateTable {
    fn default() -> Self {
        Self::standard()
    }
}

/// A single labelled row of a salary break-down.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentLine {
    /// Display label of the component (e.g., "Basic Salary").
    pub label: String,
    /// Monthly value of the component.
    pub monthly: Amount,
    /// Annual value of the component (monthly x 12).
    pub annual: Amount,
}

/// The monthly salary break-down of an annual CTC.
///
/// Every monthly component is a whole-rupee amount. Components that do not
/// belong to the scheme are zero. The special allowance is always the
/// remainder, so the components sum to `total_monthly` exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryComponents {
    /// The scheme that produced this break-down.
    pub scheme: SchemeId,
    /// The annual cost to company.
    pub annual_ctc: Amount,
    /// Basic salary.
    pub basic_monthly: Amount,
    /// Dearness allowance.
    pub da_monthly: Amount,
    /// House rent allowance.
    pub hra_monthly: Amount,
    /// Conveyance allowance.
    pub conveyance_monthly: Amount,
    /// Medical allowance.
    pub medical_monthly: Amount,
    /// Education allowance.
    pub education_monthly: Amount,
    /// Leave travel allowance.
    pub leave_travel_monthly: Amount,
    /// Statutory bonus.
    pub statutory_bonus_monthly: Amount,
    /// Reimbursements.
    pub reimbursement_monthly: Amount,
    /// Special allowance, the remainder bucket.
    pub special_monthly: Amount,
    /// Monthly gross total, the annual CTC divided by 12 rounded to the rupee.
    pub total_monthly: Amount,
}

impl SalaryComponents {
    /// A break-down with every component zero.
    pub fn zero(scheme: SchemeId) -> Self {
        Self {
            scheme,
            annual_ctc: Amount::ZERO,
            basic_monthly: Amount::ZERO,
            da_monthly: Amount::ZERO,
            hra_monthly: Amount::ZERO,
            conveyance_monthly: Amount::ZERO,
            medical_monthly: Amount::ZERO,
            education_monthly: Amount::ZERO,
            leave_travel_monthly: Amount::ZERO,
            statutory_bonus_monthly: Amount::ZERO,
            reimbursement_monthly: Amount::ZERO,
            special_monthly: Amount::ZERO,
            total_monthly: Amount::ZERO,
        }
    }

    /// Returns the sum of every monthly component, excluding the total.
    pub fn component_sum(&self) -> Amount {
        Amount::from_paise(
            self.all_components()
                .iter()
                .map(|(_, amount)| amount.paise())
                .sum(),
        )
    }

    /// Returns the rows that belong to this break-down's scheme, in letter order.
    pub fn lines(&self) -> Vec<ComponentLine> {
        self.all_components()
            .into_iter()
            .filter(|(label, _)| scheme_labels(self.scheme).contains(label))
            .map(|(label, monthly)| ComponentLine {
                label: label.to_string(),
                monthly,
                annual: Amount::from_paise(monthly.paise().saturating_mul(12)),
            })
            .collect()
    }

    fn all_components(&self) -> [(&'static str, Amount); 10] {
        [
            (BASIC, self.basic_monthly),
            (DA, self.da_monthly),
            (HRA, self.hra_monthly),
            (CONVEYANCE, self.conveyance_monthly),
            (MEDICAL, self.medical_monthly),
            (EDUCATION, self.education_monthly),
            (LEAVE_TRAVEL, self.leave_travel_monthly),
            (STATUTORY_BONUS, self.statutory_bonus_monthly),
            (REIMBURSEMENT, self.reimbursement_monthly),
            (SPECIAL, self.special_monthly),
        ]
    }
}

const BASIC: &str = "Basic Salary";
const DA: &str = "Dearness Allowance";
const HRA: &str = "House Rent Allowance";
const CONVEYANCE: &str = "Conveyance Allowance";
const MEDICAL: &str = "Medical Allowance";
const EDUCATION: &str = "Education Allowance";
const LEAVE_TRAVEL: &str = "Leave Travel Allowance";
const STATUTORY_BONUS: &str = "Statutory Bonus";
const REIMBURSEMENT: &str = "Reimbursement";
const SPECIAL: &str = "Special Allowance";

fn scheme_labels(scheme: SchemeId) -> &'static [&'static str] {
    match scheme {
        SchemeId::WithoutHra => &[BASIC, DA, CONVEYANCE, SPECIAL],
        SchemeId::WithHra => &[
            BASIC,
            HRA,
            EDUCATION,
            LEAVE_TRAVEL,
            STATUTORY_BONUS,
            REIMBURSEMENT,
            SPECIAL,
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rupees(value: u64) -> Amount {
        Amount::from_whole_rupees(value).unwrap()
    }

    #[test]
    fn test_scheme_serializes_as_snake_case() {
        assert_eq!(
            serde_json::to_string(&SchemeId::WithHra).unwrap(),
            "\"with_hra\""
        );
        let scheme: SchemeId = serde_json::from_str("\"without_hra\"").unwrap();
        assert_eq!(scheme, SchemeId::WithoutHra);
        assert_eq!(scheme.as_str(), "without_hra");
    }

    #[test]
    fn test_scheme_letter_kind() {
        assert_eq!(SchemeId::WithHra.letter_kind(), "appointment");
        assert_eq!(SchemeId::WithoutHra.letter_kind(), "appraisal");
    }

    #[test]
    fn test_standard_rate_table() {
        let table = AllowanceRateTable::default();
        assert_eq!(table.education, rupees(200));
        assert_eq!(table.leave_travel, rupees(1250));
        assert_eq!(table.statutory_bonus, rupees(583));
        assert_eq!(table.reimbursement, rupees(1250));
    }

    #[test]
    fn test_rate_table_deserializes_from_yaml() {
        let yaml = "education: 100\nleave_travel: 1000.50\nstatutory_bonus: 0\nreimbursement: 1250\n";
        let table: AllowanceRateTable = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(table.leave_travel.paise(), 100_050);
        assert_eq!(table.statutory_bonus, Amount::ZERO);
    }

    #[test]
    fn test_component_sum_excludes_total() {
        let mut components = SalaryComponents::zero(SchemeId::WithoutHra);
        components.basic_monthly = rupees(100);
        components.special_monthly = rupees(50);
        components.total_monthly = rupees(150);
        assert_eq!(components.component_sum(), rupees(150));
    }

    #[test]
    fn test_lines_follow_scheme() {
        let without_hra = SalaryComponents::zero(SchemeId::WithoutHra);
        let labels: Vec<String> = without_hra.lines().into_iter().map(|l| l.label).collect();
        assert_eq!(
            labels,
            vec![
                "Basic Salary",
                "Dearness Allowance",
                "Conveyance Allowance",
                "Special Allowance"
            ]
        );

        let with_hra = SalaryComponents::zero(SchemeId::WithHra);
        let labels: Vec<String> = with_hra.lines().into_iter().map(|l| l.label).collect();
        assert!(labels.contains(&"House Rent Allowance".to_string()));
        assert!(!labels.contains(&"Dearness Allowance".to_string()));
    }

    #[test]
    fn test_line_annual_is_twelve_months() {
        let mut components = SalaryComponents::zero(SchemeId::WithoutHra);
        components.basic_monthly = rupees(26667);
        let basic = &components.lines()[0];
        assert_eq!(basic.annual, rupees(320_004));
    }
}
