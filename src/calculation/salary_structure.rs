//! Annual CTC to monthly salary structure.
//!
//! The monthly target is the annual CTC divided by twelve and rounded to the
//! rupee. Ratio and fixed components are each rounded to the rupee and taken
//! from that target in order; the special allowance is whatever is left, so
//! the components always add up to the target exactly.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{AllowanceRateTable, Amount, AuditStep, SalaryComponents, SchemeId};

use super::rounding::{monthly_share, percent_of, round_to_rupee};

/// Basic salary as a percentage of annual CTC.
pub const BASIC_PERCENT: u64 = 40;

/// Dearness allowance as a percentage of annual CTC.
pub const DA_PERCENT: u64 = 10;

/// House rent allowance as a percentage of monthly basic.
pub const HRA_PERCENT_OF_BASIC: u64 = 50;

/// Fixed annual conveyance allowance (₹19,200).
pub const CONVEYANCE_ANNUAL: Amount = Amount::from_paise(1_920_000);

/// Fixed annual medical allowance (₹15,000). The appraisal scheme folds it
/// into the special allowance.
pub const MEDICAL_ANNUAL: Amount = Amount::from_paise(1_500_000);

/// Rupees in one lakh, the unit callers quote CTC in.
pub const RUPEES_PER_LAKH: u64 = 100_000;

/// The result of structuring a CTC, including the audit steps.
#[derive(Debug, Clone)]
pub struct SalaryStructureResult {
    /// The monthly break-down.
    pub components: SalaryComponents,
    /// One audit step per derived component.
    pub audit_steps: Vec<AuditStep>,
}

/// Breaks an annual CTC into monthly components.
///
/// `rates` supplies the fixed monthly allowances of [`SchemeId::WithHra`];
/// it is ignored by [`SchemeId::WithoutHra`].
///
/// # Examples
///
/// ```
/// use compensation_engine::calculation::structure;
/// use compensation_engine::models::{AllowanceRateTable, Amount, SchemeId};
///
/// let annual = Amount::from_whole_rupees(800_000).unwrap();
/// let components = structure(annual, SchemeId::WithoutHra, &AllowanceRateTable::standard());
///
/// assert_eq!(components.basic_monthly.whole_rupees(), 26_667);
/// assert_eq!(components.special_monthly.whole_rupees(), 31_733);
/// assert_eq!(components.component_sum(), components.total_monthly);
/// ```
pub fn structure(
    annual_ctc: Amount,
    scheme: SchemeId,
    rates: &AllowanceRateTable,
) -> SalaryComponents {
    structure_with_audit(annual_ctc, scheme, rates, 1).components
}

/// Breaks an annual CTC into monthly components and records each decision.
///
/// Steps are numbered from `step_number`.
pub fn structure_with_audit(
    annual_ctc: Amount,
    scheme: SchemeId,
    rates: &AllowanceRateTable,
    step_number: u32,
) -> SalaryStructureResult {
    let mut recorder = Recorder::new(step_number);
    let target = monthly_share(annual_ctc, 100);

    recorder.push(
        "monthly_target",
        "Monthly Gross Target",
        "annual CTC / 12".to_string(),
        serde_json::json!({
            "annual_ctc": annual_ctc.to_string(),
            "scheme": scheme.as_str()
        }),
        serde_json::json!({ "total_monthly": target.to_string() }),
        format!("round({} / 12) = {}", annual_ctc, target),
    );

    let mut budget = Budget::new(target);
    let mut components = SalaryComponents::zero(scheme);
    components.annual_ctc = annual_ctc;
    components.total_monthly = target;

    components.basic_monthly = recorder.component(
        &mut budget,
        "basic_salary",
        "Basic Salary",
        format!("{}% of annual CTC / 12", BASIC_PERCENT),
        monthly_share(annual_ctc, BASIC_PERCENT),
    );

    match scheme {
        SchemeId::WithoutHra => {
            components.da_monthly = recorder.component(
                &mut budget,
                "dearness_allowance",
                "Dearness Allowance",
                format!("{}% of annual CTC / 12", DA_PERCENT),
                monthly_share(annual_ctc, DA_PERCENT),
            );
            components.conveyance_monthly = recorder.component(
                &mut budget,
                "conveyance_allowance",
                "Conveyance Allowance",
                format!("fixed {} per year / 12", CONVEYANCE_ANNUAL),
                monthly_share(CONVEYANCE_ANNUAL, 100),
            );
            recorder.push(
                "medical_allowance",
                "Medical Allowance",
                format!("fixed {} per year", MEDICAL_ANNUAL),
                serde_json::json!({ "annual": MEDICAL_ANNUAL.to_string() }),
                serde_json::json!({ "monthly": "0", "folded_into": "special_allowance" }),
                "Folded into the special allowance for this scheme".to_string(),
            );
        }
        SchemeId::WithHra => {
            let hra = percent_of(components.basic_monthly, HRA_PERCENT_OF_BASIC);
            components.hra_monthly = recorder.component(
                &mut budget,
                "house_rent_allowance",
                "House Rent Allowance",
                format!("{}% of monthly basic", HRA_PERCENT_OF_BASIC),
                hra,
            );

            let fixed = [
                ("education_allowance", "Education Allowance", rates.education),
                ("leave_travel_allowance", "Leave Travel Allowance", rates.leave_travel),
                ("statutory_bonus", "Statutory Bonus", rates.statutory_bonus),
                ("reimbursement", "Reimbursement", rates.reimbursement),
            ];
            let [education, leave_travel, statutory_bonus, reimbursement] =
                fixed.map(|(rule_id, rule_name, rate)| {
                    recorder.component(
                        &mut budget,
                        rule_id,
                        rule_name,
                        format!("fixed {} per month", rate),
                        round_to_rupee(rate),
                    )
                });
            components.education_monthly = education;
            components.leave_travel_monthly = leave_travel;
            components.statutory_bonus_monthly = statutory_bonus;
            components.reimbursement_monthly = reimbursement;
        }
    }

    let allocated = budget.allocated;
    components.special_monthly = budget.remainder();
    recorder.push(
        "special_allowance",
        "Special Allowance",
        "monthly target minus all other components".to_string(),
        serde_json::json!({
            "total_monthly": target.to_string(),
            "allocated": allocated.to_string()
        }),
        serde_json::json!({ "monthly": components.special_monthly.to_string() }),
        format!(
            "{} - {} = {}",
            target, allocated, components.special_monthly
        ),
    );

    SalaryStructureResult {
        components,
        audit_steps: recorder.steps,
    }
}

/// Converts a CTC quoted in lakhs of rupees into an amount.
///
/// # Errors
///
/// Returns `InvalidAmount` for negative values, values that leave more than
/// two fractional rupee digits, or values too large to hold.
pub fn annual_ctc_from_lakhs(annual_ctc_in_lakhs: Decimal) -> EngineResult<Amount> {
    if annual_ctc_in_lakhs < Decimal::ZERO {
        return Err(EngineError::invalid_amount(
            annual_ctc_in_lakhs,
            "annual CTC cannot be negative",
        ));
    }
    let rupees = annual_ctc_in_lakhs
        .checked_mul(Decimal::from(RUPEES_PER_LAKH))
        .ok_or_else(|| EngineError::invalid_amount(annual_ctc_in_lakhs, "annual CTC is too large"))?;
    Amount::from_rupees(rupees)
}

/// Breaks an annual CTC quoted in lakhs into monthly components using the
/// standard allowance rates.
///
/// # Examples
///
/// ```
/// use compensation_engine::calculation::calculate_salary_components;
/// use compensation_engine::models::SchemeId;
/// use rust_decimal::Decimal;
///
/// let components = calculate_salary_components(Decimal::from(8), SchemeId::WithoutHra).unwrap();
/// assert_eq!(components.total_monthly.whole_rupees(), 66_667);
/// ```
pub fn calculate_salary_components(
    annual_ctc_in_lakhs: Decimal,
    scheme: SchemeId,
) -> EngineResult<SalaryComponents> {
    let annual_ctc = annual_ctc_from_lakhs(annual_ctc_in_lakhs)?;
    Ok(structure(
        annual_ctc,
        scheme,
        &AllowanceRateTable::standard(),
    ))
}

/// Hands out the monthly target one component at a time.
#[derive(Debug)]
struct Budget {
    target: Amount,
    allocated: Amount,
}

impl Budget {
    fn new(target: Amount) -> Self {
        Self {
            target,
            allocated: Amount::ZERO,
        }
    }

    /// Grants as much of `wanted` as the remaining headroom allows.
    fn take(&mut self, wanted: Amount) -> Amount {
        let headroom = self.target.paise() - self.allocated.paise();
        let granted = Amount::from_paise(wanted.paise().min(headroom));
        self.allocated = Amount::from_paise(self.allocated.paise() + granted.paise());
        granted
    }

    fn remainder(self) -> Amount {
        Amount::from_paise(self.target.paise() - self.allocated.paise())
    }
}

struct Recorder {
    next_step: u32,
    steps: Vec<AuditStep>,
}

impl Recorder {
    fn new(step_number: u32) -> Self {
        Self {
            next_step: step_number,
            steps: Vec::new(),
        }
    }

    fn push(
        &mut self,
        rule_id: &str,
        rule_name: &str,
        basis: String,
        input: serde_json::Value,
        output: serde_json::Value,
        reasoning: String,
    ) {
        self.steps.push(AuditStep {
            step_number: self.next_step,
            rule_id: rule_id.to_string(),
            rule_name: rule_name.to_string(),
            basis,
            input,
            output,
            reasoning,
        });
        self.next_step += 1;
    }

    fn component(
        &mut self,
        budget: &mut Budget,
        rule_id: &str,
        rule_name: &str,
        basis: String,
        wanted: Amount,
    ) -> Amount {
        let granted = budget.take(wanted);
        let capped = granted != wanted;
        let reasoning = if capped {
            format!(
                "{} = {}, capped to the remaining {}",
                basis, wanted, granted
            )
        } else {
            format!("{} = {}", basis, granted)
        };
        self.push(
            rule_id,
            rule_name,
            basis,
            serde_json::json!({ "wanted": wanted.to_string() }),
            serde_json::json!({
                "monthly": granted.to_string(),
                "capped": capped
            }),
            reasoning,
        );
        granted
    }
}
