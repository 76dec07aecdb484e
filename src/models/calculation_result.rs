//! Compensation result models.
//!
//! This module contains the [`CompensationResult`] type returned to letter
//! generators, together with the audit structures recording how each salary
//! component was derived.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{SalaryComponents, SchemeId};

/// A single step in the audit trace recording a structuring decision.
///
/// Each step captures the input, output, and reasoning for one component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The ratio or rate the rule is based on (e.g., "40% of annual CTC").
    pub basis: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// The complete audit trace for a salary structuring.
///
/// # Example
///
/// ```
/// use compensation_engine::models::AuditTrace;
///
/// let trace = AuditTrace {
///     steps: vec![],
///     duration_us: 12,
/// };
/// assert!(trace.steps.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of structuring steps.
    pub steps: Vec<AuditStep>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// A component row rendered for a letter's salary table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedLine {
    /// Display label of the component.
    pub label: String,
    /// Monthly value with Indian digit grouping (e.g., "₹26,667").
    pub monthly: String,
    /// Annual value with Indian digit grouping.
    pub annual: String,
}

/// The complete result of structuring an annual CTC for a letter.
///
/// Bundles the raw components with the display strings a letter template
/// embeds: the "Rupees ... Only" clause and the formatted table rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompensationResult {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The scheme used for the break-down.
    pub scheme: SchemeId,
    /// The monthly break-down.
    pub components: SalaryComponents,
    /// The annual CTC as a legal words clause.
    pub annual_ctc_words: String,
    /// The annual CTC with Indian digit grouping.
    pub annual_ctc_formatted: String,
    /// Table rows for the scheme's components.
    pub lines: Vec<FormattedLine>,
    /// The monthly gross total with Indian digit grouping.
    pub total_monthly_formatted: String,
    /// Complete audit trace of structuring decisions.
    pub audit_trace: AuditTrace,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Amount;

    fn create_sample_result() -> CompensationResult {
        let mut components = SalaryComponents::zero(SchemeId::WithoutHra);
        components.annual_ctc = Amount::from_whole_rupees(800_000).unwrap();

        CompensationResult {
            calculation_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            engine_version: "0.1.0".to_string(),
            scheme: SchemeId::WithoutHra,
            components,
            annual_ctc_words: "Rupees Eight Lakh Only".to_string(),
            annual_ctc_formatted: "₹8,00,000".to_string(),
            lines: vec![FormattedLine {
                label: "Basic Salary".to_string(),
                monthly: "₹26,667".to_string(),
                annual: "₹3,20,004".to_string(),
            }],
            total_monthly_formatted: "₹66,667".to_string(),
            audit_trace: AuditTrace {
                steps: vec![],
                duration_us: 10,
            },
        }
    }

    #[test]
    fn test_result_serialization_round_trips() {
        let result = create_sample_result();
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"scheme\":\"without_hra\""));
        assert!(json.contains("\"annual_ctc\":\"800000\""));
        assert!(json.contains("Rupees Eight Lakh Only"));

        let parsed: CompensationResult = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, result);
    }

    #[test]
    fn test_audit_step_serialization() {
        let step = AuditStep {
            step_number: 1,
            rule_id: "basic_salary".to_string(),
            rule_name: "Basic Salary".to_string(),
            basis: "40% of annual CTC".to_string(),
            input: serde_json::json!({ "annual_ctc": "800000" }),
            output: serde_json::json!({ "basic_monthly": "26667" }),
            reasoning: "round(800000 x 40% / 12) = 26667".to_string(),
        };

        let json = serde_json::to_string(&step).unwrap();
        assert!(json.contains("\"rule_id\":\"basic_salary\""));
        assert!(json.contains("\"basis\":\"40% of annual CTC\""));
    }
}
