use serde_aux::field_attributes::deserialize_number_from_string;

use super::{Applicant, EligibilityDecision};

const MIN_INCOME: f64 = 50_000.0;
const MIN_AGE: i64 = 21;
const QUALIFYING_EMPLOYMENT_STATUSES: [&str; 2] = ["employed", "self-employed"];

/// Income of at least 50000, age of at least 21 and an employment status of
/// exactly `employed` or `self-employed`. Both thresholds are inclusive and
/// the status match is case-sensitive.
pub fn is_eligible_for_loan(income: f64, age: i64, employment_status: &str) -> bool {
    income >= MIN_INCOME
        && age >= MIN_AGE
        && QUALIFYING_EMPLOYMENT_STATUSES.contains(&employment_status)
}

/// Thresholds an [`Applicant`] is checked against.
///
/// The default policy is the one implemented by [`is_eligible_for_loan`].
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct EligibilityPolicy {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub min_income: f64,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub min_age: i64,
    pub qualifying_statuses: Vec<String>,
}

impl Default for EligibilityPolicy {
    fn default() -> Self {
        Self {
            min_income: MIN_INCOME,
            min_age: MIN_AGE,
            qualifying_statuses: QUALIFYING_EMPLOYMENT_STATUSES
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl EligibilityPolicy {
    pub fn is_eligible(&self, income: f64, age: i64, employment_status: &str) -> bool {
        income >= self.min_income
            && age >= self.min_age
            && self
                .qualifying_statuses
                .iter()
                .any(|status| status == employment_status)
    }

    pub fn evaluate(&self, applicant: &Applicant) -> EligibilityDecision {
        EligibilityDecision {
            eligible: self.is_eligible(
                applicant.income,
                applicant.age,
                &applicant.employment_status,
            ),
        }
    }
}
