mod applicant;
mod eligibility;

pub use applicant::{Applicant, EligibilityDecision};
pub use eligibility::{is_eligible_for_loan, EligibilityPolicy};
