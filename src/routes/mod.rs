mod health_check;
mod index;
mod loan_eligibility;

pub use health_check::health_check;
pub use index::index;
pub use loan_eligibility::{json_error_handler, loan_eligibility, PayloadRejection};
