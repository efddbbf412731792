pub mod form;
pub mod request;
pub mod response;
pub mod routes;

pub use request::{EvaluationRequest, FormSubmission};
pub use response::{ErrorResponse, EvaluationResponse, MatchStatus};
pub use routes::{create_router, AppState};
