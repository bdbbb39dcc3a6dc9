pub mod evaluation_result;
pub use evaluation_result::{EvaluationCase, EvaluationFailure, EvaluationResult};
