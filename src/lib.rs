pub mod api;
pub mod catalog;
pub mod classifier;
pub mod defaults;
pub mod error;
pub mod predictor;
pub mod record;
pub mod validator;

pub use api::{run_prediction, PredictionOutcome};
pub use classifier::{classify, PredictionResult, Tier};
pub use error::{KcResult, KitCheckError};
