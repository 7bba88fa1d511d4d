use thiserror::Error;

#[derive(Error, Debug)]
pub enum KitCheckError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Missing value for required field '{0}'")]
    MissingField(String),

    #[error("Value {value} for field '{field}' is outside [{min}, {}]", .max.map_or("inf".to_string(), |m| m.to_string()))]
    OutOfRange {
        field: String,
        value: f64,
        min: f64,
        max: Option<f64>,
    },

    #[error("Prediction failed: {0}")]
    PredictionFailed(String),
}

pub type KcResult<T> = Result<T, KitCheckError>;
