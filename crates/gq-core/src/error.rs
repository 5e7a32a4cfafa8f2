use thiserror::Error;

pub type GqResult<T> = Result<T, GqError>;

#[derive(Error, Debug)]
pub enum GqError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: String },

    #[error("Invariant violated: {what}")]
    Invariant { what: String },
}
