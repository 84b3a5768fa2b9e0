use thiserror::Error;

pub type PtResult<T> = Result<T, PtError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PtError {
    #[error("Invalid arguments for {what}: not enough parameters provided or wrong combination of parameters provided")]
    InvalidArgs { what: &'static str },

    #[error("Unknown unit '{unit}'")]
    UnknownUnit { unit: String },

    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },
}
