use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("unknown field '{0}' (expected 'nombre' or 'email')")]
    UnknownField(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
