use thiserror::Error;

#[derive(Error, Debug)]
pub enum NumLetrasError {
    // Errores de conversión
    #[error("number out of supported range: {value} (supported range is 0..=1000000000000)")]
    OutOfRange { value: i128 },

    // Errores de entrada (capa CLI)
    #[error("invalid numeric input: {0}")]
    InvalidInput(String),
}

pub type NumLetrasResult<T> = Result<T, NumLetrasError>;
