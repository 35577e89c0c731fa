//! NumLetras Core
//!
//! Motor de conversión de números cardinales a letras en español

#![warn(rust_2018_idioms)]

pub mod error;
pub mod spanish;

// Re-exportar los tipos principales
pub use error::{NumLetrasError, NumLetrasResult};
pub use spanish::SpanishNumberConverter;

/// Inicializa el sistema de logging
///
/// Modo producción: silencioso, sin logging
/// Modo depuración (--features debug-logs): logging completo vía NUMLETRAS_LOG
///
/// Nota: esta función puede llamarse varias veces sin provocar panic
pub fn init_logging() {
    #[cfg(feature = "debug-logs")]
    {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let filter = EnvFilter::try_from_env("NUMLETRAS_LOG")
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        // try_init() en lugar de init() para tolerar inicializaciones repetidas
        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_target(false))
            .with(filter)
            .try_init();
    }

    #[cfg(not(feature = "debug-logs"))]
    {
        // Modo producción: sin logging
        // Para habilitarlo, compilar con --features debug-logs
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn it_works() {
        assert_eq!(2 + 2, 4);
    }
}
