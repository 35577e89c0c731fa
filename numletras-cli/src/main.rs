//! numletras — convierte un número a su forma escrita en español
//!
//! Capa de entrada/salida del conversor: lee un entero (argumento o
//! prompt interactivo), valida el rango y muestra la frase resultante.
//! El conversor nunca se invoca con un valor fuera de rango.

use std::io::{self, Write};

use numletras_core::{NumLetrasError, NumLetrasResult, SpanishNumberConverter};

mod config;

use config::CliConfig;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Inicializar logging
    tracing_subscriber::fmt::init();

    let config = CliConfig::load().unwrap_or_else(|e| {
        tracing::warn!("no se pudo cargar la configuración: {e}");
        CliConfig::default()
    });

    let raw = match std::env::args().nth(1) {
        Some(arg) => arg,
        None => prompt_value(&config)?,
    };

    match parse_value(&raw, &config) {
        Ok(n) => {
            // parse_value ya validó el rango, así que convert no falla aquí
            let words = SpanishNumberConverter::convert(n)?;
            if config.show_numeral {
                println!("El número {} en letras es: {}", n, words);
            } else {
                println!("{}", words);
            }
        }
        Err(NumLetrasError::OutOfRange { value }) => {
            tracing::debug!(value = %value, "entrada rechazada por rango");
            println!("Número fuera de rango.");
        }
        Err(e) => {
            println!("Entrada no válida: {}", e);
        }
    }

    Ok(())
}

/// Muestra el prompt y lee una línea de stdin
fn prompt_value(config: &CliConfig) -> io::Result<String> {
    print!("{}", config.prompt);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Analiza la entrada y valida el rango soportado
///
/// El valor se analiza como i128 para poder distinguir y rechazar los
/// negativos con el mismo mensaje de rango que los valores demasiado
/// grandes, sin que lleguen nunca al conversor.
fn parse_value(raw: &str, config: &CliConfig) -> NumLetrasResult<u64> {
    let cleaned = if config.accept_separators {
        strip_separators(raw)
    } else {
        raw.trim().to_string()
    };

    let value: i128 = cleaned
        .parse()
        .map_err(|_| NumLetrasError::InvalidInput(raw.trim().to_string()))?;

    if value < 0 || value > SpanishNumberConverter::MAX_SUPPORTED as i128 {
        return Err(NumLetrasError::OutOfRange { value });
    }

    Ok(value as u64)
}

/// Elimina separadores de grupos: puntos, comas, guiones bajos y espacios
///
/// La entrada es siempre un entero, así que el punto y la coma solo
/// pueden ser separadores de miles.
fn strip_separators(raw: &str) -> String {
    raw.trim()
        .chars()
        .filter(|c| !matches!(c, '.' | ',' | '_' | ' '))
        .collect()
}
