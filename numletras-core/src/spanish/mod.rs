//! Módulo de numerales en español
//!
//! Convierte números cardinales a su forma escrita en español

pub mod lexicon;
pub mod number;

// Exportar el tipo principal
pub use number::SpanishNumberConverter;
