//! Léxico de numerales en español
//!
//! Tablas fijas de palabras, indexadas por valor. Son constantes de solo
//! lectura, seguras para acceso concurrente sin sincronización.

/// Unidades (0-9). El índice 0 es vacío: dentro de una composición,
/// un resto cero no aporta nada.
pub const UNIDADES: [&str; 10] = [
    "", "uno", "dos", "tres", "cuatro", "cinco", "seis", "siete", "ocho", "nueve",
];

/// Decenas exactas (0, 10, 20, ..., 90), indexadas por n / 10.
pub const DECENAS: [&str; 10] = [
    "", "diez", "veinte", "treinta", "cuarenta", "cincuenta", "sesenta", "setenta",
    "ochenta", "noventa",
];

/// Formas irregulares de 10 a 19, indexadas por n - 10.
pub const ESPECIALES: [&str; 10] = [
    "diez", "once", "doce", "trece", "catorce", "quince", "dieciséis", "diecisiete",
    "dieciocho", "diecinueve",
];

/// Centenas exactas (0, 100, 200, ..., 900), indexadas por n / 100.
/// "ciento" se usa como prefijo para 101-199; el 100 exacto es CIEN.
pub const CENTENAS: [&str; 10] = [
    "", "ciento", "doscientos", "trescientos", "cuatrocientos", "quinientos",
    "seiscientos", "setecientos", "ochocientos", "novecientos",
];

/// Palabras especiales fuera de las tablas
pub const CERO: &str = "cero";
pub const CIEN: &str = "cien";
pub const MIL: &str = "mil";
pub const MILLON: &str = "millón";
pub const MILLONES: &str = "millones";
pub const BILLON: &str = "billón";
pub const BILLONES: &str = "billones";
