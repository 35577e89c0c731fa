//! Conversión de números cardinales a letras
//!
//! Convierte enteros no negativos (hasta un billón, 10^12) a su forma
//! escrita en español: unidades, decenas, centenas, miles, millones y
//! billones (escala larga).
//!
//! La descomposición es recursiva por grupos de magnitud, con una
//! profundidad acotada (como máximo 4 niveles), y no realiza E/S ni
//! mantiene estado mutable.

use crate::error::{NumLetrasError, NumLetrasResult};
use crate::spanish::lexicon;

/// Conversor de números cardinales al español
pub struct SpanishNumberConverter;

impl SpanishNumberConverter {
    /// Valor máximo soportado: un billón (escala larga, 10^12)
    pub const MAX_SUPPORTED: u64 = 1_000_000_000_000;

    /// Convierte un entero no negativo a su forma escrita en español
    ///
    /// # Parámetros
    /// - `n`: valor en el rango [0, 10^12]
    ///
    /// # Retorna
    /// - `Ok(String)`: la frase en letras (por ejemplo: "trescientos cuarenta y cinco")
    /// - `Err`: si el valor excede el rango soportado
    ///
    /// # Ejemplo
    /// ```
    /// # use numletras_core::spanish::number::SpanishNumberConverter;
    /// let result = SpanishNumberConverter::convert(345).unwrap();
    /// assert_eq!(result, "trescientos cuarenta y cinco");
    /// ```
    pub fn convert(n: u64) -> NumLetrasResult<String> {
        if n > Self::MAX_SUPPORTED {
            tracing::debug!(value = n, "valor fuera del rango soportado");
            return Err(NumLetrasError::OutOfRange { value: n as i128 });
        }

        Ok(Self::cardinal(n))
    }

    /// Comprueba si un valor está dentro del rango soportado
    pub fn is_supported(n: u64) -> bool {
        n <= Self::MAX_SUPPORTED
    }

    /// Conversor de magnitudes: descompone por niveles (miles, millones,
    /// billones) y delega los grupos de tres dígitos en `sub_thousand`
    ///
    /// Nota de fidelidad: el cociente de los miles siempre se escribe,
    /// incluso cuando vale 1 ("uno mil", no "mil"). Lo mismo ocurre con
    /// "uno millón" y "uno billón". Es el comportamiento documentado del
    /// programa original y se conserva tal cual.
    fn cardinal(n: u64) -> String {
        // Caso 1: cero (solo en el nivel superior; dentro de una
        // composición un resto cero nunca llega aquí)
        if n == 0 {
            return lexicon::CERO.to_string();
        }

        // Caso 2: menores de mil
        if n < 1_000 {
            return Self::sub_thousand(n);
        }

        // Caso 3: miles (1_000 .. 1_000_000)
        if n < 1_000_000 {
            let quotient = n / 1_000;
            let remainder = n % 1_000;

            let mut result = Self::sub_thousand(quotient);
            result.push(' ');
            result.push_str(lexicon::MIL);
            if remainder != 0 {
                result.push(' ');
                result.push_str(&Self::sub_thousand(remainder));
            }
            return result;
        }

        // Caso 4: millones (1_000_000 .. 1_000_000_000)
        if n < 1_000_000_000 {
            let quotient = n / 1_000_000;
            let remainder = n % 1_000_000;

            let mut result = Self::sub_thousand(quotient);
            result.push(' ');
            result.push_str(if quotient > 1 {
                lexicon::MILLONES
            } else {
                lexicon::MILLON
            });
            if remainder != 0 {
                // El resto puede caer en el nivel de los miles:
                // la recursión reentra por el nivel superior
                result.push(' ');
                result.push_str(&Self::cardinal(remainder));
            }
            return result;
        }

        // Caso 5: billones (1_000_000_000 ..= 10^12, escala larga).
        // El límite superior inclusive garantiza que 10^12 ("uno mil
        // billones") tenga una forma definida y no vacía.
        let quotient = n / 1_000_000_000;
        let remainder = n % 1_000_000_000;

        let mut result = Self::cardinal(quotient);
        result.push(' ');
        result.push_str(if quotient > 1 {
            lexicon::BILLONES
        } else {
            lexicon::BILLON
        });
        if remainder != 0 {
            result.push(' ');
            result.push_str(&Self::cardinal(remainder));
        }
        result
    }

    /// Conversor de grupos de tres dígitos: [0, 999]
    ///
    /// Para n = 0 devuelve la cadena vacía: un resto cero dentro de una
    /// composición no aporta nada.
    fn sub_thousand(n: u64) -> String {
        debug_assert!(n < 1_000);

        match n {
            // 0-9: unidades
            0..=9 => lexicon::UNIDADES[n as usize].to_string(),

            // 10-19: formas irregulares
            10..=19 => lexicon::ESPECIALES[(n - 10) as usize].to_string(),

            // 20-99: decena, más " y " + unidad si hay resto
            20..=99 => {
                let mut result = lexicon::DECENAS[(n / 10) as usize].to_string();
                if n % 10 != 0 {
                    result.push_str(" y ");
                    result.push_str(lexicon::UNIDADES[(n % 10) as usize]);
                }
                result
            }

            // 100 exacto: "cien", no "ciento"
            100 => lexicon::CIEN.to_string(),

            // 101-999: centena como prefijo, más el resto si no es cero
            _ => {
                let mut result = lexicon::CENTENAS[(n / 100) as usize].to_string();
                if n % 100 != 0 {
                    result.push(' ');
                    result.push_str(&Self::sub_thousand(n % 100));
                }
                result
            }
        }
    }
}
