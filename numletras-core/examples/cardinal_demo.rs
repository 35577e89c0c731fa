//! Demostración del conversor de números a letras
//!
//! Recorre una tabla de casos y compara el resultado con el esperado
//!
//! Ejecución: cargo run --example cardinal_demo

use numletras_core::SpanishNumberConverter;

fn main() {
    println!("=== NumLetras: demostración del conversor ===\n");

    // Casos de prueba
    let test_cases: Vec<(u64, &str)> = vec![
        // Unidades y decenas
        (0, "cero"),
        (16, "dieciséis"),
        (45, "cuarenta y cinco"),
        // Centenas
        (100, "cien"),
        (101, "ciento uno"),
        (345, "trescientos cuarenta y cinco"),
        // Miles (el cociente 1 se escribe, comportamiento conservado)
        (1_000, "uno mil"),
        (4_500, "cuatro mil quinientos"),
        // Millones y billones
        (2_500_000, "dos millones quinientos mil"),
        (3_200_000_000, "tres billones doscientos millones"),
        (1_000_000_000_000, "uno mil billones"),
    ];

    println!("【Casos de prueba】\n");
    for (i, (input, expected)) in test_cases.iter().enumerate() {
        let result = SpanishNumberConverter::convert(*input);
        let text = result.unwrap_or_else(|e| format!("<error: {e}>"));
        let status = if &text == expected { "✓" } else { "✗" };

        println!("#{} {} entrada: {}", i + 1, status, input);
        println!("     salida:   \"{}\"", text);
        println!("     esperado: \"{}\"", expected);
        println!();
    }

    // Rechazo de valores fuera de rango
    println!("\n【Valores fuera de rango】\n");
    let too_big = 1_000_000_000_001u64;
    match SpanishNumberConverter::convert(too_big) {
        Ok(text) => println!("{} → \"{}\" (inesperado)", too_big, text),
        Err(e) => println!("{} → rechazado: {}", too_big, e),
    }

    println!("\n=== Demostración completa ===");
}
