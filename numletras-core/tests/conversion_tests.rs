//! Pruebas de integración del conversor
//!
//! Ejercitan la API pública completa, incluidas las propiedades
//! documentadas del programa original.

use numletras_core::{NumLetrasError, SpanishNumberConverter};

#[test]
fn test_canonical_units() {
    let expected = [
        "cero", "uno", "dos", "tres", "cuatro", "cinco", "seis", "siete", "ocho", "nueve",
    ];

    for (n, word) in expected.iter().enumerate() {
        assert_eq!(
            SpanishNumberConverter::convert(n as u64).unwrap(),
            *word,
            "unidad {n}"
        );
    }
}

#[test]
fn test_spec_fixtures() {
    assert_eq!(SpanishNumberConverter::convert(0).unwrap(), "cero");
    assert_eq!(SpanishNumberConverter::convert(13).unwrap(), "trece");
    assert_eq!(SpanishNumberConverter::convert(16).unwrap(), "dieciséis");
    assert_eq!(
        SpanishNumberConverter::convert(45).unwrap(),
        "cuarenta y cinco"
    );
    assert_eq!(SpanishNumberConverter::convert(100).unwrap(), "cien");
    assert_eq!(SpanishNumberConverter::convert(101).unwrap(), "ciento uno");
    assert_eq!(
        SpanishNumberConverter::convert(345).unwrap(),
        "trescientos cuarenta y cinco"
    );
}

#[test]
fn test_thousand_keeps_unit_quotient() {
    // Regresión: el cociente 1 de los miles se escribe ("uno mil"),
    // comportamiento conservado del programa original
    let result = SpanishNumberConverter::convert(1_000).unwrap();
    assert_eq!(result, "uno mil");
    assert!(result.starts_with("uno"));
}

#[test]
fn test_million_plural_with_full_recursion() {
    // El resto de los millones se compone por recursión completa,
    // reentrando por el nivel de los miles
    assert_eq!(
        SpanishNumberConverter::convert(2_500_000).unwrap(),
        "dos millones quinientos mil"
    );
}

#[test]
fn test_billion_plural_with_million_remainder() {
    assert_eq!(
        SpanishNumberConverter::convert(3_200_000_000).unwrap(),
        "tres billones doscientos millones"
    );
}

#[test]
fn test_upper_boundary_is_defined() {
    let result = SpanishNumberConverter::convert(1_000_000_000_000).unwrap();
    assert!(!result.is_empty());
    assert_eq!(result, "uno mil billones");
}

#[test]
fn test_out_of_range_rejected() {
    assert!(matches!(
        SpanishNumberConverter::convert(1_000_000_000_001),
        Err(NumLetrasError::OutOfRange { .. })
    ));
}

/// Cuenta los grupos de tres dígitos (base 1000) distintos de cero
fn nonzero_groups(mut n: u64) -> u32 {
    let mut count = 0;
    while n > 0 {
        if n % 1_000 != 0 {
            count += 1;
        }
        n /= 1_000;
    }
    count
}

#[test]
fn test_length_monotone_in_nonzero_groups() {
    // La longitud del texto no decrece al crecer el número de grupos
    // de magnitud distintos de cero
    let chain: [u64; 4] = [5, 3_005, 2_003_005, 4_002_003_005];

    let mut last_groups = 0;
    let mut last_len = 0;
    for n in chain {
        let groups = nonzero_groups(n);
        let len = SpanishNumberConverter::convert(n).unwrap().chars().count();

        assert!(groups > last_groups);
        assert!(
            len >= last_len,
            "longitud no monótona para {n}: {len} < {last_len}"
        );

        last_groups = groups;
        last_len = len;
    }
}

#[test]
fn test_all_results_nonempty() {
    // Invariante: toda entrada válida produce una frase no vacía
    let samples: [u64; 12] = [
        0,
        7,
        10,
        77,
        100,
        300,
        1_000,
        20_000,
        1_000_000,
        30_000_000,
        1_000_000_000,
        1_000_000_000_000,
    ];

    for n in samples {
        let result = SpanishNumberConverter::convert(n).unwrap();
        assert!(!result.is_empty(), "resultado vacío para {n}");
        assert!(!result.ends_with(' '), "espacio final para {n}");
        assert!(!result.contains("  "), "espacio doble para {n}");
    }
}
