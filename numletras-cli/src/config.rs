//! Configuración del CLI
//!
//! Solo afecta a la presentación y al saneado de la entrada; la semántica
//! de conversión nunca es configurable.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Configuración de numletras
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CliConfig {
    /// Mostrar el numeral original junto al resultado
    /// ("El número 45 en letras es: ..." frente a solo las letras)
    pub show_numeral: bool,
    /// Aceptar separadores de grupos en la entrada ("1.000.000", "1_000_000")
    pub accept_separators: bool,
    /// Texto del prompt interactivo
    pub prompt: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            show_numeral: true,
            accept_separators: true,
            prompt: "Ingrese un número entre 0 y 1 billón (1,000,000,000,000): ".to_string(),
        }
    }
}

impl CliConfig {
    /// Ruta del archivo de configuración
    pub fn config_path() -> PathBuf {
        if let Some(config_dir) = dirs::config_dir() {
            config_dir.join("numletras").join("config.toml")
        } else {
            PathBuf::from(".numletras-config.toml")
        }
    }

    /// Carga la configuración, o la predeterminada si no existe el archivo
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        let path = Self::config_path();
        if !path.exists() {
            tracing::debug!("sin archivo de configuración, usando valores predeterminados");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config: CliConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Guarda la configuración
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let path = Self::config_path();

        // Asegurar que el directorio existe
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_roundtrip() {
        let config = CliConfig::default();
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: CliConfig = toml::from_str(&text).unwrap();

        assert_eq!(parsed.show_numeral, config.show_numeral);
        assert_eq!(parsed.accept_separators, config.accept_separators);
        assert_eq!(parsed.prompt, config.prompt);
    }
}
