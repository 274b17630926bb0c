//! WebAssembly bindings for the passgen browser UI.
//!
//! Configurations cross the boundary as plain JavaScript objects
//! in the JSON shape of [`Configuration`].
use passgen_password::{Configuration, Mode, SecureRandom};
use secrecy::ExposeSecret;
use wasm_bindgen::prelude::*;

mod init;

pub use init::{init, LogLevel};

/// Kind of password to generate.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationMode {
    /// Characters drawn from the selected classes.
    Random,
    /// Words drawn from the built-in word list.
    Memorable,
}

impl From<GenerationMode> for Mode {
    fn from(value: GenerationMode) -> Self {
        match value {
            GenerationMode::Random => Mode::Random,
            GenerationMode::Memorable => Mode::Memorable,
        }
    }
}

/// Generate a password from a configuration object.
///
/// Validation failures are thrown as an `Error` carrying a
/// message suitable for display.
#[wasm_bindgen]
pub fn generate(config: JsValue) -> Result<String, JsError> {
    let config = parse_config(config)?;
    let result = passgen_password::generate(&config, &mut SecureRandom)?;
    Ok(result.password.expose_secret().to_owned())
}

/// Estimate the strength of a password.
///
/// Returns an object with `percent` and `label` fields.
#[wasm_bindgen]
pub fn estimate(password: &str, config: JsValue) -> Result<JsValue, JsError> {
    let config = parse_config(config)?;
    let strength = passgen_password::estimate(password, &config);
    serde_wasm_bindgen::to_value(&strength)
        .map_err(|e| JsError::new(&e.to_string()))
}

/// Default configuration object for a mode.
#[wasm_bindgen(js_name = defaultConfiguration)]
pub fn default_configuration(
    mode: GenerationMode,
) -> Result<JsValue, JsError> {
    let config = Configuration::default_for(mode.into());
    serde_wasm_bindgen::to_value(&config)
        .map_err(|e| JsError::new(&e.to_string()))
}

fn parse_config(config: JsValue) -> Result<Configuration, JsError> {
    serde_wasm_bindgen::from_value(config).map_err(|e| {
        tracing::warn!(error = %e, "parse_config");
        JsError::new(&e.to_string())
    })
}
