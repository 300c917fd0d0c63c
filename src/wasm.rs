use crate::alphabet::Alphabet;
use crate::generator::{generate, recommended_size, GenerateError, GeneratorConfig};
use crate::log::init_logger;
use wasm_bindgen::prelude::*;

/// Structured error information for JavaScript consumers
#[derive(serde::Serialize)]
struct WasmError {
    /// Error code (e.g., "W002", "G002")
    code: String,
    /// Display message
    message: String,
    /// Short description of error type
    description: String,
    /// Detailed explanation
    details: String,
    /// Optional helpful suggestion
    #[serde(skip_serializing_if = "Option::is_none")]
    help: Option<String>,
}

impl From<GenerateError> for WasmError {
    fn from(e: GenerateError) -> Self {
        // For InvalidInput, surface the nested InputError details
        match &e {
            GenerateError::InvalidInput(ie) => WasmError {
                code: ie.code().to_string(),
                message: ie.to_string(),
                description: ie.description().to_string(),
                details: ie.details().to_string(),
                help: ie.help().map(str::to_string),
            },
            _ => WasmError {
                code: e.code().to_string(),
                message: e.to_string(),
                description: e.description().to_string(),
                details: e.details().to_string(),
                help: e.help().map(str::to_string),
            },
        }
    }
}

impl From<WasmError> for JsValue {
    fn from(e: WasmError) -> Self {
        let mut msg = format!("Error {}: {}", e.code, e.message);

        if !e.details.is_empty() {
            msg.push_str(&format!("\n\n{}", e.details));
        }

        if let Some(help) = e.help {
            msg.push_str(&format!("\n\nSuggestion: {help}"));
        }

        js_sys::Error::new(&msg).into()
    }
}

/// Initialize logging and the panic hook.
///
/// # Arguments
/// * `debug_enabled` - If true, use Debug log level; if false, use Info level
///
/// This function must be called from JavaScript after the WASM module loads.
#[wasm_bindgen]
pub fn initialize(debug_enabled: bool) {
    console_error_panic_hook::set_once();
    init_logger(debug_enabled);
    log::info!("WASM module initialized");
}

#[derive(serde::Serialize)]
struct WasmPuzzle {
    /// One string per row, uppercase letters
    grid: Vec<String>,
    /// `[row, col]` pairs of cells that belong to hidden words
    letter_locations: Vec<[usize; 2]>,
    size: usize,
    /// The words as placed (uppercase, no spaces)
    words: Vec<String>,
}

fn words_from_js(words: JsValue) -> Result<Vec<String>, WasmError> {
    serde_wasm_bindgen::from_value(words).map_err(|e| WasmError {
        code: "WASM001".to_string(),
        message: format!("words must be string[]: {e}"),
        description: "Invalid word-list format".to_string(),
        details: "The words parameter must be a JavaScript array of strings.".to_string(),
        help: Some("Pass a string array, e.g. ['cat', 'dog', 'fish']".to_string()),
    })
}

/// Largest integer a JS `number` holds exactly (`Number.MAX_SAFE_INTEGER`).
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Convert a JS `number` seed to `u64`, rejecting fractions, negatives, and
/// values past `Number.MAX_SAFE_INTEGER`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn seed_from_js(seed: f64) -> Result<u64, WasmError> {
    if seed.is_finite() && seed >= 0.0 && seed.fract() == 0.0 && seed <= MAX_SAFE_INTEGER {
        Ok(seed as u64)
    } else {
        Err(WasmError {
            code: "WASM004".to_string(),
            message: format!("invalid seed: {seed}"),
            description: "Invalid seed".to_string(),
            details: "The seed must be a non-negative integer no larger than Number.MAX_SAFE_INTEGER.".to_string(),
            help: Some("Pass a whole number such as 42, or omit the seed".to_string()),
        })
    }
}

/// JS entry: (words: string[], size: number, alphabet: string, seed?: number)
/// returns `{ grid, letter_locations, size, words }`
#[wasm_bindgen]
pub fn generate_wordsearch_wasm(
    words: JsValue,
    size: usize,
    alphabet: &str,
    seed: Option<f64>,
) -> Result<JsValue, JsValue> {
    let words = words_from_js(words)?;
    let seed = seed.map(seed_from_js).transpose()?;

    let alphabet: Alphabet = alphabet.parse().map_err(|msg: String| WasmError {
        code: "WASM002".to_string(),
        message: msg,
        description: "Unknown alphabet".to_string(),
        details: "The alphabet must be 'english', 'french', or 'custom:<letters>'.".to_string(),
        help: Some("Use 'english' or 'french'".to_string()),
    })?;

    let mut config = GeneratorConfig::new(size).with_alphabet(alphabet);
    config.seed = seed;

    let puzzle = generate(&words, &config).map_err(WasmError::from)?;

    let wasm_puzzle = WasmPuzzle {
        grid: puzzle.grid().to_strings(),
        letter_locations: puzzle.letter_locations().iter().map(|(r, c)| [r, c]).collect(),
        size: puzzle.size(),
        words: puzzle.words().to_vec(),
    };

    serde_wasm_bindgen::to_value(&wasm_puzzle).map_err(|e| {
        WasmError {
            code: "WASM003".to_string(),
            message: format!("serialization failed: {e}"),
            description: "Failed to serialize puzzle".to_string(),
            details: "The generated puzzle could not be converted to JavaScript format.".to_string(),
            help: Some("This is an internal error. Please report this issue.".to_string()),
        }
        .into()
    })
}

/// JS entry: (words: string[]) -> number, the grid size worth suggesting
#[wasm_bindgen]
pub fn recommended_size_wasm(words: JsValue) -> Result<usize, JsValue> {
    let words = words_from_js(words)?;
    Ok(recommended_size(&words))
}

/// Generate a debug report for troubleshooting.
///
/// Users can copy/paste it when reporting issues. It includes the error
/// message, the input, and environment information.
#[wasm_bindgen]
pub fn get_debug_info(error_message: &str, word_count: usize, size: usize, alphabet: &str) -> String {
    use std::fmt::Write;
    let mut report = String::new();

    // NB: writing to a String never fails
    let _ = writeln!(&mut report, "=== WORDSEARCH DEBUG REPORT ===");
    let _ = writeln!(&mut report, "Version: {} ({})", env!("CARGO_PKG_VERSION"), env!("GIT_HASH"));
    let _ = writeln!(&mut report, "Generated: {}", js_sys::Date::new_0().to_iso_string().as_string().unwrap_or_else(|| "unknown".to_string()));
    let _ = writeln!(&mut report);

    let _ = writeln!(&mut report, "## Error");
    let _ = writeln!(&mut report, "{error_message}");
    let _ = writeln!(&mut report);

    let _ = writeln!(&mut report, "## Input");
    let _ = writeln!(&mut report, "Words: {word_count}");
    let _ = writeln!(&mut report, "Size: {size}");
    let _ = writeln!(&mut report, "Alphabet: {alphabet}");
    let _ = writeln!(&mut report);

    let _ = writeln!(&mut report, "## Environment");
    if let Some(window) = web_sys::window() {
        if let Ok(user_agent) = window.navigator().user_agent() {
            let _ = writeln!(&mut report, "User Agent: {user_agent}");
        }
        let _ = writeln!(&mut report, "Location: {}", window.location().href().unwrap_or_else(|_| "unknown".to_string()));
    }
    let _ = writeln!(&mut report);

    let _ = writeln!(&mut report, "=== END DEBUG REPORT ===");

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::InputError;

    #[test]
    fn test_wasm_error_unwraps_input_error() {
        let err = WasmError::from(GenerateError::from(InputError::EmptyWordList));
        assert_eq!(err.code, "W002");
        assert!(err.help.is_some());
    }

    #[test]
    fn test_wasm_error_keeps_generate_code() {
        let err = WasmError::from(GenerateError::PlacementExhausted { size: 3 });
        assert_eq!(err.code, "G002");
        assert!(err.message.contains("3 × 3"));
    }

    #[test]
    fn test_seed_from_js_accepts_whole_numbers() {
        assert_eq!(seed_from_js(0.0).ok(), Some(0));
        assert_eq!(seed_from_js(42.0).ok(), Some(42));
        assert_eq!(seed_from_js(MAX_SAFE_INTEGER).ok(), Some(9_007_199_254_740_991));
    }

    #[test]
    fn test_seed_from_js_rejects_other_numbers() {
        for seed in [-1.0, 1.5, f64::NAN, f64::INFINITY, MAX_SAFE_INTEGER + 2.0] {
            let err = seed_from_js(seed).unwrap_err();
            assert_eq!(err.code, "WASM004");
        }
    }

    #[test]
    fn test_get_debug_info_structure() {
        let report = get_debug_info("could not fit all words", 12, 10, "french");
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(lines[0], "=== WORDSEARCH DEBUG REPORT ===");
        assert!(lines[1].starts_with(&format!("Version: {}", env!("CARGO_PKG_VERSION"))));
        assert!(lines[2].starts_with("Generated: "));
        let input_idx = lines.iter().position(|&l| l == "## Input").unwrap();
        assert_eq!(lines[input_idx + 1], "Words: 12");
        assert_eq!(lines[input_idx + 2], "Size: 10");
        assert_eq!(lines[input_idx + 3], "Alphabet: french");
        assert_eq!(lines.last(), Some(&"=== END DEBUG REPORT ==="));
    }
}
