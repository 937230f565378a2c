//! Output formatting and control utilities.
//!
//! CHANGELOG:
//! - 10/15/2026 - Trimmed to the json/compact switches the larder CLI exposes

use serde::Serialize;
use serde_json::json;

/// Output control settings from CLI flags.
#[derive(Debug, Clone, Default)]
pub struct OutputControls {
    pub json: bool,
    pub compact: bool,
}

impl OutputControls {
    /// Emit data as JSON according to output controls.
    pub fn emit<T: Serialize>(&self, data: &T) -> String {
        let value = serde_json::to_value(data).unwrap_or(json!(null));

        if self.compact {
            serde_json::to_string(&value).unwrap_or_else(|_| "{}".to_string())
        } else {
            serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".to_string())
        }
    }

    /// Print data to stdout according to output controls.
    pub fn print<T: Serialize>(&self, data: &T) {
        println!("{}", self.emit(data));
    }
}

/// Format error as JSON.
pub fn format_error(error: &str) -> String {
    serde_json::to_string(&json!({
        "error": error,
        "success": false
    }))
    .unwrap_or_else(|_| format!(r#"{{"error":"{}"}}"#, error))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Sample {
        barcode: &'static str,
        quantity: u32,
    }

    #[test]
    fn test_emit_compact() {
        let out = OutputControls {
            json: true,
            compact: true,
        };
        let text = out.emit(&Sample {
            barcode: "111",
            quantity: 2,
        });
        assert_eq!(text, r#"{"barcode":"111","quantity":2}"#);
    }

    #[test]
    fn test_emit_pretty() {
        let out = OutputControls {
            json: true,
            compact: false,
        };
        let text = out.emit(&Sample {
            barcode: "111",
            quantity: 2,
        });
        assert!(text.contains('\n'));
        assert!(text.contains(r#""quantity": 2"#));
    }

    #[test]
    fn test_format_error() {
        let value: serde_json::Value =
            serde_json::from_str(&format_error("no consumption history")).unwrap();
        assert_eq!(value["error"], "no consumption history");
        assert_eq!(value["success"], false);
    }
}
