//! # Lenient Numeric Coercion
//!
//! Inbound purchase-order payloads come from spreadsheet-shaped frontends:
//! quantities arrive as `5`, `"5"`, `5.0`, `"  5 "`, or outright garbage.
//! The intake contract is "never reject a request over a malformed number" -
//! invalid values coerce to zero and the order is processed anyway.
//!
//! ## Coercion Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Coercion Layers                                    │
//! │                                                                         │
//! │  Layer 1: serde deserialization                                        │
//! │  └── Accepts ANY JSON value for lenient fields                         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── JSON number  → integer (fractions truncate)                       │
//! │  ├── JSON string  → trimmed, parsed as int, then float                 │
//! │  └── anything else → 0                                                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Pricing/stock math works with plain i64/f64                  │
//! │                                                                         │
//! │  Defaulting happens HERE, at the boundary - never silently inside      │
//! │  the pricing or stock arithmetic.                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Coerces any JSON value to an integer, defaulting to 0.
///
/// ## Rules
/// - Numbers: used as-is; fractional values truncate toward zero
/// - Strings: trimmed, parsed as `i64`, then as `f64` (truncated)
/// - Everything else (null, bool, array, object): 0
///
/// ## Example
/// ```rust
/// use apotek_core::coerce::lenient_i64;
/// use serde_json::json;
///
/// assert_eq!(lenient_i64(&json!(5)), 5);
/// assert_eq!(lenient_i64(&json!("5")), 5);
/// assert_eq!(lenient_i64(&json!("5.9")), 5);
/// assert_eq!(lenient_i64(&json!("banyak")), 0);
/// ```
pub fn lenient_i64(value: &Value) -> i64 {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64))
            .unwrap_or(0),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| {
                    s.parse::<f64>()
                        .ok()
                        .filter(|f| f.is_finite())
                        .map(|f| f.trunc() as i64)
                })
                .unwrap_or(0)
        }
        _ => 0,
    }
}

/// Coerces any JSON value to a float, defaulting to 0.0.
///
/// Same rules as [`lenient_i64`], without truncation. Non-finite results
/// also default to 0.0.
pub fn lenient_f64(value: &Value) -> f64 {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    parsed.filter(|f| f.is_finite()).unwrap_or(0.0)
}

/// serde deserializer for lenient integer fields.
///
/// ## Usage
/// ```rust,ignore
/// #[derive(Deserialize)]
/// struct PoItem {
///     medicine_id: String,
///     #[serde(default, deserialize_with = "coerce::lenient_quantity")]
///     qty: i64,
/// }
/// ```
pub fn lenient_quantity<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(lenient_i64(&value))
}

// =============================================================================
// Unit Tests
// =============================================================================
