//! # Pricing Module
//!
//! Computes a medicine's tax-inclusive selling price from its acquisition
//! price (HNA) and margin percentage.
//!
//! ## The Formula
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  SELLING PRICE CALCULATION                                              │
//! │                                                                         │
//! │  margin_factor = 1 + margin% / 100                                      │
//! │  ppn_factor    = 1.11                (fixed 11% VAT, not configurable)  │
//! │                                                                         │
//! │  selling_price = round(HNA × margin_factor × ppn_factor)                │
//! │                                                                         │
//! │  Example: HNA 1,000 with 10% margin                                     │
//! │    1,000 × 1.10 × 1.11 = 1,221                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Permissive By Design
//! Malformed numeric input (NaN, infinity, negative HNA) degrades to zero
//! rather than failing. The storage layer may hold whatever a hosted
//! database handed back; pricing must never be the place that crashes a
//! purchase order. Stricter validation, if ever wanted, belongs at the
//! request boundary (see [`crate::coerce`]).

/// Fixed PPN (VAT) multiplier: 11%.
///
/// Hardcoded on purpose. The business runs a single tax regime and the
/// original procurement flow bakes this constant into every recalculation.
pub const PPN_FACTOR: f64 = 1.11;

/// Computes the tax-inclusive selling price for a medicine.
///
/// ## Arguments
/// * `hna` - Acquisition (cost) price. Non-finite or negative values are
///   treated as 0.
/// * `margin_percentage` - Markup applied before tax (e.g. `10.0` for 10%).
///   Non-finite values are treated as 0.
///
/// ## Rounding
/// `f64::round` - half away from zero, which matches `Math.round` for the
/// non-negative prices this domain produces. Tests pin exact values.
///
/// ## Example
/// ```rust
/// use apotek_core::pricing::selling_price;
///
/// assert_eq!(selling_price(1000.0, 10.0), 1221);
/// assert_eq!(selling_price(0.0, 25.0), 0);
/// ```
pub fn selling_price(hna: f64, margin_percentage: f64) -> i64 {
    let hna = if hna.is_finite() && hna > 0.0 { hna } else { 0.0 };
    let margin = if margin_percentage.is_finite() {
        margin_percentage
    } else {
        0.0
    };

    let margin_factor = 1.0 + margin / 100.0;
    (hna * margin_factor * PPN_FACTOR).round() as i64
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hna_1000_margin_10_is_1221() {
        // 1000 * 1.10 * 1.11 = 1221.0 exactly
        assert_eq!(selling_price(1000.0, 10.0), 1221);
    }

    #[test]
    fn zero_hna_always_prices_at_zero() {
        assert_eq!(selling_price(0.0, 0.0), 0);
        assert_eq!(selling_price(0.0, 10.0), 0);
        assert_eq!(selling_price(0.0, 250.0), 0);
    }

    #[test]
    fn zero_margin_still_applies_ppn() {
        // Margin 0 is a 1.0 factor, not a zero price
        assert_eq!(selling_price(1000.0, 0.0), 1110);
    }

    #[test]
    fn result_is_rounded_to_nearest_integer() {
        // 7500 * 1.05 * 1.11 = 8741.25 → 8741
        assert_eq!(selling_price(7500.0, 5.0), 8741);
        // 333 * 1.10 * 1.11 = 406.593 → 407
        assert_eq!(selling_price(333.0, 10.0), 407);
    }

    #[test]
    fn malformed_input_degrades_to_zero() {
        assert_eq!(selling_price(f64::NAN, 10.0), 0);
        assert_eq!(selling_price(f64::INFINITY, 10.0), 0);
        assert_eq!(selling_price(-500.0, 10.0), 0);
        // NaN margin falls back to a plain PPN markup
        assert_eq!(selling_price(1000.0, f64::NAN), 1110);
    }
}
