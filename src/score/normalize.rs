//! Score validation and normalization.
//!
//! Judges enter scores as free text, often with a decimal comma. This
//! module is the single choke point that turns raw input into a stored
//! score: parse, snap to the half-point grid, clamp into [0, 10]. Anything
//! unparseable normalizes to `None`, which reads as "judge has not scored
//! yet" rather than an error.

/// Raw judge input before normalization.
///
/// Mirrors what score-entry surfaces actually produce: nothing, a text
/// field value, or an already-numeric value.
#[derive(Debug, Clone, PartialEq)]
pub enum RawScore {
    Absent,
    Text(String),
    Value(f64),
}

impl From<&str> for RawScore {
    fn from(s: &str) -> Self {
        RawScore::Text(s.to_string())
    }
}

impl From<String> for RawScore {
    fn from(s: String) -> Self {
        RawScore::Text(s)
    }
}

impl From<f64> for RawScore {
    fn from(v: f64) -> Self {
        RawScore::Value(v)
    }
}

impl From<Option<f64>> for RawScore {
    fn from(v: Option<f64>) -> Self {
        match v {
            Some(v) => RawScore::Value(v),
            None => RawScore::Absent,
        }
    }
}

/// Normalize a raw judge input into a storable score.
///
/// Text input accepts either a comma or a dot as the decimal separator.
/// Returns `None` when the input is absent or does not parse to a finite
/// number; otherwise the value snapped to the nearest 0.5 and clamped
/// into [0.0, 10.0].
///
/// # Examples
///
/// ```rust
/// use podium::score::normalize::{normalize, RawScore};
///
/// assert_eq!(normalize(&"7,5".into()), Some(7.5));
/// assert_eq!(normalize(&"7.5".into()), Some(7.5));
/// assert_eq!(normalize(&"11".into()), Some(10.0));
/// assert_eq!(normalize(&"abc".into()), None);
/// assert_eq!(normalize(&RawScore::Absent), None);
/// ```
pub fn normalize(raw: &RawScore) -> Option<f64> {
    match raw {
        RawScore::Absent => None,
        RawScore::Value(v) => normalize_value(*v),
        RawScore::Text(s) => {
            let parsed: f64 = s.trim().replace(',', ".").parse().ok()?;
            normalize_value(parsed)
        }
    }
}

/// Normalize an already-numeric value: `None` for non-finite input,
/// otherwise snapped and clamped.
pub fn normalize_value(value: f64) -> Option<f64> {
    if !value.is_finite() {
        return None;
    }
    Some(snap_half(value).clamp(0.0, 10.0))
}

/// Snap to the nearest 0.5, rounding halves up on the doubled value.
fn snap_half(value: f64) -> f64 {
    (value * 2.0 + 0.5).floor() / 2.0
}
