//! Core value types shared by the parameter panels.
//!
//! Numeric fields on the entry screen may hold either a number or the raw
//! text a widget produced. Derivations read them through
//! [`NumericInput::coerce_lenient`], which never fails.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{ParamError, Result};

// ---------------------------------------------------------------------------
// Numeric input
// ---------------------------------------------------------------------------

/// A numeric field value as produced by an input widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumericInput {
    /// A value the widget already delivered as a number.
    ///
    /// Non-finite numbers serialize as their text spelling and read back
    /// as [`NumericInput::Text`], which coerces to the same value.
    Number(#[serde(serialize_with = "non_finite::serialize")] f64),
    /// Raw text typed into the field, not yet interpreted.
    Text(String),
}

impl NumericInput {
    /// Interpret the value, treating anything non-numeric as zero.
    ///
    /// Text is read by its longest leading numeric prefix, so `"12.5%"`
    /// yields `12.5` and `"abc"` yields `0.0`. `NaN` becomes `0.0`.
    #[must_use]
    pub fn coerce_lenient(&self) -> f64 {
        let value = match self {
            Self::Number(n) => *n,
            Self::Text(text) => leading_float(text).unwrap_or(0.0),
        };
        if value.is_nan() { 0.0 } else { value }
    }

    /// The value if it is a finite number or text that is entirely one.
    #[must_use]
    pub fn as_finite(&self) -> Option<f64> {
        match self {
            Self::Number(n) if n.is_finite() => Some(*n),
            Self::Number(_) => None,
            Self::Text(text) => text.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        }
    }
}

impl From<f64> for NumericInput {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for NumericInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for NumericInput {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl fmt::Display for NumericInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

/// Coerce an optional field value; an absent value counts as zero.
#[must_use]
pub fn coerce_lenient(value: Option<&NumericInput>) -> f64 {
    value.map_or(0.0, NumericInput::coerce_lenient)
}

/// Parse text that must be a finite number in its entirety.
///
/// # Errors
/// Returns [`ParamError::InvalidNumber`] naming `field` when the trimmed
/// text is empty, has trailing garbage, or is not finite.
pub fn parse_strict(field: &str, text: &str) -> Result<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .ok_or_else(|| ParamError::InvalidNumber {
            field: field.to_string(),
            value: text.to_string(),
        })
}

/// Serde adapters for floats that may be `NaN` or infinite.
///
/// JSON has no literal for these, so they are written as the strings
/// `"NaN"`, `"Infinity"` and `"-Infinity"` and accepted back in that form.
pub(crate) mod non_finite {
    use serde::{Deserialize, Deserializer, Serializer, de};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Number(f64),
        Text(String),
    }

    impl Repr {
        fn into_f64<E: de::Error>(self) -> Result<f64, E> {
            match self {
                Self::Number(n) => Ok(n),
                Self::Text(text) => match text.as_str() {
                    "NaN" => Ok(f64::NAN),
                    "Infinity" => Ok(f64::INFINITY),
                    "-Infinity" => Ok(f64::NEG_INFINITY),
                    _ => Err(E::custom(format!("invalid float `{text}`"))),
                },
            }
        }
    }

    fn spelling(value: f64) -> Option<&'static str> {
        if value.is_nan() {
            Some("NaN")
        } else if value.is_infinite() {
            Some(if value > 0.0 { "Infinity" } else { "-Infinity" })
        } else {
            None
        }
    }

    #[allow(clippy::trivially_copy_pass_by_ref)]
    pub(crate) fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        match spelling(*value) {
            Some(text) => serializer.serialize_str(text),
            None => serializer.serialize_f64(*value),
        }
    }

    pub(crate) fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Repr::deserialize(deserializer)?.into_f64()
    }

    /// The same encoding for optional fields; `None` stays `null`.
    pub(crate) mod option {
        use serde::{Deserialize, Deserializer, Serializer};

        use super::{Repr, spelling};

        #[allow(clippy::ref_option)]
        pub(crate) fn serialize<S: Serializer>(
            value: &Option<f64>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match value {
                Some(v) => match spelling(*v) {
                    Some(text) => serializer.serialize_some(text),
                    None => serializer.serialize_some(v),
                },
                None => serializer.serialize_none(),
            }
        }

        pub(crate) fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<f64>, D::Error> {
            Option::<Repr>::deserialize(deserializer)?
                .map(Repr::into_f64)
                .transpose()
        }
    }
}

/// Longest leading decimal literal in `text`, after leading whitespace.
///
/// Accepts an optional sign, digits with at most one decimal point, an
/// optional exponent, or the literal `Infinity`.
fn leading_float(text: &str) -> Option<f64> {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    if s[end..].starts_with("Infinity") {
        return Some(if s.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        end = frac_end;
    }
    if digits == 0 {
        return None;
    }

    // An exponent only counts when at least one digit follows it.
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits {
            end = exp_end;
        }
    }

    s[..end].parse().ok()
}

// ---------------------------------------------------------------------------
// Selectors
// ---------------------------------------------------------------------------

/// How the species composition percentages were derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DerivedBy {
    /// Percentages by volume.
    Volume,
    /// Percentages by basal area.
    BasalArea,
}

impl DerivedBy {
    /// Every option in display order.
    pub const ALL: [Self; 2] = [Self::Volume, Self::BasalArea];

    /// Label shown on the entry screen.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Volume => "Volume",
            Self::BasalArea => "Basal Area",
        }
    }
}

/// Reference point the stand age is measured from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgeType {
    /// Total age since germination.
    Total,
    /// Age since the tree reached breast height.
    Breast,
}

impl AgeType {
    /// Every option in display order.
    pub const ALL: [Self; 2] = [Self::Total, Self::Breast];

    /// Label shown on the entry screen.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Total => "Total",
            Self::Breast => "Breast",
        }
    }
}

/// Whether site values are computed by the model or supplied by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SiteSpeciesValues {
    /// Site index and height are computed from the other inputs.
    Computed,
    /// Site index and height are entered directly.
    Supplied,
}

impl SiteSpeciesValues {
    /// Every option in display order.
    pub const ALL: [Self; 2] = [Self::Computed, Self::Supplied];

    /// Label shown on the entry screen.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Computed => "Computed",
            Self::Supplied => "Supplied",
        }
    }
}
