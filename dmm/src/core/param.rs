//! Range/resolution parameter values.
//!
//! Callers hand in a [`RawParam`] (whatever they collected: a CLI token, a
//! TOML value, a literal). [`validate`] turns it into a [`ParamValue`], which is
//! either a positive number or one of the keyword sentinels.

use std::fmt;

use serde::{Deserialize, Deserializer};

use crate::core::error::InvalidParameter;

/// Which parameter of a command a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Range,
    Resolution,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Range => "range",
            Self::Resolution => "resolution",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Instrument-chosen value in place of an explicit number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    Min,
    Max,
    Def,
}

impl Keyword {
    pub const ALL: [Keyword; 3] = [Keyword::Min, Keyword::Max, Keyword::Def];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Min => "MIN",
            Self::Max => "MAX",
            Self::Def => "DEF",
        }
    }

    /// Match a keyword by its uppercased form (Unicode case mapping).
    ///
    /// The token is taken as-is: surrounding whitespace makes it unknown.
    pub fn from_token(token: &str) -> Option<Self> {
        let upper = token.to_uppercase();
        Self::ALL
            .into_iter()
            .find(|keyword| keyword.as_str() == upper)
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated numeric value.
///
/// Integer and real spellings are kept apart so `10` renders as `10` and
/// `10.0` renders as `10.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Integer(u64),
    Real(f64),
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            // Debug is the shortest round-trip form and always carries a `.` or exponent.
            Self::Real(x) => write!(f, "{x:?}"),
        }
    }
}

/// Normalized parameter value: a positive number or a keyword.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParamValue {
    Number(Number),
    Keyword(Keyword),
}

impl ParamValue {
    pub const DEFAULT: ParamValue = ParamValue::Keyword(Keyword::Def);

    /// True when the value is the `DEF` sentinel.
    pub fn is_default(&self) -> bool {
        matches!(self, Self::Keyword(Keyword::Def))
    }
}

impl Default for ParamValue {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(number) => number.fmt(f),
            Self::Keyword(keyword) => keyword.fmt(f),
        }
    }
}

/// Unvalidated caller input for a parameter.
///
/// Deserializes untagged from TOML: integers, floats and strings map to the
/// matching variant, anything else lands in `Other` as its TOML text.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawParam {
    Integer(i64),
    Real(f64),
    Text(String),
    #[serde(deserialize_with = "describe_value")]
    Other(String),
}

impl RawParam {
    /// Classify a bare token: integer, then real, then text.
    pub fn from_token(token: &str) -> Self {
        let token = token.trim();
        if let Ok(n) = token.parse::<i64>() {
            return Self::Integer(n);
        }
        if let Ok(x) = token.parse::<f64>() {
            return Self::Real(x);
        }
        Self::Text(token.to_string())
    }
}

impl Default for RawParam {
    fn default() -> Self {
        Self::Text(Keyword::Def.as_str().to_string())
    }
}

impl From<&str> for RawParam {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for RawParam {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for RawParam {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for RawParam {
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

impl From<Keyword> for RawParam {
    fn from(value: Keyword) -> Self {
        Self::Text(value.as_str().to_string())
    }
}

fn describe_value<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = toml::Value::deserialize(deserializer)?;
    Ok(value.to_string())
}

/// Validate and normalize one parameter.
///
/// Guards run in order: string, positive number, then everything else.
/// `field` is only used for diagnostics.
pub fn validate(value: &RawParam, field: Field) -> Result<ParamValue, InvalidParameter> {
    match value {
        RawParam::Text(text) => Keyword::from_token(text)
            .map(ParamValue::Keyword)
            .ok_or_else(|| InvalidParameter::UnknownKeyword {
                field,
                value: text.clone(),
            }),
        RawParam::Integer(n) if *n > 0 => {
            Ok(ParamValue::Number(Number::Integer(n.unsigned_abs())))
        }
        RawParam::Real(x) if *x > 0.0 && x.is_finite() => {
            Ok(ParamValue::Number(Number::Real(*x)))
        }
        RawParam::Integer(n) => Err(InvalidParameter::NotPositive {
            field,
            value: n.to_string(),
        }),
        RawParam::Real(x) => Err(InvalidParameter::NotPositive {
            field,
            value: format!("{x:?}"),
        }),
        RawParam::Other(described) => Err(InvalidParameter::UnexpectedType {
            field,
            value: described.clone(),
        }),
    }
}
