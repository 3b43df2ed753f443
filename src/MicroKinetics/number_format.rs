//! Text forms of numbers in the MKMCXX input file.
//!
//! The solver input has always been produced with "shortest round-trip" float text
//! (`0.5`, `1.0`, `3.33e-05`, `27.99`) and two-digit exponents in the desorption column
//! (`-5.97e04`). Integers stay integers (`1`, `28`). Everything here reproduces those forms so
//! files stay comparable as text with the ones generated before.
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// shortest round-trip text of a float, positional for 1e-4 <= |x| < 1e16, exponent form
/// (`1e-05`, `1.5e+16`) outside of that range; integral floats keep `.0`
pub fn float_repr(x: f64) -> String {
    if x.is_nan() {
        return "nan".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if x == 0.0 {
        return if x.is_sign_negative() { "-0.0" } else { "0.0" }.to_string();
    }
    let (negative, digits, exponent) = shortest_digits(x);
    let sign = if negative { "-" } else { "" };
    if (-4..16).contains(&exponent) {
        let (int_part, frac_part) = if exponent >= 0 {
            let int_len = exponent as usize + 1;
            if digits.len() <= int_len {
                (
                    format!("{}{}", digits, "0".repeat(int_len - digits.len())),
                    "0".to_string(),
                )
            } else {
                (digits[..int_len].to_string(), digits[int_len..].to_string())
            }
        } else {
            let zeros = "0".repeat((-exponent - 1) as usize);
            ("0".to_string(), format!("{}{}", zeros, digits))
        };
        format!("{}{}.{}", sign, int_part, frac_part)
    } else {
        let mantissa = if digits.len() > 1 {
            format!("{}.{}", &digits[..1], &digits[1..])
        } else {
            digits
        };
        format!("{}{}e{}", sign, mantissa, exponent_text(exponent, true))
    }
}

/// `{:.Ne}` with the exponent written with at least two digits and without `+`:
/// `-59726.3` with 2 digits gives `-5.97e04`, `0.0032` gives `3.20e-03`
pub fn exp_without_plus(x: f64, decimals: usize) -> String {
    if !x.is_finite() {
        return float_repr(x);
    }
    let formatted = format!("{:.*e}", decimals, x);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) => match exponent.parse::<i32>() {
            Ok(exponent) => format!("{}e{}", mantissa, exponent_text(exponent, false)),
            Err(_) => formatted,
        },
        None => formatted,
    }
}

/// rounds to `sf` significant figures through the exponent text form
pub fn round_to_sf(x: f64, sf: usize) -> f64 {
    let decimals = sf.saturating_sub(1);
    format!("{:.*e}", decimals, x).parse::<f64>().unwrap_or(x)
}

/// rounds to `decimals` places after the point (correctly rounded, on the exact binary value)
pub fn round_to_decimals(x: f64, decimals: usize) -> f64 {
    if !x.is_finite() {
        return x;
    }
    format!("{:.*}", decimals, x).parse::<f64>().unwrap_or(x)
}

fn shortest_digits(x: f64) -> (bool, String, i32) {
    // `{:e}` without precision gives the shortest round-trip mantissa, e.g. "-3.33e-5"
    let text = format!("{:e}", x);
    let (mantissa, exponent) = text.split_once('e').unwrap_or((text.as_str(), "0"));
    let negative = mantissa.starts_with('-');
    let digits: String = mantissa.chars().filter(|c| c.is_ascii_digit()).collect();
    let exponent = exponent.parse::<i32>().unwrap_or(0);
    (negative, digits, exponent)
}

fn exponent_text(exponent: i32, with_plus: bool) -> String {
    let sign = if exponent < 0 {
        "-"
    } else if with_plus {
        "+"
    } else {
        ""
    };
    format!("{}{:02}", sign, exponent.abs())
}

/// number as it came in the JSON: integers stay integers when rounded and printed
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum JsonNumber {
    Int(i64),
    Float(f64),
}

impl JsonNumber {
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Some(JsonNumber::Int(i))
                } else {
                    n.as_f64().map(JsonNumber::Float)
                }
            }
            _ => None,
        }
    }

    pub fn as_f64(&self) -> f64 {
        match *self {
            JsonNumber::Int(i) => i as f64,
            JsonNumber::Float(f) => f,
        }
    }

    pub fn rounded(self, decimals: usize) -> Self {
        match self {
            JsonNumber::Int(i) => JsonNumber::Int(i),
            JsonNumber::Float(f) => JsonNumber::Float(round_to_decimals(f, decimals)),
        }
    }
}

impl Default for JsonNumber {
    fn default() -> Self {
        JsonNumber::Int(0)
    }
}

impl std::fmt::Display for JsonNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JsonNumber::Int(i) => write!(f, "{}", i),
            JsonNumber::Float(x) => f.write_str(&float_repr(*x)),
        }
    }
}

/// text of a pass-through JSON value (concentrations, tolerances, pressure...)
pub fn text_of(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(_) => JsonNumber::from_value(value)
            .map(|n| n.to_string())
            .unwrap_or_else(|| value.to_string()),
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        Value::Null => "None".to_string(),
        other => other.to_string(),
    }
}

/// serde helper for fields that are passed into the file verbatim whatever their JSON type
pub fn deserialize_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(text_of(&value))
}
