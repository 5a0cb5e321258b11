//! Serde helpers for loosely typed API fields

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    Int(i64),
    Float(f64),
}

/// Accepts `"987654321"` as well as `987654321`; `null` becomes an empty string
pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<StringOrNumber> = Option::deserialize(deserializer)?;
    Ok(match value {
        Some(StringOrNumber::String(s)) => s,
        Some(StringOrNumber::Int(n)) => n.to_string(),
        Some(StringOrNumber::Float(f)) => f.to_string(),
        None => String::new(),
    })
}

/// Integer field that may be sent as a numeric string
pub fn int_or_string<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<StringOrNumber> = Option::deserialize(deserializer)?;
    match value {
        Some(StringOrNumber::Int(n)) => Ok(n),
        Some(StringOrNumber::Float(f)) => {
            // Только целые значения в диапазоне i64, без округления
            if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 {
                Ok(f as i64)
            } else {
                Err(serde::de::Error::custom(format!("invalid integer {}", f)))
            }
        }
        Some(StringOrNumber::String(s)) => s
            .trim()
            .parse::<i64>()
            .map_err(|e| serde::de::Error::custom(format!("invalid integer {:?}: {}", s, e))),
        None => Ok(0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Deserialize)]
    struct Phone {
        #[serde(deserialize_with = "string_or_number", default)]
        phone: String,
        #[serde(deserialize_with = "int_or_string", default)]
        stock: i64,
    }

    #[test]
    fn test_string_or_number() {
        let p: Phone = serde_json::from_value(json!({ "phone": 987654321, "stock": "12" })).unwrap();
        assert_eq!(p.phone, "987654321");
        assert_eq!(p.stock, 12);

        let p: Phone = serde_json::from_value(json!({ "phone": null })).unwrap();
        assert_eq!(p.phone, "");
        assert_eq!(p.stock, 0);

        assert!(serde_json::from_value::<Phone>(json!({ "stock": "x" })).is_err());
    }

    #[test]
    fn test_int_or_string_rejects_fractions() {
        let p: Phone = serde_json::from_value(json!({ "stock": 12.0 })).unwrap();
        assert_eq!(p.stock, 12);

        assert!(serde_json::from_value::<Phone>(json!({ "stock": 12.7 })).is_err());
        assert!(serde_json::from_value::<Phone>(json!({ "stock": 1e20 })).is_err());
    }
}
