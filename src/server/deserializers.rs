use serde::{Deserialize, Deserializer};
use serde_json::Value;

// query strings carry the page as text; anything that isn't an integer means
// "no page given" rather than a rejected request
pub fn deserialize_page<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.and_then(|v| v.trim().parse::<i64>().ok()))
}

#[derive(Deserialize)]
#[serde(untagged)]
pub enum IntOrString {
    Int(i64),
    Str(String),
}

// the frontend sends category ids both as numbers and as numeric strings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "IntOrString")]
pub struct Lenienti64(pub i64);

impl TryFrom<IntOrString> for Lenienti64 {
    type Error = String;

    fn try_from(value: IntOrString) -> Result<Self, Self::Error> {
        match value {
            IntOrString::Int(v) => Ok(Lenienti64(v)),
            IntOrString::Str(s) => match s.trim().parse::<i64>() {
                Ok(v) => Ok(Lenienti64(v)),
                Err(_) => Err(format!("Wrong value {s}, can not parse to i64")),
            },
        }
    }
}

/// JSON truthiness: null, false, zero, and empty strings, arrays and objects
/// are all falsy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}
