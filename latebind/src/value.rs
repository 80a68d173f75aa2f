use std::collections::BTreeMap;

use thiserror::Error;

const MAX_DEPTH: usize = 64;

// Runtime-value model for config values. Maps are key-ordered so that the
// emitted literal is deterministic. `Function` and `UiElement` exist so that
// config crawling can carry non-serializable values up to the point where
// serialization is actually requested.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigValue {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    List(Vec<ConfigValue>),
    Map(BTreeMap<String, ConfigValue>),
    Function { name: Option<String> },
    UiElement { component: String },
}

// Expected failure channel: the value is well-formed but cannot be expressed
// as a source literal. Distinct from LatebindError::Usage, which is the
// user-facing surface built on top of this.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message_core}")]
pub struct SerializeError {
    message_core: String,
}

impl SerializeError {
    pub fn message_core(&self) -> &str {
        &self.message_core
    }
}

// Emits a source-code literal expression that evaluates to `value`. Failure
// points are reported with the property-access path rooted at `value_name`,
// e.g. `config.Page.render`.
pub fn serialize_value(value: &ConfigValue, value_name: &str) -> Result<String, SerializeError> {
    serialize_at(value, value_name, 0)
}

fn serialize_at(value: &ConfigValue, path: &str, depth: usize) -> Result<String, SerializeError> {
    if depth > MAX_DEPTH {
        return Err(SerializeError {
            message_core: format!(
                "{path} is nested deeper than {MAX_DEPTH} levels (cyclic or degenerate value)"
            ),
        });
    }
    match value {
        ConfigValue::Null => Ok("null".to_string()),
        ConfigValue::Bool(value) => Ok(value.to_string()),
        ConfigValue::Number(value) => Ok(number_literal(*value)),
        ConfigValue::String(value) => Ok(json_quote(value)),
        ConfigValue::List(items) => {
            let rendered = items
                .iter()
                .enumerate()
                .map(|(index, item)| serialize_at(item, &format!("{path}[{index}]"), depth + 1))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(format!("[{}]", rendered.join(",")))
        }
        ConfigValue::Map(entries) => {
            let rendered = entries
                .iter()
                .map(|(key, item)| {
                    let child_path = format!("{path}{}", prop_access_notation(key));
                    let child = serialize_at(item, &child_path, depth + 1)?;
                    Ok(format!("{}:{child}", json_quote(key)))
                })
                .collect::<Result<Vec<_>, SerializeError>>()?;
            Ok(format!("{{{}}}", rendered.join(",")))
        }
        ConfigValue::Function { name } => Err(SerializeError {
            message_core: match name {
                Some(name) => format!("{path} is the function {name}() (functions cannot be serialized)"),
                None => format!("{path} is a function (functions cannot be serialized)"),
            },
        }),
        ConfigValue::UiElement { component } => Err(SerializeError {
            message_core: format!("{path} is a UI element (<{component}>) and cannot be serialized"),
        }),
    }
}

pub fn json_quote(text: &str) -> String {
    serde_json::Value::String(text.to_string()).to_string()
}

pub fn prop_access_notation(name: &str) -> String {
    let identifier_safe = name
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$');
    if identifier_safe {
        format!(".{name}")
    } else {
        format!("[{}]", json_quote(name))
    }
}

fn number_literal(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let literal = if value > 0.0 { "Infinity" } else { "-Infinity" };
        return literal.to_string();
    }
    if value.trunc() == value && value >= (i64::MIN as f64) && value <= (i64::MAX as f64) {
        return (value as i64).to_string();
    }
    serde_json::Number::from_f64(value)
        .map(|n| n.to_string())
        .unwrap_or_else(|| "null".to_string())
}
