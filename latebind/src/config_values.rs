use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::LatebindError;
use crate::format;
use crate::value::{ConfigValue, json_quote, prop_access_notation, serialize_value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigEnv {
    Server,
    Client,
    ServerAndClient,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefinedAt {
    pub file_path: String,
    pub file_export_path: Option<String>,
}

impl DefinedAt {
    pub fn new(file_path: impl Into<String>) -> Self {
        Self {
            file_path: file_path.into(),
            file_export_path: None,
        }
    }

    pub fn file_path_to_show(&self) -> &str {
        &self.file_path
    }
}

#[derive(Debug, Clone)]
pub struct ConfigValueComputed {
    pub value: ConfigValue,
    pub config_env: ConfigEnv,
}

#[derive(Debug, Clone)]
pub struct ConfigValueEntry {
    pub value: ConfigValue,
    pub defined_at: DefinedAt,
}

#[derive(Debug, Clone)]
pub struct ConfigValueSource {
    pub config_name: String,
    pub config_env: ConfigEnv,
    pub defined_at: DefinedAt,
}

// Iteration order of the maps is insertion order and determines the order of
// the emitted statements.
#[derive(Debug, Clone, Default)]
pub struct PageConfig {
    pub config_values_computed: IndexMap<String, ConfigValueComputed>,
    pub config_values: IndexMap<String, ConfigValueEntry>,
    pub config_value_sources: IndexMap<String, ConfigValueSource>,
}

pub fn get_config_values_serialized(
    page_config: &PageConfig,
    is_env_match: impl Fn(&ConfigEnv, Option<&ConfigValueSource>) -> bool,
) -> Result<String, LatebindError> {
    let mut lines: Vec<String> = vec![];
    for (config_name, computed) in &page_config.config_values_computed {
        if !is_env_match(&computed.config_env, None) {
            continue;
        }
        // A config value source always wins over a separately computed value.
        if page_config.config_value_sources.contains_key(config_name) {
            continue;
        }
        let Some(config_value) = page_config.config_values.get(config_name) else {
            return Err(LatebindError::Internal {
                message: format!("computed config {config_name:?} has no recorded config value"),
            });
        };
        let value_serialized =
            get_config_value_serialized(&computed.value, config_name, &config_value.defined_at)?;
        push_config_value_line(&mut lines, config_name, &value_serialized);
    }
    for (config_name, source) in &page_config.config_value_sources {
        let Some(config_value) = page_config.config_values.get(config_name) else {
            continue;
        };
        if !is_env_match(&source.config_env, Some(source)) {
            continue;
        }
        let value_serialized =
            get_config_value_serialized(&config_value.value, config_name, &config_value.defined_at)?;
        push_config_value_line(&mut lines, config_name, &value_serialized);
    }
    Ok(lines.join("\n"))
}

// Same check as get_config_value_serialized, run for its error only.
pub fn assert_config_value_is_serializable(
    value: &ConfigValue,
    config_name: &str,
    defined_at: &DefinedAt,
) -> Result<(), LatebindError> {
    get_config_value_serialized(value, config_name, defined_at).map(|_| ())
}

// Serializes the value into a source-code literal, then encodes that literal
// as a quoted string so it survives one more layer of code generation.
pub fn get_config_value_serialized(
    value: &ConfigValue,
    config_name: &str,
    defined_at: &DefinedAt,
) -> Result<String, LatebindError> {
    let value_name = format!("config{}", prop_access_notation(config_name));
    let literal = serialize_value(value, &value_name)
        .map_err(|err| value_not_serializable(config_name, defined_at, err.message_core()))?;
    Ok(json_quote(&literal))
}

fn push_config_value_line(lines: &mut Vec<String>, config_name: &str, value_serialized: &str) {
    lines.push(format!(
        "config{} = {value_serialized};",
        prop_access_notation(config_name)
    ));
}

fn value_not_serializable(config_name: &str, defined_at: &DefinedAt, reason: &str) -> LatebindError {
    let file_path = defined_at.file_path_to_show();
    LatebindError::Usage {
        message: format!(
            "The value of the config {} cannot be defined inside the file {file_path}: its value must be defined in another file and then imported by {file_path}. (Because its value isn't serializable: {reason}.)",
            format::cyan(config_name)
        ),
    }
}
