use serde::{Deserialize, Serialize};

use crate::error::LatebindError;

pub const IMPORT_MARKER: &str = "_import";
pub const IMPORT_SEPARATOR: &str = ":";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportData {
    pub import_path: String,
    pub import_name: String,
}

// `_import:<importPath>:<importName>`. Import paths may themselves contain the
// separator; binding names never do, which is why decoding takes the last
// segment as the name and rejoins the middle segments as the path.
pub fn serialize_import_data(data: &ImportData) -> Result<String, LatebindError> {
    if data.import_name.contains(IMPORT_SEPARATOR) {
        return Err(LatebindError::Internal {
            message: format!(
                "import name {:?} contains {IMPORT_SEPARATOR:?} and cannot be encoded as a token",
                data.import_name
            ),
        });
    }
    Ok(format!(
        "{IMPORT_MARKER}{IMPORT_SEPARATOR}{}{IMPORT_SEPARATOR}{}",
        data.import_path, data.import_name
    ))
}

pub fn is_import_data(raw: &str) -> bool {
    raw.strip_prefix(IMPORT_MARKER)
        .is_some_and(|rest| rest.starts_with(IMPORT_SEPARATOR))
}

pub fn parse_import_data(raw: &str) -> Result<Option<ImportData>, LatebindError> {
    if !is_import_data(raw) {
        return Ok(None);
    }
    let parts: Vec<&str> = raw.split(IMPORT_SEPARATOR).collect();
    if parts.len() < 3 || parts[0] != IMPORT_MARKER {
        return Err(LatebindError::Internal {
            message: format!("malformed import token: {raw:?}"),
        });
    }
    let import_name = parts[parts.len() - 1].to_string();
    let import_path = parts[1..parts.len() - 1].join(IMPORT_SEPARATOR);
    Ok(Some(ImportData {
        import_path,
        import_name,
    }))
}
