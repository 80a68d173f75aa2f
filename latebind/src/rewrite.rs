use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use oxc_allocator::Allocator;
use oxc_ast::ast::{ImportDeclarationSpecifier, Statement};
use oxc_parser::Parser;
use oxc_span::SourceType;
use regex::Regex;
use serde::Serialize;

use crate::error::LatebindError;
use crate::format;
use crate::import_token::{ImportData, serialize_import_data};
use crate::splice::{SpliceOperation, splice_many};

static STYLE_FILE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\.(css|less|sass|scss|styl|stylus|pcss|postcss)(\?.*)?$").unwrap());

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileImport {
    pub import_code: String,
    pub import_data: String,
    pub import_var_name: String,
}

// Owns the warned-once keys for a run, so repeated rewrites of the same file
// do not repeat soft diagnostics. No process-wide state.
#[derive(Debug, Default)]
pub struct RewriteSession {
    warned: BTreeSet<String>,
    warnings: Vec<String>,
}

impl RewriteSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    fn warn_once(&mut self, key: String, message: String) {
        if self.warned.insert(key) {
            self.warnings.push(message);
        }
    }
}

#[derive(Debug)]
pub struct RewriteOutput {
    pub code: String,
    pub file_imports: Vec<FileImport>,
}

// Replaces every top-level import declaration with placeholder assignments
// binding each imported name to its encoded token, and returns one FileImport
// per bound identifier.
pub fn rewrite_imports(
    code: &str,
    file_path: &str,
    session: &mut RewriteSession,
) -> Result<RewriteOutput, LatebindError> {
    let allocator = Allocator::default();
    let source_type = SourceType::from_path(Path::new(file_path)).unwrap_or(SourceType::ts());
    let parsed = Parser::new(&allocator, code, source_type).parse();
    if parsed.panicked || !parsed.errors.is_empty() {
        let message = parsed
            .errors
            .iter()
            .map(|e| format!("{e:?}"))
            .collect::<Vec<_>>()
            .join("\n");
        return Err(LatebindError::Parse {
            path: PathBuf::from(file_path),
            message,
        });
    }

    let mut splice_operations: Vec<SpliceOperation> = vec![];
    let mut file_imports: Vec<FileImport> = vec![];

    for statement in &parsed.program.body {
        let Statement::ImportDeclaration(it) = statement else {
            continue;
        };
        let import_path = it.source.value.as_str();
        let start = it.span.start as usize;
        let end = it.span.end as usize;
        let Some(import_code) = code.get(start..end) else {
            return Err(LatebindError::Internal {
                message: format!("import span {start}..{end} is outside the source of {file_path}"),
            });
        };

        // Type-only imports are erased by the host compiler anyway; a runtime
        // placeholder for them would be wrong.
        if it.import_kind.is_type() {
            warn_type_imports_erased(session, file_path);
            splice_operations.push(SpliceOperation {
                start,
                end,
                replacement: String::new(),
            });
            continue;
        }

        let Some(specifiers) = it
            .specifiers
            .as_ref()
            .filter(|specifiers| !specifiers.is_empty())
        else {
            if STYLE_FILE_RE.is_match(import_path) {
                // Stylesheets bind nothing; dropping the import loses nothing.
                splice_operations.push(SpliceOperation {
                    start,
                    end,
                    replacement: String::new(),
                });
                continue;
            }
            return Err(side_effect_import_error(file_path, import_code));
        };

        let mut replacement = String::new();
        for specifier in specifiers {
            let (import_var_name, import_name) = match specifier {
                ImportDeclarationSpecifier::ImportDefaultSpecifier(specifier) => (
                    specifier.local.name.as_str().to_string(),
                    "default".to_string(),
                ),
                ImportDeclarationSpecifier::ImportSpecifier(specifier) => {
                    if specifier.import_kind.is_type() {
                        warn_type_imports_erased(session, file_path);
                        continue;
                    }
                    (
                        specifier.local.name.as_str().to_string(),
                        specifier.imported.name().to_string(),
                    )
                }
                ImportDeclarationSpecifier::ImportNamespaceSpecifier(_) => {
                    return Err(namespace_import_error(file_path, import_code));
                }
            };
            let import_data = serialize_import_data(&ImportData {
                import_path: import_path.to_string(),
                import_name,
            })?;
            replacement.push_str(&format!("const {import_var_name} = '{import_data}';"));
            file_imports.push(FileImport {
                import_code: import_code.to_string(),
                import_data,
                import_var_name,
            });
        }

        splice_operations.push(SpliceOperation {
            start,
            end,
            replacement,
        });
    }

    let code_mod = splice_many(code, &splice_operations)?;
    Ok(RewriteOutput {
        code: code_mod,
        file_imports,
    })
}

fn warn_type_imports_erased(session: &mut RewriteSession, file_path: &str) {
    session.warn_once(
        format!("type-imports:{file_path}"),
        format!(
            "Type-only imports in {file_path} are erased at build time; their bindings are not available at runtime."
        ),
    );
}

fn side_effect_import_error(file_path: &str, import_code: &str) -> LatebindError {
    LatebindError::Usage {
        message: [
            format!("The following import in {file_path} has no effect:"),
            format::red(&format::bold(&format::indent(import_code))),
            "Side-effect imports cannot be deferred: either remove it, or move the side effect into a module that exports a binding and import that binding.".to_string(),
        ]
        .join("\n"),
    }
}

fn namespace_import_error(file_path: &str, import_code: &str) -> LatebindError {
    LatebindError::Usage {
        message: [
            format!("Cannot defer the following namespace import in {file_path}:"),
            format::red(&format::bold(&format::indent(import_code))),
            "Import the bindings you need by name instead.".to_string(),
        ]
        .join("\n"),
    }
}
