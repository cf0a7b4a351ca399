//! In-memory previews of every template and the validation envelope
//! returned to callers that only want a quick answer

use serde::Serialize;
use std::collections::BTreeMap;

use ddlforge_parser::{parse_ddl, validate_ddl};

use crate::catalog::TemplateKind;
use crate::context::{GenerationOptions, TemplateContext};
use crate::engine::CodeTemplateEngine;
use crate::error::Result;

/// Error reported when the structural pre-check rejects the input
pub const INVALID_DDL_MESSAGE: &str = "Invalid DDL format";

/// Rendered text of every template, keyed by template key
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Previews {
    pub package_name: String,
    pub table_name: String,
    pub previews: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previews: Option<BTreeMap<String, String>>,
}

impl ValidationResult {
    fn invalid(error: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(error.into()),
            ..Self::default()
        }
    }
}

/// Render every catalog template for `ddl`.
///
/// Parse failures are returned as errors. A template that fails to render
/// does not fail the call; its preview holds an error line instead.
pub fn generate_previews(ddl: &str, options: &GenerationOptions) -> Result<Previews> {
    let parsed = parse_ddl(ddl)?;
    let context = TemplateContext::new(&parsed, options);
    let engine = CodeTemplateEngine::for_options(options)?;

    let previews = TemplateKind::ALL
        .into_iter()
        .map(|kind| {
            let text = engine.render(kind, &context).unwrap_or_else(|err| {
                tracing::warn!(template = kind.key(), error = %err, "Preview rendering failed");
                format!("// Error rendering {}: {err}", kind.key())
            });
            (kind.key().to_string(), text)
        })
        .collect();

    tracing::debug!(table = %context.table_name, "Generated previews");

    Ok(Previews {
        package_name: context.package_name,
        table_name: context.table_name,
        previews,
    })
}

/// Check `ddl` and report the table it describes without rendering anything
pub fn validate_only(ddl: &str, options: &GenerationOptions) -> ValidationResult {
    if !validate_ddl(ddl) {
        return ValidationResult::invalid(INVALID_DDL_MESSAGE);
    }

    match parse_ddl(ddl) {
        Ok(parsed) => ValidationResult {
            is_valid: true,
            package_name: Some(options.package_name.clone()),
            table_name: Some(parsed.table_name),
            ..ValidationResult::default()
        },
        Err(err) => ValidationResult::invalid(err.to_string()),
    }
}

/// Check `ddl` and, if it passes, render every preview
pub fn validate_and_preview(ddl: &str, options: &GenerationOptions) -> ValidationResult {
    if !validate_ddl(ddl) {
        return ValidationResult::invalid(INVALID_DDL_MESSAGE);
    }

    match generate_previews(ddl, options) {
        Ok(previews) => ValidationResult {
            is_valid: true,
            error: None,
            package_name: Some(previews.package_name),
            table_name: Some(previews.table_name),
            previews: Some(previews.previews),
        },
        Err(err) => ValidationResult::invalid(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TemplateError;
    use ddlforge_parser::DdlError;
    use pretty_assertions::assert_eq;

    const BOARD: &str = "CREATE TABLE board (board_id INT PRIMARY KEY, title VARCHAR(200))";

    #[test]
    fn test_previews_cover_every_template() {
        let previews = generate_previews(BOARD, &GenerationOptions::new("com.acme")).unwrap();

        assert_eq!(previews.package_name, "com.acme");
        assert_eq!(previews.table_name, "Board");
        assert_eq!(previews.previews.len(), TemplateKind::ALL.len());
        for kind in TemplateKind::ALL {
            let text = &previews.previews[kind.key()];
            assert!(!text.starts_with("// Error rendering"), "{kind}: {text}");
        }
        assert!(previews.previews["vo"].contains("private java.lang.String title;"));
    }

    #[test]
    fn test_previews_isolate_failing_template() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(TemplateKind::Service.file_name()),
            "{{ missing.field }}",
        )
        .unwrap();
        let options = GenerationOptions::default().with_templates_dir(dir.path());

        let previews = generate_previews(BOARD, &options).unwrap();

        assert!(previews.previews["service"].starts_with("// Error rendering service: "));
        assert!(previews.previews["vo"].contains("public class BoardVO"));
    }

    #[test]
    fn test_previews_propagate_parse_errors() {
        let err = generate_previews("CREATE TABLE t (PRIMARY KEY (x))", &GenerationOptions::default())
            .unwrap_err();
        assert!(matches!(err, TemplateError::Ddl(DdlError::NoValidColumns)));
    }

    #[test]
    fn test_validate_only() {
        let result = validate_only(BOARD, &GenerationOptions::new("com.acme"));
        assert_eq!(
            result,
            ValidationResult {
                is_valid: true,
                error: None,
                package_name: Some("com.acme".into()),
                table_name: Some("Board".into()),
                previews: None,
            }
        );
    }

    #[test]
    fn test_validate_only_rejects_malformed_input() {
        let result = validate_only("CREATE TABLE t (id INT", &GenerationOptions::default());
        assert_eq!(result, ValidationResult::invalid(INVALID_DDL_MESSAGE));

        let result = validate_only("", &GenerationOptions::default());
        assert_eq!(result.error.as_deref(), Some(INVALID_DDL_MESSAGE));
    }

    #[test]
    fn test_validate_only_reports_parse_error() {
        // Passes the structural check but has no usable column
        let result = validate_only("CREATE TABLE t (PRIMARY KEY (x))", &GenerationOptions::default());
        assert!(!result.is_valid);
        assert_eq!(result.error.as_deref(), Some("No valid columns found in DDL"));
    }

    #[test]
    fn test_validate_and_preview() {
        let result = validate_and_preview(BOARD, &GenerationOptions::default());
        assert!(result.is_valid);
        assert_eq!(result.table_name.as_deref(), Some("Board"));
        assert_eq!(result.previews.map(|p| p.len()), Some(12));

        let result = validate_and_preview("DROP TABLE board", &GenerationOptions::default());
        assert_eq!(result.error.as_deref(), Some(INVALID_DDL_MESSAGE));
        assert_eq!(result.previews, None);
    }

    #[test]
    fn test_validation_result_json_omits_empty_fields() {
        let json = serde_json::to_value(ValidationResult::invalid(INVALID_DDL_MESSAGE)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "isValid": false, "error": "Invalid DDL format" })
        );
    }
}
