//! Writing rendered templates and the template context to disk

use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use ddlforge_parser::parse_ddl;

use crate::catalog::TemplateKind;
use crate::context::{GenerationOptions, TemplateContext};
use crate::engine::CodeTemplateEngine;
use crate::error::{Result, TemplateError};

/// A rendered template and the project-relative path it belongs at
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedFile {
    pub kind: TemplateKind,
    pub relative_path: PathBuf,
    pub content: String,
}

/// Render every catalog template for `ddl`.
///
/// Templates that fail to render are logged and left out.
pub fn generate_files(ddl: &str, options: &GenerationOptions) -> Result<Vec<GeneratedFile>> {
    let parsed = parse_ddl(ddl)?;
    let context = TemplateContext::new(&parsed, options);
    let engine = CodeTemplateEngine::for_options(options)?;

    let mut files = Vec::with_capacity(TemplateKind::ALL.len());
    for kind in TemplateKind::ALL {
        match engine.render(kind, &context) {
            Ok(content) => files.push(GeneratedFile {
                kind,
                relative_path: kind.output_path(&context),
                content,
            }),
            Err(err) => {
                tracing::warn!(template = kind.key(), error = %err, "Skipping template");
            }
        }
    }

    Ok(files)
}

/// Write `files` under `root`, creating parent directories as needed.
///
/// With a `selection`, only files of those kinds are written. Returns the
/// paths written, in the order of `files`.
pub fn write_files(
    root: &Path,
    files: &[GeneratedFile],
    selection: Option<&[TemplateKind]>,
) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();

    for file in files {
        if selection.is_some_and(|kinds| !kinds.contains(&file.kind)) {
            continue;
        }

        let path = root.join(&file.relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|err| TemplateError::io(parent, err))?;
        }
        fs::write(&path, &file.content).map_err(|err| TemplateError::io(&path, err))?;

        tracing::info!(template = file.kind.key(), path = %path.display(), "Wrote file");
        written.push(path);
    }

    Ok(written)
}

/// Save `context` as pretty JSON named `{tableName}_TemplateContext.json`
pub fn export_context(dir: &Path, context: &TemplateContext) -> Result<PathBuf> {
    fs::create_dir_all(dir).map_err(|err| TemplateError::io(dir, err))?;

    let path = dir.join(format!("{}_TemplateContext.json", context.table_name));
    let json = serde_json::to_string_pretty(context)?;
    fs::write(&path, json).map_err(|err| TemplateError::io(&path, err))?;

    tracing::info!(path = %path.display(), "Exported template context");
    Ok(path)
}

/// Render user template files against the context for `ddl`.
///
/// Each output is written next to its template as `<stem>.generated`.
pub fn render_custom_templates(
    ddl: &str,
    templates: &[PathBuf],
    options: &GenerationOptions,
) -> Result<Vec<PathBuf>> {
    let parsed = parse_ddl(ddl)?;
    let context = TemplateContext::new(&parsed, options);
    let engine = CodeTemplateEngine::new();

    let mut written = Vec::with_capacity(templates.len());
    for template in templates {
        let source =
            fs::read_to_string(template).map_err(|err| TemplateError::io(template, err))?;
        let name = template.display().to_string();
        let rendered = engine.render_str(&name, &source, &context)?;

        let stem = template
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "template".to_string());
        let path = template.with_file_name(format!("{stem}.generated"));
        fs::write(&path, rendered).map_err(|err| TemplateError::io(&path, err))?;

        tracing::info!(template = %name, path = %path.display(), "Rendered custom template");
        written.push(path);
    }

    Ok(written)
}
