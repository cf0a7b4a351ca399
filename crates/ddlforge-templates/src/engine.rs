//! Template engine using MiniJinja

use minijinja::Environment;
use serde::Serialize;
use std::path::Path;

use crate::catalog::TemplateKind;
use crate::context::{GenerationOptions, TemplateContext};
use crate::error::{Result, TemplateError};

/// Code template engine with the bundled templates pre-registered
pub struct CodeTemplateEngine {
    env: Environment<'static>,
}

impl CodeTemplateEngine {
    /// Create an engine with helpers and every bundled template
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.set_keep_trailing_newline(true);

        crate::filters::register_helpers(&mut env);

        for kind in TemplateKind::ALL {
            let added = env.add_template(kind.file_name(), kind.bundled_source());
            if let Err(err) = &added {
                tracing::error!(template = kind.key(), error = %err, "Bundled template is invalid");
            }
            debug_assert!(added.is_ok(), "bundled template {} does not compile", kind.key());
        }

        Self { env }
    }

    /// Create an engine whose bundled templates are replaced by any
    /// same-named files found in `dir`
    pub fn with_template_dir(dir: &Path) -> Result<Self> {
        let mut engine = Self::new();

        for kind in TemplateKind::ALL {
            let path = dir.join(kind.file_name());
            if !path.is_file() {
                continue;
            }

            let source =
                std::fs::read_to_string(&path).map_err(|err| TemplateError::io(&path, err))?;
            engine
                .env
                .add_template_owned(kind.file_name(), source)
                .map_err(|err| TemplateError::render(kind.key(), err))?;

            tracing::debug!(template = kind.key(), path = %path.display(), "Overrode bundled template");
        }

        Ok(engine)
    }

    /// Engine for `options`, honouring its template directory if set
    pub fn for_options(options: &GenerationOptions) -> Result<Self> {
        match &options.templates_dir {
            Some(dir) => Self::with_template_dir(dir),
            None => Ok(Self::new()),
        }
    }

    /// Render one catalog template
    pub fn render(&self, kind: TemplateKind, context: &TemplateContext) -> Result<String> {
        let tmpl = self
            .env
            .get_template(kind.file_name())
            .map_err(|err| TemplateError::render(kind.key(), err))?;
        tmpl.render(context)
            .map_err(|err| TemplateError::render(kind.key(), err))
    }

    /// Render a catalog template by its key (`vo`, `serviceImpl`, ...)
    pub fn render_key(&self, key: &str, context: &TemplateContext) -> Result<String> {
        let kind =
            TemplateKind::from_key(key).ok_or_else(|| TemplateError::UnknownTemplate(key.into()))?;
        self.render(kind, context)
    }

    /// Render an ad-hoc template source with a serde-serializable context
    pub fn render_str<T: Serialize>(&self, name: &str, source: &str, context: &T) -> Result<String> {
        self.env
            .render_named_str(name, source, context)
            .map_err(|err| TemplateError::render(name, err))
    }
}

impl Default for CodeTemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}
