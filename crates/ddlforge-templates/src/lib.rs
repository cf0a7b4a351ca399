//! ddlforge Templates - code scaffolding from parsed DDL
//!
//! This crate takes the [`ParsedDdl`] produced by `ddlforge-parser`, enriches
//! it with packaging and authoring metadata, and renders it through MiniJinja
//! templates into the layers of a Spring/eGovFrame style application.
//!
//! ## Features
//!
//! - **Template Context**: `TemplateContext` with namespaces, class names and
//!   column lists in the camelCase vocabulary the templates use
//! - **Bundled Templates**: VO, mapper, DAO, service, controller and view
//!   templates, overridable from a directory
//! - **Helpers**: `eq`, `empty`, `concat`, `error` functions and
//!   `lowercase`/`uppercase` filters
//! - **Previews**: render every template in memory, isolating failures
//! - **File Emission**: write a selected subset under a project root, export
//!   the context as JSON, render user templates
//!
//! ## Example
//!
//! ```rust,ignore
//! use ddlforge_templates::{GenerationOptions, generate_previews};
//!
//! let options = GenerationOptions::new("com.example.board");
//! let previews = generate_previews("CREATE TABLE board (id INT PRIMARY KEY)", &options)?;
//! println!("{}", previews.previews["vo"]);
//! ```

mod catalog;
mod context;
mod engine;
mod error;
mod filters;
mod output;
mod preview;

pub use catalog::TemplateKind;
pub use context::{DEFAULT_PACKAGE_NAME, GenerationOptions, TemplateContext};
pub use engine::CodeTemplateEngine;
pub use error::{Result, TemplateError};
pub use filters::TemplateHelpers;
pub use output::{
    GeneratedFile, export_context, generate_files, render_custom_templates, write_files,
};
pub use preview::{
    INVALID_DDL_MESSAGE, Previews, ValidationResult, generate_previews, validate_and_preview,
    validate_only,
};

pub use ddlforge_parser::{Column, ParsedDdl};
