//! ddlforge command line
//!
//! Reads a CREATE TABLE statement from a file or stdin and validates it,
//! shows the parsed model, previews the generated code or writes it out.

mod config;
mod logging;

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use comfy_table::{ContentArrangement, Table, presets::UTF8_FULL};
use ddlforge_parser::{ParsedDdl, parse_ddl, sample_ddl};
use ddlforge_templates::{
    CodeTemplateEngine, GenerationOptions, TemplateContext, TemplateError, TemplateKind,
    export_context, generate_files, generate_previews, render_custom_templates, validate_only,
    write_files,
};
use std::fmt::Write as _;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::config::GeneratorConfig;
use crate::logging::LoggingConfig;

#[derive(Parser)]
#[command(name = "ddlforge", version, about = "Generate eGovFrame scaffolding from CREATE TABLE DDL")]
struct Cli {
    /// Config file (defaults to <config dir>/ddlforge/config.toml)
    #[arg(long, global = true, env = "DDLFORGE_CONFIG")]
    config: Option<PathBuf>,

    /// Debug logging
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check a DDL statement and print the result as JSON
    Validate {
        /// DDL file, or `-` for stdin
        input: String,
    },
    /// Print the parsed table model
    Parse {
        /// DDL file, or `-` for stdin
        input: String,
        /// Show a table instead of JSON
        #[arg(long)]
        table: bool,
    },
    /// Print rendered templates
    Preview {
        /// DDL file, or `-` for stdin
        input: String,
        #[arg(long)]
        package: Option<String>,
        /// Only print this template (vo, mapper, serviceImpl, ...)
        #[arg(long)]
        key: Option<String>,
    },
    /// Write generated files under a project root
    Generate {
        /// DDL file, or `-` for stdin
        input: String,
        /// Project root; falls back to `output_dir` from the config
        #[arg(long)]
        out: Option<PathBuf>,
        #[arg(long)]
        package: Option<String>,
        /// Only write these templates
        #[arg(long, value_delimiter = ',')]
        only: Vec<String>,
    },
    /// Export the template context as JSON
    Context {
        /// DDL file, or `-` for stdin
        input: String,
        #[arg(long)]
        out: PathBuf,
        #[arg(long)]
        package: Option<String>,
    },
    /// Render your own template files against the DDL
    Render {
        /// DDL file, or `-` for stdin
        input: String,
        #[arg(required = true)]
        templates: Vec<PathBuf>,
        #[arg(long)]
        package: Option<String>,
    },
    /// Print a sample DDL statement
    Sample,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let config = GeneratorConfig::load(cli.config.as_deref())?;

    let logging = if cli.verbose {
        LoggingConfig::verbose()
    } else if cli.quiet {
        LoggingConfig::quiet()
    } else {
        LoggingConfig::default()
    };
    let _guard = logging::init(logging.with_json_logs(config.log_json))?;
    config.log_source();

    run(cli.command, &config)
}

fn run(command: Command, config: &GeneratorConfig) -> Result<ExitCode> {
    match command {
        Command::Validate { input } => {
            let ddl = read_input(&input)?;
            let result = validate_only(&ddl, &config.generation_options(None));
            println!("{}", serde_json::to_string_pretty(&result)?);
            if !result.is_valid {
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::Parse { input, table } => {
            let parsed = parse_ddl(&read_input(&input)?)?;
            if table {
                println!("{}", column_table(&parsed));
            } else {
                println!("{}", serde_json::to_string_pretty(&parsed)?);
            }
        }
        Command::Preview {
            input,
            package,
            key,
        } => {
            let ddl = read_input(&input)?;
            let options = config.generation_options(package.as_deref());
            print!("{}", render_preview(&ddl, &options, key.as_deref())?);
        }
        Command::Generate {
            input,
            out,
            package,
            only,
        } => {
            let root = out
                .or_else(|| config.output_dir.clone())
                .context("No output directory: pass --out or set output_dir in the config")?;
            let selection = only
                .iter()
                .map(|key| parse_kind(key))
                .collect::<Result<Vec<_>>>()?;

            let ddl = read_input(&input)?;
            let files = generate_files(&ddl, &config.generation_options(package.as_deref()))?;
            let selection = (!selection.is_empty()).then_some(selection.as_slice());
            let written = write_files(&root, &files, selection)
                .with_context(|| format!("Failed to write files under {}", root.display()))?;

            for path in written {
                println!("{}", path.display());
            }
        }
        Command::Context {
            input,
            out,
            package,
        } => {
            let parsed = parse_ddl(&read_input(&input)?)?;
            let context =
                TemplateContext::new(&parsed, &config.generation_options(package.as_deref()));
            let path = export_context(&out, &context)?;
            println!("{}", path.display());
        }
        Command::Render {
            input,
            templates,
            package,
        } => {
            let ddl = read_input(&input)?;
            let written = render_custom_templates(
                &ddl,
                &templates,
                &config.generation_options(package.as_deref()),
            )?;
            for path in written {
                println!("{}", path.display());
            }
        }
        Command::Sample => println!("{}", sample_ddl()),
    }

    Ok(ExitCode::SUCCESS)
}

/// Read DDL from a file path, or stdin for `-`
fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut ddl = String::new();
        std::io::stdin()
            .read_to_string(&mut ddl)
            .context("Failed to read DDL from stdin")?;
        return Ok(ddl);
    }

    let path = Path::new(input);
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read DDL file: {}", path.display()))
}

fn parse_kind(key: &str) -> Result<TemplateKind> {
    TemplateKind::from_key(key).ok_or_else(|| unknown_template(key))
}

fn unknown_template(key: &str) -> anyhow::Error {
    let known: Vec<_> = TemplateKind::ALL.iter().map(TemplateKind::key).collect();
    anyhow!("Unknown template '{key}', expected one of: {}", known.join(", "))
}

/// Every preview under a `==== key ====` banner, or just the one named by `key`
fn render_preview(ddl: &str, options: &GenerationOptions, key: Option<&str>) -> Result<String> {
    let Some(key) = key else {
        let previews = generate_previews(ddl, options)?;
        let mut out = String::new();
        for (key, text) in &previews.previews {
            writeln!(out, "==== {key} ====\n{text}")?;
        }
        return Ok(out);
    };

    let parsed = parse_ddl(ddl)?;
    let context = TemplateContext::new(&parsed, options);
    let engine = CodeTemplateEngine::for_options(options)?;
    engine.render_key(key, &context).map_err(|err| match err {
        TemplateError::UnknownTemplate(_) => unknown_template(key),
        other => other.into(),
    })
}

fn column_table(parsed: &ParsedDdl) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(["Column", "Field", "SQL Type", "Java Type", "PK"]);

    for column in &parsed.attributes {
        table.add_row([
            column.column_name.as_str(),
            column.cc_name.as_str(),
            column.data_type.as_str(),
            column.java_type.as_str(),
            if column.is_primary_key { "yes" } else { "" },
        ]);
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_generate_arguments() {
        let cli = Cli::try_parse_from([
            "ddlforge", "-v", "generate", "board.sql", "--out", "app", "--only", "vo,mapper",
        ])
        .unwrap();

        assert!(cli.verbose);
        match cli.command {
            Command::Generate { input, out, only, .. } => {
                assert_eq!(input, "board.sql");
                assert_eq!(out, Some(PathBuf::from("app")));
                assert_eq!(only, vec!["vo", "mapper"]);
            }
            _ => panic!("expected generate"),
        }
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        assert!(Cli::try_parse_from(["ddlforge", "-v", "-q", "sample"]).is_err());
    }

    #[test]
    fn test_parse_kind() {
        assert_eq!(parse_kind("serviceimpl").unwrap(), TemplateKind::ServiceImpl);
        let err = parse_kind("entity").unwrap_err().to_string();
        assert!(err.contains("expected one of: vo, defaultVo"));
    }

    #[test]
    fn test_render_preview_single_key() {
        let ddl = "CREATE TABLE board (board_id INT PRIMARY KEY, title VARCHAR(100))";
        let options = GenerationOptions::new("com.acme");

        let vo = render_preview(ddl, &options, Some("VO")).unwrap();
        assert!(vo.starts_with("package com.acme.service;"));
        assert!(!vo.contains("===="));

        let err = render_preview(ddl, &options, Some("entity")).unwrap_err();
        assert!(err.to_string().starts_with("Unknown template 'entity'"));
    }

    #[test]
    fn test_render_preview_all_keys() {
        let ddl = "CREATE TABLE board (board_id INT PRIMARY KEY)";
        let all = render_preview(ddl, &GenerationOptions::default(), None).unwrap();

        assert_eq!(all.matches("==== ").count(), TemplateKind::ALL.len());
        assert!(all.contains("==== serviceImpl ====\n"));
    }

    #[test]
    fn test_read_input_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("board.sql");
        std::fs::write(&path, "CREATE TABLE board (id INT)").unwrap();

        let ddl = read_input(path.to_str().unwrap()).unwrap();
        assert_eq!(ddl, "CREATE TABLE board (id INT)");
        assert!(read_input(dir.path().join("missing.sql").to_str().unwrap()).is_err());
    }

    #[test]
    fn test_column_table_lists_columns() {
        let parsed = parse_ddl(sample_ddl()).unwrap();
        let rendered = column_table(&parsed).to_string();

        assert!(rendered.contains("createdDate"));
        assert!(rendered.contains("java.lang.String"));
        assert_eq!(rendered.matches("yes").count(), 1);
    }

    #[test]
    fn test_validate_command_exit_code() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.sql");
        std::fs::write(&path, "CREATE TABLE t (id INT").unwrap();

        let code = run(
            Command::Validate {
                input: path.to_string_lossy().into_owned(),
            },
            &GeneratorConfig::default(),
        )
        .unwrap();
        assert_eq!(code, ExitCode::FAILURE);
    }

    #[test]
    fn test_generate_command_writes_selection() {
        let dir = tempfile::tempdir().unwrap();
        let ddl = dir.path().join("board.sql");
        std::fs::write(&ddl, "CREATE TABLE board (board_id INT PRIMARY KEY, title VARCHAR(100))")
            .unwrap();
        let out = dir.path().join("app");

        run(
            Command::Generate {
                input: ddl.to_string_lossy().into_owned(),
                out: Some(out.clone()),
                package: Some("com.acme".into()),
                only: vec!["vo".into()],
            },
            &GeneratorConfig::default(),
        )
        .unwrap();

        assert!(out.join("src/main/java/com/acme/service/BoardVO.java").is_file());
        assert!(!out.join("src/main/java/com/acme/web/BoardController.java").exists());
    }

    #[test]
    fn test_generate_requires_output_dir() {
        let err = run(
            Command::Generate {
                input: "unused.sql".into(),
                out: None,
                package: None,
                only: Vec::new(),
            },
            &GeneratorConfig::default(),
        )
        .unwrap_err();
        assert!(err.to_string().starts_with("No output directory"));
    }
}
