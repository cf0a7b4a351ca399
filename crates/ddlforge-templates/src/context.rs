//! Template context built from a parsed table

use chrono::{NaiveDate, Utc};
use ddlforge_parser::naming::lower_first;
use ddlforge_parser::{Column, ParsedDdl};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Package used when the caller does not supply one
pub const DEFAULT_PACKAGE_NAME: &str = "egovframework.example.sample";

/// Caller-supplied settings that sit outside the DDL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationOptions {
    /// Java package, e.g. `com.example.board`
    pub package_name: String,
    pub author: String,
    pub version: String,
    /// Fixed generation date; today (UTC) when `None`
    pub date: Option<NaiveDate>,
    /// Directory whose files replace bundled templates of the same name
    pub templates_dir: Option<PathBuf>,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            package_name: DEFAULT_PACKAGE_NAME.to_string(),
            author: "author".to_string(),
            version: "1.0.0".to_string(),
            date: None,
            templates_dir: None,
        }
    }
}

impl GenerationOptions {
    /// Options for the given package with default metadata
    pub fn new(package_name: impl Into<String>) -> Self {
        Self {
            package_name: package_name.into(),
            ..Self::default()
        }
    }

    /// Use `package_name` unless it is blank
    pub fn with_package(mut self, package_name: Option<&str>) -> Self {
        if let Some(name) = package_name.map(str::trim).filter(|name| !name.is_empty()) {
            self.package_name = name.to_string();
        }
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn with_templates_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.templates_dir = Some(dir.into());
        self
    }
}

/// Everything a code template can reference.
///
/// Serialised with camelCase keys; the same JSON is what
/// [`crate::export_context`] writes to disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateContext {
    /// MyBatis mapper namespace
    pub namespace: String,
    pub result_map_id: String,
    pub result_map_type: String,
    pub table_name: String,
    pub attributes: Vec<Column>,
    pub pk_attributes: Vec<Column>,
    /// Columns outside the primary key, in source order
    pub non_key_attributes: Vec<Column>,
    pub parameter_type: String,
    pub result_type: String,
    pub sort_order: String,
    pub search_keyword: String,
    pub search_condition: i32,
    pub package_name: String,
    /// `package_name` with dots replaced by slashes
    pub package_path: String,
    pub class_name: String,
    pub class_name_first_char_lower: String,
    pub author: String,
    /// Generation date as `YYYY-MM-DD`
    pub date: String,
    pub version: String,
}

impl TemplateContext {
    /// Build the context for `parsed` using the package and metadata in `options`
    pub fn new(parsed: &ParsedDdl, options: &GenerationOptions) -> Self {
        let table = parsed.table_name.as_str();
        let package = options.package_name.as_str();
        let vo_type = format!("{package}.service.{table}VO");
        let date = options.date.unwrap_or_else(|| Utc::now().date_naive());

        Self {
            namespace: format!("{package}.service.impl.{table}Mapper"),
            result_map_id: format!("{table}Result"),
            result_map_type: vo_type.clone(),
            table_name: table.to_string(),
            attributes: parsed.attributes.clone(),
            pk_attributes: parsed.pk_attributes.clone(),
            non_key_attributes: parsed.non_key_attributes().cloned().collect(),
            parameter_type: vo_type,
            result_type: "egovMap".to_string(),
            sort_order: "SORT_ORDR".to_string(),
            search_keyword: String::new(),
            search_condition: 0,
            package_name: package.to_string(),
            package_path: package.replace('.', "/"),
            class_name: table.to_string(),
            class_name_first_char_lower: lower_first(table),
            author: options.author.clone(),
            date: date.format("%Y-%m-%d").to_string(),
            version: options.version.clone(),
        }
    }

    /// Lower-cased table name, used for view directories
    pub fn view_dir(&self) -> String {
        self.table_name.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ddlforge_parser::parse_ddl;
    use pretty_assertions::assert_eq;

    fn board() -> ParsedDdl {
        parse_ddl("CREATE TABLE board (board_id INT, title VARCHAR(200), PRIMARY KEY (board_id))")
            .unwrap()
    }

    #[test]
    fn test_context_fields() {
        let options = GenerationOptions::new("com.example.app")
            .with_author("dev")
            .with_version("2.1")
            .with_date(NaiveDate::from_ymd_opt(2024, 3, 9).unwrap());
        let ctx = TemplateContext::new(&board(), &options);

        assert_eq!(ctx.namespace, "com.example.app.service.impl.BoardMapper");
        assert_eq!(ctx.result_map_id, "BoardResult");
        assert_eq!(ctx.result_map_type, "com.example.app.service.BoardVO");
        assert_eq!(ctx.parameter_type, ctx.result_map_type);
        assert_eq!(ctx.result_type, "egovMap");
        assert_eq!(ctx.sort_order, "SORT_ORDR");
        assert_eq!(ctx.package_path, "com/example/app");
        assert_eq!(ctx.class_name, "Board");
        assert_eq!(ctx.class_name_first_char_lower, "board");
        assert_eq!(ctx.author, "dev");
        assert_eq!(ctx.version, "2.1");
        assert_eq!(ctx.date, "2024-03-09");
        assert_eq!(ctx.attributes.len(), 2);
        assert_eq!(ctx.pk_attributes[0].column_name, "board_id");
        assert_eq!(ctx.non_key_attributes.len(), 1);
        assert_eq!(ctx.non_key_attributes[0].column_name, "title");
    }

    #[test]
    fn test_default_options() {
        let ctx = TemplateContext::new(&board(), &GenerationOptions::default());
        assert_eq!(ctx.package_name, DEFAULT_PACKAGE_NAME);
        assert_eq!(ctx.author, "author");
        assert_eq!(ctx.version, "1.0.0");
        assert_eq!(ctx.date.len(), 10);
    }

    #[test]
    fn test_blank_package_keeps_default() {
        let options = GenerationOptions::default().with_package(Some("   "));
        assert_eq!(options.package_name, DEFAULT_PACKAGE_NAME);

        let options = GenerationOptions::default().with_package(Some(" com.acme "));
        assert_eq!(options.package_name, "com.acme");

        let options = GenerationOptions::default().with_package(None);
        assert_eq!(options.package_name, DEFAULT_PACKAGE_NAME);
    }

    #[test]
    fn test_serializes_camel_case_keys() {
        let options = GenerationOptions::default()
            .with_date(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        let json = serde_json::to_value(TemplateContext::new(&board(), &options)).unwrap();

        assert_eq!(json["resultMapId"], "BoardResult");
        assert_eq!(json["classNameFirstCharLower"], "board");
        assert_eq!(json["searchCondition"], 0);
        assert_eq!(json["attributes"][0]["ccName"], "boardId");
        assert_eq!(json["attributes"][0]["isPrimaryKey"], true);
        assert_eq!(json["pkAttributes"][0]["javaType"], "java.lang.Integer");
        assert_eq!(json["nonKeyAttributes"][0]["ccName"], "title");
    }

    #[test]
    fn test_underscore_table_keeps_class_name() {
        let parsed = parse_ddl("CREATE TABLE order_item (id INT)").unwrap();
        let ctx = TemplateContext::new(&parsed, &GenerationOptions::default());
        assert_eq!(ctx.class_name, "Order_item");
        assert_eq!(ctx.class_name_first_char_lower, "order_item");
        assert_eq!(ctx.view_dir(), "order_item");
    }
}
