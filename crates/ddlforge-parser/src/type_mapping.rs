//! SQL to Java type mapping
//!
//! A flat lookup keyed by the upper-cased base SQL type. Anything the table
//! does not know maps to [`FALLBACK_JAVA_TYPE`] so the generated code still
//! compiles with a usable field.

/// Java type used for SQL types with no entry in the table
pub const FALLBACK_JAVA_TYPE: &str = "java.lang.Object";

/// Map a base SQL type (`VARCHAR`, `int`, `Timestamp`...) to a Java type.
///
/// The lookup is case-insensitive. Size or precision parameters must already
/// be stripped; `VARCHAR(10)` is not a known key.
pub fn java_type_for(data_type: &str) -> &'static str {
    match data_type.to_uppercase().as_str() {
        "VARCHAR" | "VARCHAR2" | "CHAR" | "TEXT" | "MEDIUMTEXT" => "java.lang.String",
        "INT" | "INTEGER" | "NUMBER" => "java.lang.Integer",
        "BIGINT" => "java.lang.Long",
        "SMALLINT" => "java.lang.Short",
        "TINYINT" => "java.lang.Byte",
        "DECIMAL" | "NUMERIC" => "java.math.BigDecimal",
        "FLOAT" => "java.lang.Float",
        "REAL" | "DOUBLE" => "java.lang.Double",
        "DATE" => "java.sql.Date",
        "TIME" => "java.sql.Time",
        "DATETIME" => "java.util.Date",
        "TIMESTAMP" => "java.sql.Timestamp",
        "BOOLEAN" | "BIT" => "java.lang.Boolean",
        _ => FALLBACK_JAVA_TYPE,
    }
}
