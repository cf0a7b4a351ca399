//! Identifier case conversion
//!
//! Column names go through a full snake_case to camelCase conversion before
//! being PascalCased. Table names do not: they are lower-cased and only the
//! first character is upper-cased, so `order_item` becomes `Order_item`.
//! Generated file and class names depend on that asymmetry.

use regex::{Captures, Regex};
use std::sync::LazyLock;

static SNAKE_SEGMENT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"_([a-z])").expect("valid regex"));

/// Convert a snake_case identifier to lowerCamelCase.
///
/// The input is lower-cased first, then every `_x` becomes `X`. Underscores
/// that are not followed by a letter are kept.
pub fn to_camel_case(name: &str) -> String {
    let lowered = name.to_lowercase();
    SNAKE_SEGMENT_REGEX
        .replace_all(&lowered, |caps: &Captures| caps[1].to_uppercase())
        .into_owned()
}

/// Upper-case the first character, leaving the rest untouched.
pub fn to_pascal_case(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lower-case the first character, leaving the rest untouched.
pub fn lower_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Class-name form of a raw table identifier (`ORDER_ITEM` -> `Order_item`)
pub fn table_class_name(raw: &str) -> String {
    to_pascal_case(&raw.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_case_from_snake_case() {
        assert_eq!(to_camel_case("user_name"), "userName");
        assert_eq!(to_camel_case("created_at_utc"), "createdAtUtc");
        assert_eq!(to_camel_case("id"), "id");
    }

    #[test]
    fn test_camel_case_lowercases_first() {
        assert_eq!(to_camel_case("USER_NAME"), "userName");
        assert_eq!(to_camel_case("CreatedDate"), "createddate");
    }

    #[test]
    fn test_camel_case_keeps_underscores_before_non_letters() {
        assert_eq!(to_camel_case("addr_1"), "addr_1");
        assert_eq!(to_camel_case("a__b"), "a_B");
        assert_eq!(to_camel_case("trailing_"), "trailing_");
    }

    #[test]
    fn test_pascal_case() {
        assert_eq!(to_pascal_case("userName"), "UserName");
        assert_eq!(to_pascal_case("id"), "Id");
        assert_eq!(to_pascal_case(""), "");
    }

    #[test]
    fn test_lower_first() {
        assert_eq!(lower_first("Users"), "users");
        assert_eq!(lower_first("Order_item"), "order_item");
        assert_eq!(lower_first(""), "");
    }

    #[test]
    fn test_table_class_name_keeps_underscores() {
        assert_eq!(table_class_name("order_item"), "Order_item");
        assert_eq!(table_class_name("SAMPLE_TABLE"), "Sample_table");
        assert_eq!(table_class_name("users"), "Users");
    }
}
