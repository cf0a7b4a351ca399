//! Template helpers for MiniJinja

use minijinja::value::Rest;
use minijinja::{Environment, Value};

/// Helpers available to every code template
pub struct TemplateHelpers;

impl TemplateHelpers {
    /// Lower-case a string; anything that is not a string renders as empty
    pub fn lowercase(value: &Value) -> String {
        value.as_str().map(str::to_lowercase).unwrap_or_default()
    }

    pub fn uppercase(value: &Value) -> String {
        value.as_str().map(str::to_uppercase).unwrap_or_default()
    }

    /// True for none, undefined and the empty string
    pub fn is_empty(value: &Value) -> bool {
        value.is_none() || value.is_undefined() || value.as_str() == Some("")
    }

    /// Join the display form of every argument
    pub fn concat(values: &[Value]) -> String {
        values.iter().map(ToString::to_string).collect()
    }

    /// Markup shown in place of a template section that cannot be produced
    pub fn error_markup(message: &str) -> String {
        format!(r#"<span class="error">{message}</span>"#)
    }
}

/// Register all helpers with a MiniJinja environment
pub fn register_helpers(env: &mut Environment) {
    env.add_filter("lowercase", |value: Value| TemplateHelpers::lowercase(&value));
    env.add_filter("uppercase", |value: Value| TemplateHelpers::uppercase(&value));
    env.add_filter("empty", |value: Value| TemplateHelpers::is_empty(&value));
    env.add_function("empty", |value: Value| TemplateHelpers::is_empty(&value));
    env.add_function("eq", |a: Value, b: Value| a == b);
    env.add_function("concat", |values: Rest<Value>| {
        TemplateHelpers::concat(&values)
    });
    env.add_function("error", |message: String| {
        tracing::error!(message = %message, "Template raised an error");
        Value::from_safe_string(TemplateHelpers::error_markup(&message))
    });
}
