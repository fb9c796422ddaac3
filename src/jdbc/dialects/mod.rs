mod h2;
mod mysql;

use serde_json::Value;

use crate::error::{Error, Result};

/// A database dialect's URL parameter conventions.
///
/// Each entry carries the characters that introduce and separate the
/// parameter section of its JDBC URLs, together with the key and value
/// rewrites expected by its driver.
#[derive(Debug, Clone, Copy)]
pub struct Dialect {
    name: &'static str,
    starter: &'static str,
    joiner: &'static str,
    key_transform: fn(&str) -> String,
    value_transform: fn(&Value) -> String,
}

/// Known dialects, scanned in declaration order.
const DIALECTS: &[Dialect] = &[h2::H2, mysql::MYSQL];

impl Dialect {
    /// Resolve the dialect whose `jdbc:<name>:` prefix matches the URL.
    pub fn for_url(url: &str) -> Result<&'static Dialect> {
        DIALECTS
            .iter()
            .find(|dialect| {
                url.strip_prefix("jdbc:")
                    .and_then(|rest| rest.strip_prefix(dialect.name))
                    .is_some_and(|rest| rest.starts_with(':'))
            })
            .ok_or_else(|| Error::UnknownDialect(url.to_string()))
    }

    /// Dialect name (e.g. "mysql"), the token after `jdbc:`
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Character that begins the parameter section
    pub(crate) fn starter(&self) -> &'static str {
        self.starter
    }

    /// Character that separates successive parameters
    pub(crate) fn joiner(&self) -> &'static str {
        self.joiner
    }

    pub(crate) fn convert_key(&self, key: &str) -> String {
        (self.key_transform)(key)
    }

    pub(crate) fn convert_value(&self, value: &Value) -> String {
        (self.value_transform)(value)
    }
}

/// List of dialect names with parameter support
pub fn supported_dialects() -> Vec<&'static str> {
    DIALECTS.iter().map(|dialect| dialect.name).collect()
}

/// Replace every `-` followed by a lowercase ASCII letter with that letter
/// uppercased: `foo-bar-baz` -> `fooBarBaz`. Other characters pass through.
pub(crate) fn hyphen_to_camel(key: &str) -> String {
    let mut converted = String::with_capacity(key.len());
    let mut chars = key.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '-' {
            if let Some(next) = chars.peek().copied().filter(char::is_ascii_lowercase) {
                converted.push(next.to_ascii_uppercase());
                chars.next();
                continue;
            }
        }
        converted.push(ch);
    }

    converted
}

/// Default scalar rendering: strings verbatim, booleans `true`/`false`,
/// numbers in decimal form, null as the token `null`.
pub(crate) fn render_scalar(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
