use serde_json::Value;

use super::{hyphen_to_camel, render_scalar, Dialect};

/// H2 separates every URL segment with `;` and spells parameters UPPER_SNAKE.
pub(super) const H2: Dialect = Dialect {
    name: "h2",
    starter: ";",
    joiner: ";",
    key_transform: convert_key,
    value_transform: convert_value,
};

/// `db-close-delay` -> `dbCloseDelay` -> `db_Close_Delay` -> `DB_CLOSE_DELAY`
fn convert_key(key: &str) -> String {
    let camel = hyphen_to_camel(key);

    // Underscore between a lowercase letter and the uppercase run that
    // follows it; the run gets a single leading underscore.
    let mut spaced = String::with_capacity(camel.len() + 4);
    let mut prev_lower = false;
    for ch in camel.chars() {
        if prev_lower && ch.is_ascii_uppercase() {
            spaced.push('_');
        }
        prev_lower = ch.is_ascii_lowercase();
        spaced.push(ch);
    }

    spaced.to_uppercase()
}

fn convert_value(value: &Value) -> String {
    let converted = render_scalar(value);

    if value.is_boolean() {
        converted.to_uppercase()
    } else {
        converted
    }
}
