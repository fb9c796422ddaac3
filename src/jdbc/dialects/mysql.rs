use super::{hyphen_to_camel, render_scalar, Dialect};

/// MySQL carries parameters in a trailing query string: `?first=1&second=2`.
pub(super) const MYSQL: Dialect = Dialect {
    name: "mysql",
    starter: "?",
    joiner: "&",
    key_transform: convert_key,
    value_transform: render_scalar,
};

/// `use-ssl` -> `useSsl` -> `useSSL`; Connector/J spells the property `useSSL`
fn convert_key(key: &str) -> String {
    let camel = hyphen_to_camel(key);

    if camel == "useSsl" {
        "useSSL".to_string()
    } else {
        camel
    }
}
