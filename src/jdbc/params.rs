use serde_json::Value;

use crate::error::Result;
use crate::jdbc::dialects::Dialect;

/// URL parameters for one dialect, in configuration order.
pub type ParamMap = serde_json::Map<String, Value>;

/// Append extra connection parameters to a JDBC URL.
///
/// The dialect is picked from the `jdbc:<name>:` prefix of `url`. Keys arrive
/// in the lowercase hyphenated spelling used in configuration and are
/// rewritten to the spelling the driver expects; values are rendered per
/// dialect. The parameter section is introduced with the dialect's starter
/// unless the URL already contains one, in which case the joiner is used.
///
/// Keys and values are appended verbatim after transformation, with no
/// escaping; callers supply characters that are legal in the target URL.
pub fn merge(url: &str, params: &ParamMap) -> Result<String> {
    let dialect = Dialect::for_url(url)?;

    if params.is_empty() {
        return Ok(url.to_string());
    }

    let queries: Vec<String> = params
        .iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                dialect.convert_key(key),
                dialect.convert_value(value)
            )
        })
        .collect();

    let lead = if url.contains(dialect.starter()) {
        dialect.joiner()
    } else {
        dialect.starter()
    };

    Ok(format!("{}{}{}", url, lead, queries.join(dialect.joiner())))
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use super::*;
    use crate::error::Error;

    fn params(value: Value) -> ParamMap {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_merge_mysql_starts_parameter_section() {
        let merged = merge(
            "jdbc:mysql://h/db",
            &params(json!({"use-ssl": true, "character-encoding": "utf8"})),
        )
        .unwrap();

        assert_eq!(merged, "jdbc:mysql://h/db?useSSL=true&characterEncoding=utf8");
    }

    #[test]
    fn test_merge_mysql_extends_existing_parameter_section() {
        let merged = merge("jdbc:mysql://h/db?x=1", &params(json!({"foo-bar": 2}))).unwrap();

        assert_eq!(merged, "jdbc:mysql://h/db?x=1&fooBar=2");
    }

    #[test]
    fn test_merge_h2() {
        let merged = merge(
            "jdbc:h2:mem:test",
            &params(json!({"db-close-delay": -1, "mode": "MySQL"})),
        )
        .unwrap();

        assert_eq!(merged, "jdbc:h2:mem:test;DB_CLOSE_DELAY=-1;MODE=MySQL");
    }

    #[test]
    fn test_merge_h2_uppercases_boolean_values() {
        let merged = merge("jdbc:h2:mem:test", &params(json!({"ignorecase": true}))).unwrap();

        assert_eq!(merged, "jdbc:h2:mem:test;IGNORECASE=TRUE");
    }

    #[test]
    fn test_merge_empty_params_is_identity() {
        let merged = merge("jdbc:mysql://h/db", &ParamMap::new()).unwrap();

        assert_eq!(merged, "jdbc:mysql://h/db");
    }

    #[test]
    fn test_merge_unknown_dialect() {
        let err = merge("jdbc:oracle:thin:@h", &params(json!({"any": 1}))).unwrap_err();

        assert!(matches!(err, Error::UnknownDialect(url) if url == "jdbc:oracle:thin:@h"));
    }

    #[test]
    fn test_merge_unknown_dialect_with_empty_params() {
        // the prefix scan runs before the empty check
        assert!(merge("jdbc:oracle:thin:@h", &ParamMap::new()).is_err());
    }

    #[test]
    fn test_merge_preserves_parameter_order() {
        let merged = merge("jdbc:mysql://h/db", &params(json!({"b": 1, "a": 2, "c": 3}))).unwrap();

        assert_eq!(merged, "jdbc:mysql://h/db?b=1&a=2&c=3");
    }

    #[test]
    fn test_merge_always_starts_with_the_input_url() {
        let url = "jdbc:h2:mem:test;MODE=MySQL";
        let merged = merge(url, &params(json!({"ignorecase": true}))).unwrap();

        assert!(merged.starts_with(url));
        assert_eq!(merged, "jdbc:h2:mem:test;MODE=MySQL;IGNORECASE=TRUE");
    }

    #[test]
    fn test_merge_tolerates_null_values_and_empty_keys() {
        let merged = merge("jdbc:mysql://h/db", &params(json!({"k": null, "": ""}))).unwrap();

        assert_eq!(merged, "jdbc:mysql://h/db?k=null&=");
    }
}
