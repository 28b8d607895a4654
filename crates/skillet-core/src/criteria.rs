use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Comparison operators accepted in a search criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SearchOperation {
    Equality,
    In,
    NotIn,
    Like,
    GreaterThanOrEqual,
    Contains,
    NotContains,
}

/// One immutable filter instruction: field key, operator, value.
///
/// The value is untyped JSON and is interpreted against the target field's
/// type when the criterion is compiled into a predicate. A criteria list is
/// always evaluated conjunctively; there is no OR or grouping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchCriteria {
    key: String,
    operation: SearchOperation,
    value: Value,
}

impl SearchCriteria {
    pub fn new(key: impl Into<String>, operation: SearchOperation, value: Value) -> Self {
        Self {
            key: key.into(),
            operation,
            value,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn operation(&self) -> SearchOperation {
        self.operation
    }

    pub fn value(&self) -> &Value {
        &self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_structural_equality() {
        let a = SearchCriteria::new("name", SearchOperation::Equality, json!("Pasta"));
        let b = SearchCriteria::new("name", SearchOperation::Equality, json!("Pasta"));
        let c = SearchCriteria::new("name", SearchOperation::Like, json!("Pasta"));

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_accessors() {
        let criterion =
            SearchCriteria::new("servingNumber", SearchOperation::GreaterThanOrEqual, json!(4));

        assert_eq!(criterion.key(), "servingNumber");
        assert_eq!(criterion.operation(), SearchOperation::GreaterThanOrEqual);
        assert_eq!(criterion.value(), &json!(4));
    }
}
