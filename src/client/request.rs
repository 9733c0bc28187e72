//! Per-call options: JSON body and query parameters.

use serde::Serialize;
use serde_json::Value;

use crate::{Error, Result};

/// Body and query parameters for a single [`request`](crate::KillbClient::request).
///
/// # Example
///
/// ```
/// use killb::RequestOptions;
/// use serde_json::json;
///
/// let options = RequestOptions::new()
///     .with_json(json!({"userId": "usr_1"}))
///     .with_query_pair("limit", "10");
/// ```
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub(crate) json: Option<Value>,
    pub(crate) query: Vec<(String, String)>,
}

impl RequestOptions {
    /// Options with no body and no query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Send `body` as the JSON request body.
    pub fn with_json(mut self, body: Value) -> Self {
        self.json = Some(body);
        self
    }

    /// Serialize `body` and send it as the JSON request body.
    pub fn with_body<B: Serialize + ?Sized>(self, body: &B) -> Result<Self> {
        let value = serde_json::to_value(body)
            .map_err(|e| Error::InvalidInput(format!("Request body is not serializable: {}", e)))?;
        Ok(self.with_json(value))
    }

    /// Append one query parameter.
    pub fn with_query_pair(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Append every field of `query` as a query parameter.
    ///
    /// `query` must serialize to a JSON object. Null fields are skipped,
    /// lists are joined with commas, nested objects are rejected.
    pub fn with_query<Q: Serialize + ?Sized>(mut self, query: &Q) -> Result<Self> {
        let value = serde_json::to_value(query)
            .map_err(|e| Error::InvalidInput(format!("Query is not serializable: {}", e)))?;
        self.query.extend(query_pairs(value)?);
        Ok(self)
    }

    /// The JSON body, if any.
    pub fn json(&self) -> Option<&Value> {
        self.json.as_ref()
    }

    /// The query parameters, in insertion order.
    pub fn query(&self) -> &[(String, String)] {
        &self.query
    }
}

fn query_pairs(value: Value) -> Result<Vec<(String, String)>> {
    let Value::Object(map) = value else {
        return Err(Error::InvalidInput(
            "Query parameters must serialize to an object".to_string(),
        ));
    };

    let mut pairs = Vec::with_capacity(map.len());
    for (key, value) in map {
        if let Some(rendered) = render_query_value(&key, value)? {
            pairs.push((key, rendered));
        }
    }
    Ok(pairs)
}

fn render_query_value(key: &str, value: Value) -> Result<Option<String>> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Bool(b) => Ok(Some(b.to_string())),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::Array(items) => {
            let mut parts = Vec::with_capacity(items.len());
            for item in items {
                if let Some(part) = render_query_value(key, item)? {
                    parts.push(part);
                }
            }
            Ok(Some(parts.join(",")))
        }
        Value::Object(_) => Err(Error::InvalidInput(format!(
            "Query parameter {} cannot be a nested object",
            key
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_query_pairs_render_scalars() {
        let options = RequestOptions::new()
            .with_query(&json!({
                "limit": 10,
                "active": true,
                "status": "COMPLETED",
                "externalId": null,
                "ownerUsers": ["u1", "u2"]
            }))
            .unwrap();

        let query = options.query();
        assert!(query.contains(&("limit".to_string(), "10".to_string())));
        assert!(query.contains(&("active".to_string(), "true".to_string())));
        assert!(query.contains(&("status".to_string(), "COMPLETED".to_string())));
        assert!(query.contains(&("ownerUsers".to_string(), "u1,u2".to_string())));
        assert!(!query.iter().any(|(k, _)| k == "externalId"));
    }

    #[test]
    fn test_query_rejects_non_objects() {
        assert!(RequestOptions::new().with_query(&json!([1, 2])).is_err());
        assert!(RequestOptions::new()
            .with_query(&json!({"nested": {"a": 1}}))
            .is_err());
    }

    #[test]
    fn test_with_body() {
        let options = RequestOptions::new()
            .with_body(&json!({"UserId": "usr_1"}))
            .unwrap();
        assert_eq!(options.json(), Some(&json!({"UserId": "usr_1"})));
    }
}
