//! Request and response types for the evaluation service.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Scalar value of a form field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FormValue {
    Integer(i64),
    Text(String),
}

impl std::fmt::Display for FormValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{}", n),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for FormValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FormValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for FormValue {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<i64> for FormValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for FormValue {
    fn from(value: i32) -> Self {
        Self::Integer(value.into())
    }
}

impl From<u32> for FormValue {
    fn from(value: u32) -> Self {
        Self::Integer(value.into())
    }
}

/// Ordered set of form fields sent to an endpoint.
///
/// Keys are unique: inserting an existing key replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormParams {
    fields: Vec<(String, FormValue)>,
}

impl FormParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a field, keeping the position of the first insert.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<FormValue>) {
        let key = key.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((key, value)),
        }
    }

    /// Builder form of [`FormParams::insert`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<FormValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&FormValue> {
        self.fields.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn remove(&mut self, key: &str) -> Option<FormValue> {
        let idx = self.fields.iter().position(|(k, _)| k == key)?;
        Some(self.fields.remove(idx).1)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FormValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Fields as string pairs, ready for form encoding.
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        self.fields
            .iter()
            .map(|(k, v)| (k.clone(), v.to_string()))
            .collect()
    }
}

impl<K, V> FromIterator<(K, V)> for FormParams
where
    K: Into<String>,
    V: Into<FormValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (k, v) in iter {
            params.insert(k, v);
        }
        params
    }
}

/// Successful response: the decoded JSON body and its status.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiResponse {
    /// HTTP status code.
    pub status: u16,

    /// Decoded body, passed through as-is.
    pub data: Value,
}

/// Parameters for reserving an online evaluation ticket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationLinkRequest {
    /// Year the evaluation token belongs to.
    pub anio: i64,

    /// Period the evaluation token belongs to.
    pub codigo_periodo: String,

    /// Course code in the unit's own nomenclature.
    pub codigo_curso: String,

    /// Course section in the unit's own nomenclature.
    pub seccion: String,

    /// Evaluator identifier, hashed by the calling unit.
    pub token: String,

    /// Enrollment slip the evaluation is filed under.
    pub numero_boleta: String,
}

impl EvaluationLinkRequest {
    pub(crate) fn to_params(&self) -> FormParams {
        FormParams::new()
            .with("anio", self.anio)
            .with("codigo_periodo", &self.codigo_periodo)
            .with("codigo_curso", &self.codigo_curso)
            .with("seccion", &self.seccion)
            .with("token", &self.token)
            .with("numero_boleta", &self.numero_boleta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_replaces_in_place() {
        let mut params = FormParams::new().with("a", 1).with("b", "x");
        params.insert("a", "one");

        let pairs = params.to_pairs();
        assert_eq!(
            pairs,
            vec![
                ("a".to_string(), "one".to_string()),
                ("b".to_string(), "x".to_string())
            ]
        );
    }

    #[test]
    fn test_remove() {
        let mut params: FormParams = [("fecha", "2024-03-01"), ("token", "t")]
            .into_iter()
            .collect();
        assert_eq!(params.remove("fecha"), Some(FormValue::from("2024-03-01")));
        assert_eq!(params.remove("fecha"), None);
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn test_form_value_display() {
        assert_eq!(FormValue::from(2024).to_string(), "2024");
        assert_eq!(FormValue::from(-3_i64).to_string(), "-3");
        assert_eq!(FormValue::from("000123").to_string(), "000123");
    }

    #[test]
    fn test_evaluation_link_params_order() {
        let request = EvaluationLinkRequest {
            anio: 2024,
            codigo_periodo: "1".to_string(),
            codigo_curso: "MAT101".to_string(),
            seccion: "A".to_string(),
            token: "abc123".to_string(),
            numero_boleta: "000123".to_string(),
        };

        let params = request.to_params();
        let keys: Vec<&str> = params.iter().map(|(k, _)| k).collect();
        assert_eq!(
            keys,
            vec![
                "anio",
                "codigo_periodo",
                "codigo_curso",
                "seccion",
                "token",
                "numero_boleta"
            ]
        );
    }
}
