//! Variable environment used during evaluation

use std::collections::HashMap;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BindingError {
    #[error("Binding must look like name=value: {0}")]
    MissingEquals(String),
    #[error("Binding name cannot be empty: {0}")]
    EmptyName(String),
    #[error("Binding value is not a number: {0}")]
    InvalidValue(String),
}

/// Maps variable names to the values they take during evaluation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bindings {
    values: HashMap<String, f64>,
}

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: f64) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: f64) -> Option<f64> {
        self.values.insert(name.into(), value)
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for Bindings {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        let mut bindings = Bindings::new();
        for (name, value) in iter {
            bindings.insert(name, value);
        }
        bindings
    }
}

/// # Errors
///
/// Returns an error if the text is not `name=value` with a non-empty name and
/// a numeric value.
pub fn parse_binding(text: &str) -> Result<(String, f64), BindingError> {
    let (name, value) = text
        .split_once('=')
        .ok_or_else(|| BindingError::MissingEquals(text.to_string()))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(BindingError::EmptyName(text.to_string()));
    }
    let value = value
        .trim()
        .parse::<f64>()
        .map_err(|_| BindingError::InvalidValue(text.to_string()))?;
    Ok((name.to_string(), value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_binding() {
        let result = parse_binding("x=3.5");
        assert!(result.is_ok());
        if let Ok((name, value)) = result {
            assert_eq!(name, "x");
            assert_eq!(value, 3.5);
        }
    }

    #[test]
    fn test_parse_binding_errors() {
        assert_eq!(
            parse_binding("x"),
            Err(BindingError::MissingEquals("x".to_string()))
        );
        assert_eq!(
            parse_binding("=4"),
            Err(BindingError::EmptyName("=4".to_string()))
        );
        assert_eq!(
            parse_binding("x=four"),
            Err(BindingError::InvalidValue("x=four".to_string()))
        );
    }

    #[test]
    fn test_from_iterator_keeps_last_value() {
        let bindings: Bindings = vec![("a", 1.0), ("b", 2.0), ("a", 3.0)].into_iter().collect();
        assert_eq!(bindings.len(), 2);
        assert_eq!(bindings.get("a"), Some(3.0));
        assert_eq!(bindings.get("c"), None);
    }
}
