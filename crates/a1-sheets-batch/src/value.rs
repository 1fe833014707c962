//! Scalar cell values carried by value operations

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single cell value as sent to or received from the service
///
/// Serialized as plain JSON: `null`, a boolean, a number or a string.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellScalar {
    /// Empty cell
    #[default]
    Empty,
    Bool(bool),
    Number(f64),
    Text(String),
}

impl CellScalar {
    /// Check if the value is empty
    pub fn is_empty(&self) -> bool {
        matches!(self, CellScalar::Empty)
    }
}

impl fmt::Display for CellScalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellScalar::Empty => Ok(()),
            CellScalar::Bool(b) => write!(f, "{}", if *b { "TRUE" } else { "FALSE" }),
            CellScalar::Number(n) => write!(f, "{}", n),
            CellScalar::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<bool> for CellScalar {
    fn from(value: bool) -> Self {
        CellScalar::Bool(value)
    }
}

impl From<f64> for CellScalar {
    fn from(value: f64) -> Self {
        CellScalar::Number(value)
    }
}

impl From<i32> for CellScalar {
    fn from(value: i32) -> Self {
        CellScalar::Number(f64::from(value))
    }
}

impl From<&str> for CellScalar {
    fn from(value: &str) -> Self {
        CellScalar::Text(value.to_string())
    }
}

impl From<String> for CellScalar {
    fn from(value: String) -> Self {
        CellScalar::Text(value)
    }
}

impl<T: Into<CellScalar>> From<Option<T>> for CellScalar {
    fn from(value: Option<T>) -> Self {
        value.map_or(CellScalar::Empty, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_shape() {
        let row = vec![
            CellScalar::Empty,
            CellScalar::Bool(true),
            CellScalar::Number(2.5),
            CellScalar::Text("x".into()),
        ];
        assert_eq!(
            serde_json::to_string(&row).unwrap(),
            r#"[null,true,2.5,"x"]"#
        );

        let parsed: Vec<CellScalar> = serde_json::from_str(r#"[null, false, 3, "y"]"#).unwrap();
        assert_eq!(
            parsed,
            vec![
                CellScalar::Empty,
                CellScalar::Bool(false),
                CellScalar::Number(3.0),
                CellScalar::Text("y".into()),
            ]
        );
    }

    #[test]
    fn test_conversions() {
        assert_eq!(CellScalar::from("a"), CellScalar::Text("a".into()));
        assert_eq!(CellScalar::from(7), CellScalar::Number(7.0));
        assert_eq!(CellScalar::from(None::<f64>), CellScalar::Empty);
        assert_eq!(CellScalar::from(Some(true)), CellScalar::Bool(true));
        assert!(CellScalar::default().is_empty());
        assert_eq!(CellScalar::Bool(true).to_string(), "TRUE");
    }
}
