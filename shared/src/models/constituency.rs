//! Constituency Model

use serde::{Deserialize, Serialize};

/// Constituency entity, referenced by booths
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Constituency {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default, alias = "constituencyNo", alias = "number")]
    pub constituency_number: Option<i64>,
}

impl Constituency {
    /// Selector label: "12 - North Ward", or the bare name without a number
    pub fn label(&self) -> String {
        match self.constituency_number {
            Some(number) => format!("{} - {}", number, self.name),
            None => self.name.clone(),
        }
    }
}

/// Create / update constituency payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConstituencyPayload {
    pub name: String,
    pub constituency_number: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_aliases() {
        let a: Constituency =
            serde_json::from_str(r#"{"id":1,"name":"North","constituencyNo":12}"#).unwrap();
        let b: Constituency = serde_json::from_str(r#"{"id":1,"name":"North","number":12}"#).unwrap();
        assert_eq!(a.constituency_number, Some(12));
        assert_eq!(a, b);
        assert_eq!(a.label(), "12 - North");
    }

    #[test]
    fn test_label_without_number() {
        let c: Constituency = serde_json::from_str(r#"{"id":4,"name":"South"}"#).unwrap();
        assert_eq!(c.label(), "South");
    }
}
