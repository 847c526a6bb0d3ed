use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Идентификатор записи: backend отдаёт его то числом, то строкой
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
    /// Любое другое значение (дробное число, объект), хранится как есть
    Other(Value),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Number(n) => write!(f, "{}", n),
            RecordId::Text(s) => f.write_str(s),
            RecordId::Other(v) => write!(f, "{}", v),
        }
    }
}
