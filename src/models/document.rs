use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A stored document.
///
/// Struct fields are idiomatic Rust; the wire shape keeps the public API's
/// Portuguese field names via serde renames. `date` serializes as
/// `YYYY-MM-DD` (no time component).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: i64,
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "autor")]
    pub author: Option<String>,
    #[serde(rename = "conteudo")]
    pub body: String,
    #[serde(rename = "data")]
    pub date: NaiveDate,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// A validated document that has not been persisted yet.
/// The store assigns the id on insert.
#[derive(Debug, Clone)]
pub struct NewDocument {
    pub title: String,
    pub author: Option<String>,
    pub body: String,
    pub date: NaiveDate,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}
