//! Search and ranking: turns a raw query string into filter terms, applies
//! them against the store, and optionally reorders results by great-circle
//! distance from a reference point.

use rusqlite::Connection;

use crate::db::repository::document::filter_by_terms;
use crate::db::DatabaseError;
use crate::geo::distance_km;
use crate::models::Document;

/// Typed search parameters, already parsed by the HTTP layer.
#[derive(Debug, Clone, Default)]
pub struct SearchRequest {
    /// Single keyword (`palavraChave`).
    pub keyword: Option<String>,
    /// Full-text query (`busca`). Preferred over `keyword` when both are
    /// given — a deliberate policy, not an accident of evaluation order.
    pub query: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// Lowercase the raw text and split it on whitespace into terms.
/// Empty or blank input yields no terms, which matches every document.
pub fn tokenize(raw: &str) -> Vec<String> {
    raw.to_lowercase()
        .split_whitespace()
        .map(String::from)
        .collect()
}

/// Run a search against the store.
///
/// Tokenizes `query` (falling back to `keyword`), filters with conjunctive
/// substring semantics, and — only when both coordinates are present —
/// stable-sorts ascending by distance. Documents without coordinates sort
/// last through the infinity convention; equal distances keep store order.
/// Without a full reference point the store's id order is returned as-is.
pub fn search_documents(
    conn: &Connection,
    request: &SearchRequest,
) -> Result<Vec<Document>, DatabaseError> {
    let raw = request
        .query
        .as_deref()
        .or(request.keyword.as_deref())
        .unwrap_or("");
    let terms = tokenize(raw);

    let mut docs = filter_by_terms(conn, &terms)?;

    if let (Some(lat), Some(lon)) = (request.latitude, request.longitude) {
        docs.sort_by(|a, b| {
            let dist_a = distance_km(Some(lat), Some(lon), a.latitude, a.longitude);
            let dist_b = distance_km(Some(lat), Some(lon), b.latitude, b.longitude);
            dist_a.total_cmp(&dist_b)
        });
    }

    Ok(docs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::open_memory_database;
    use crate::db::repository::document::insert_document;
    use crate::models::NewDocument;
    use chrono::NaiveDate;

    fn doc(title: &str, lat: Option<f64>, lon: Option<f64>) -> NewDocument {
        NewDocument {
            title: title.into(),
            author: None,
            body: "corpo do documento".into(),
            date: NaiveDate::from_ymd_opt(2025, 10, 24).unwrap(),
            latitude: lat,
            longitude: lon,
        }
    }

    #[test]
    fn tokenize_lowercases_and_splits_on_whitespace() {
        assert_eq!(tokenize("Carros  Antigos"), vec!["carros", "antigos"]);
        assert_eq!(tokenize("  \t FOO bar\n"), vec!["foo", "bar"]);
    }

    #[test]
    fn tokenize_of_blank_input_is_empty() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   ").is_empty());
    }

    #[test]
    fn full_query_takes_precedence_over_keyword() {
        let conn = open_memory_database().unwrap();
        insert_document(&conn, &doc("alpha documento", None, None)).unwrap();
        insert_document(&conn, &doc("beta documento", None, None)).unwrap();

        let request = SearchRequest {
            keyword: Some("alpha".into()),
            query: Some("beta".into()),
            ..Default::default()
        };
        let docs = search_documents(&conn, &request).unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].title, "beta documento");
    }

    #[test]
    fn keyword_is_used_when_query_is_absent() {
        let conn = open_memory_database().unwrap();
        insert_document(&conn, &doc("alpha documento", None, None)).unwrap();
        insert_document(&conn, &doc("beta documento", None, None)).unwrap();

        let request = SearchRequest {
            keyword: Some("alpha".into()),
            ..Default::default()
        };
        let docs = search_documents(&conn, &request).unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].title, "alpha documento");
    }

    #[test]
    fn no_parameters_at_all_returns_everything() {
        let conn = open_memory_database().unwrap();
        insert_document(&conn, &doc("um", None, None)).unwrap();
        insert_document(&conn, &doc("dois", None, None)).unwrap();

        let docs = search_documents(&conn, &SearchRequest::default()).unwrap();
        assert_eq!(docs.len(), 2);
    }

    #[test]
    fn proximity_sort_orders_by_ascending_distance() {
        let conn = open_memory_database().unwrap();
        // Inserted far-to-near so id order differs from distance order.
        insert_document(&conn, &doc("longe", Some(-31.5), Some(-53.0))).unwrap();
        insert_document(&conn, &doc("meio", Some(-30.1), Some(-51.2))).unwrap();
        insert_document(&conn, &doc("perto", Some(-30.0), Some(-51.0))).unwrap();

        let request = SearchRequest {
            query: Some("documento".into()),
            latitude: Some(-30.0),
            longitude: Some(-51.0),
            ..Default::default()
        };
        let docs = search_documents(&conn, &request).unwrap();
        let titles: Vec<&str> = docs.iter().map(|d| d.title.as_str()).collect();
        assert_eq!(titles, vec!["perto", "meio", "longe"]);
    }

    #[test]
    fn documents_without_coordinates_sort_last() {
        let conn = open_memory_database().unwrap();
        insert_document(&conn, &doc("sem coordenadas", None, None)).unwrap();
        insert_document(&conn, &doc("meia coordenada", Some(-30.0), None)).unwrap();
        insert_document(&conn, &doc("localizado", Some(-30.1), Some(-51.2))).unwrap();

        let request = SearchRequest {
            query: Some("documento".into()),
            latitude: Some(-30.0),
            longitude: Some(-51.0),
            ..Default::default()
        };
        let docs = search_documents(&conn, &request).unwrap();
        assert_eq!(docs[0].title, "localizado");
        // The two infinitely-far documents keep their store order.
        assert_eq!(docs[1].title, "sem coordenadas");
        assert_eq!(docs[2].title, "meia coordenada");
    }

    #[test]
    fn equal_distances_keep_store_order() {
        let conn = open_memory_database().unwrap();
        insert_document(&conn, &doc("primeiro", Some(-30.0), Some(-51.0))).unwrap();
        insert_document(&conn, &doc("segundo", Some(-30.0), Some(-51.0))).unwrap();

        let request = SearchRequest {
            query: Some("documento".into()),
            latitude: Some(-30.0),
            longitude: Some(-51.0),
            ..Default::default()
        };
        let docs = search_documents(&conn, &request).unwrap();
        assert_eq!(docs[0].title, "primeiro");
        assert_eq!(docs[1].title, "segundo");
    }

    #[test]
    fn partial_reference_point_leaves_store_order() {
        let conn = open_memory_database().unwrap();
        insert_document(&conn, &doc("longe", Some(-31.5), Some(-53.0))).unwrap();
        insert_document(&conn, &doc("perto", Some(-30.0), Some(-51.0))).unwrap();

        let request = SearchRequest {
            query: Some("documento".into()),
            latitude: Some(-30.0),
            ..Default::default()
        };
        let docs = search_documents(&conn, &request).unwrap();
        let titles: Vec<&str> = docs.iter().map(|d| d.title.as_str()).collect();
        assert_eq!(titles, vec!["longe", "perto"]);
    }
}
