use rusqlite::{params, Connection};

use crate::db::DatabaseError;
use crate::models::{Document, NewDocument};

/// Insert a new document and return it with the store-assigned id.
///
/// A single INSERT — atomic, so a failure leaves no partial record.
pub fn insert_document(conn: &Connection, doc: &NewDocument) -> Result<Document, DatabaseError> {
    conn.execute(
        "INSERT INTO documents (title, author, body, document_date, latitude, longitude)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            doc.title,
            doc.author,
            doc.body,
            doc.date,
            doc.latitude,
            doc.longitude,
        ],
    )?;

    Ok(Document {
        id: conn.last_insert_rowid(),
        title: doc.title.clone(),
        author: doc.author.clone(),
        body: doc.body.clone(),
        date: doc.date,
        latitude: doc.latitude,
        longitude: doc.longitude,
    })
}

/// Return every document where each term occurs, case-insensitively, in at
/// least one of title, body, or author (AND across terms, OR across fields).
///
/// Empty `terms` returns all documents. Results come back in id order.
/// Matching is a literal substring predicate evaluated here in Rust over a
/// parameter-free SELECT — term contents never reach the SQL text, so query
/// metacharacters are plain characters that either match literally or not
/// at all.
pub fn filter_by_terms(
    conn: &Connection,
    terms: &[String],
) -> Result<Vec<Document>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT id, title, author, body, document_date, latitude, longitude
         FROM documents ORDER BY id",
    )?;
    let rows = stmt.query_map([], row_to_document)?;

    let mut docs = Vec::new();
    for row in rows {
        let doc = row?;
        if matches_all_terms(&doc, terms) {
            docs.push(doc);
        }
    }
    Ok(docs)
}

/// True when every lowercase term is a substring of title, body, or author.
fn matches_all_terms(doc: &Document, terms: &[String]) -> bool {
    if terms.is_empty() {
        return true;
    }
    let title = doc.title.to_lowercase();
    let body = doc.body.to_lowercase();
    let author = doc.author.as_deref().map(str::to_lowercase);

    terms.iter().all(|term| {
        title.contains(term.as_str())
            || body.contains(term.as_str())
            || author.as_deref().is_some_and(|a| a.contains(term.as_str()))
    })
}

fn row_to_document(row: &rusqlite::Row) -> Result<Document, rusqlite::Error> {
    Ok(Document {
        id: row.get(0)?,
        title: row.get(1)?,
        author: row.get(2)?,
        body: row.get(3)?,
        date: row.get(4)?,
        latitude: row.get(5)?,
        longitude: row.get(6)?,
    })
}
