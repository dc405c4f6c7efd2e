//! Document endpoints: create (`POST /documentos`) and search
//! (`GET /documentos`), plus the payload validation layer.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::NaiveDate;
use serde::Deserialize;

use crate::api::error::{ApiError, FieldError};
use crate::api::types::ApiContext;
use crate::db::repository::document::insert_document;
use crate::models::{Document, NewDocument};
use crate::search::{search_documents, SearchRequest};

/// Incoming create payload.
///
/// Every field is optional at the type level so validation can report all
/// missing or malformed fields at once instead of stopping at the first
/// serde error.
#[derive(Debug, Deserialize)]
pub struct DocumentPayload {
    pub titulo: Option<String>,
    pub autor: Option<String>,
    pub conteudo: Option<String>,
    pub data: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl DocumentPayload {
    /// Shape-check and normalize into a `NewDocument`.
    ///
    /// Expected validation failures are values, not panics: the error side
    /// carries one message per offending field.
    pub fn validate(self) -> Result<NewDocument, Vec<FieldError>> {
        let mut erros = Vec::new();

        let title = match self.titulo {
            Some(t) if !t.is_empty() => Some(t),
            Some(_) => {
                erros.push(FieldError::new(
                    "titulo",
                    "O campo 'titulo' não pode ser vazio.",
                ));
                None
            }
            None => {
                erros.push(FieldError::new("titulo", "O campo 'titulo' é obrigatório."));
                None
            }
        };

        let body = match self.conteudo {
            Some(c) if !c.is_empty() => Some(c),
            Some(_) => {
                erros.push(FieldError::new(
                    "conteudo",
                    "O campo 'conteudo' não pode ser vazio.",
                ));
                None
            }
            None => {
                erros.push(FieldError::new(
                    "conteudo",
                    "O campo 'conteudo' é obrigatório.",
                ));
                None
            }
        };

        let date = match self.data.as_deref() {
            Some(raw) => match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
                Ok(d) => Some(d),
                Err(_) => {
                    erros.push(FieldError::new(
                        "data",
                        "Data inválida, use o formato YYYY-MM-DD.",
                    ));
                    None
                }
            },
            None => {
                erros.push(FieldError::new("data", "O campo 'data' é obrigatório."));
                None
            }
        };

        match (title, body, date) {
            (Some(title), Some(body), Some(date)) => Ok(NewDocument {
                title,
                author: self.autor,
                body,
                date,
                latitude: self.latitude,
                longitude: self.longitude,
            }),
            _ => Err(erros),
        }
    }
}

/// `POST /documentos` — validate and persist a new document.
pub async fn create(
    State(ctx): State<ApiContext>,
    Json(payload): Json<DocumentPayload>,
) -> Result<(StatusCode, Json<Document>), ApiError> {
    let new_doc = payload.validate().map_err(ApiError::Validation)?;

    let conn = ctx.open_db()?;
    let doc = insert_document(&conn, &new_doc)?;

    tracing::info!(id = doc.id, "Document created");
    Ok((StatusCode::CREATED, Json(doc)))
}

/// Search query parameters. At least one of `palavraChave`/`busca` is
/// required; both coordinates must be present to trigger the proximity
/// sort.
#[derive(Debug, Deserialize)]
pub struct DocumentSearchQuery {
    #[serde(rename = "palavraChave")]
    pub palavra_chave: Option<String>,
    pub busca: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// `GET /documentos` — keyword search with optional proximity sort.
pub async fn search(
    State(ctx): State<ApiContext>,
    Query(params): Query<DocumentSearchQuery>,
) -> Result<Json<Vec<Document>>, ApiError> {
    if params.palavra_chave.is_none() && params.busca.is_none() {
        return Err(ApiError::Validation(vec![FieldError::new(
            "palavraChave",
            "O parâmetro 'palavraChave' ou 'busca' é obrigatório.",
        )]));
    }

    let conn = ctx.open_db()?;
    let docs = search_documents(
        &conn,
        &SearchRequest {
            keyword: params.palavra_chave,
            query: params.busca,
            latitude: params.latitude,
            longitude: params.longitude,
        },
    )?;

    Ok(Json(docs))
}
