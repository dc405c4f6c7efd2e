pub mod document;

pub use document::{filter_by_terms, insert_document};
