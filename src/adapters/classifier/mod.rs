//! Remote column classifier
//!
//! Integration with the platform functions that classify dataset columns
//! as direct identifiers, quasi-identifiers, special-category data or
//! technical fields. The `ColumnClassifier` trait defines the interface;
//! `HttpColumnClassifier` calls the functions over HTTPS.

pub mod http;
pub mod models;
pub mod request;
mod r#trait;

pub use http::HttpColumnClassifier;
pub use models::{decode_envelope, ClassifierEnvelope, FunctionExecuteRequest};
pub use r#trait::{ClassificationTarget, ColumnClassifier};
pub use request::ColumnRequest;
