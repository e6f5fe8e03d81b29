//! Products Domain
//!
//! Catalog management backed by MongoDB, with product images pushed to an
//! external media host.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints (multipart form + JSON envelope)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Upload orchestration, field parsing, persistence
//! └──────┬──────┘
//!        │
//! ┌──────▼──────────────┐
//! │ Repository │ Media  │  ← Data access trait + MongoDB impl, media host
//! └──────┬──────────────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, form drafts
//! └─────────────┘
//! ```

pub mod error;
pub mod form;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{ProductError, ProductResult};
pub use handlers::ApiDoc;
pub use models::{Gender, NewProduct, Product, ProductOverwrite, ProductRevision, ProductSubmission};
pub use mongodb::MongoProductRepository;
pub use repository::ProductRepository;
pub use service::ProductService;
