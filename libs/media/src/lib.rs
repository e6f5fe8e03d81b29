//! Media hosting adapter and local upload staging.
//!
//! Inbound multipart files are buffered to local disk ([`Staging`]), pushed
//! to the external media host ([`MediaStore`] / [`HttpMediaStore`]) which
//! returns a durable public URL, and finally removed from local disk
//! ([`discard_staged`]) once the owning record is persisted.

mod cleanup;
mod config;
mod staging;
mod store;

pub use cleanup::discard_staged;
pub use config::MediaConfig;
pub use staging::{StagedFile, Staging};
pub use store::{HttpMediaStore, MediaError, MediaStore, UploadedMedia};
