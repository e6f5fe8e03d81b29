//! Multipart form parsing for the product create/update endpoints.
//!
//! Text fields are collected by name; file parts under the `files` field
//! are buffered to the staging directory as they stream in.

use axum::extract::Multipart;
use media::{discard_staged, StagedFile, Staging};
use std::collections::HashMap;

use crate::error::{ProductError, ProductResult};
use crate::models::{ProductRevision, ProductSubmission};

/// Multipart field name carrying the attached image files
pub const FILES_FIELD: &str = "files";

/// Raw multipart payload: text fields plus staged file parts.
pub struct ProductFormData {
    fields: HashMap<String, String>,
    pub files: Vec<StagedFile>,
}

impl ProductFormData {
    /// Drain a multipart stream, staging file parts to local disk.
    ///
    /// On a malformed stream the files staged so far are discarded before
    /// the error is returned.
    pub async fn from_multipart(
        multipart: &mut Multipart,
        staging: &Staging,
    ) -> ProductResult<Self> {
        let mut fields = HashMap::new();
        let mut files: Vec<StagedFile> = Vec::new();

        loop {
            let field = match multipart.next_field().await {
                Ok(Some(field)) => field,
                Ok(None) => break,
                Err(e) => {
                    discard_staged(&files).await;
                    return Err(ProductError::Validation(format!(
                        "Malformed multipart request: {}",
                        e
                    )));
                }
            };

            let name = field.name().unwrap_or_default().to_string();

            if name == FILES_FIELD {
                let file_name = field.file_name().unwrap_or("upload").to_string();
                let bytes = match field.bytes().await {
                    Ok(bytes) => bytes,
                    Err(e) => {
                        discard_staged(&files).await;
                        return Err(ProductError::Validation(format!(
                            "Failed to read file part: {}",
                            e
                        )));
                    }
                };

                match staging.stage(&file_name, &bytes).await {
                    Ok(staged) => files.push(staged),
                    Err(e) => {
                        discard_staged(&files).await;
                        return Err(ProductError::Internal(format!(
                            "Failed to stage upload: {}",
                            e
                        )));
                    }
                }
            } else {
                let value = match field.text().await {
                    Ok(value) => value,
                    Err(e) => {
                        discard_staged(&files).await;
                        return Err(ProductError::Validation(format!(
                            "Failed to read field '{}': {}",
                            name, e
                        )));
                    }
                };
                fields.insert(name, value);
            }
        }

        Ok(Self { fields, files })
    }

    fn take_required(&mut self, name: &'static str) -> ProductResult<String> {
        self.fields
            .remove(name)
            .ok_or_else(|| ProductError::Validation(format!("Field '{}' is required", name)))
    }

    /// Pull the create form's required text fields.
    pub fn into_submission(mut self) -> ProductResult<(ProductSubmission, Vec<StagedFile>)> {
        let submission = ProductSubmission {
            name: self.take_required("name")?,
            brand: self.take_required("brand")?,
            description: self.take_required("description")?,
            colors: self.take_required("colors")?,
            sizes: self.take_required("sizes")?,
            gender: self.take_required("gender")?,
            price: self.take_required("price")?,
            category: self.take_required("category")?,
            stock: self.take_required("stock")?,
        };
        Ok((submission, self.files))
    }

    /// Pull the update form's required text fields.
    ///
    /// Updates are a full overwrite, so the create fields are all required
    /// again along with the counters.
    pub fn into_revision(mut self) -> ProductResult<(ProductRevision, Vec<StagedFile>)> {
        let revision = ProductRevision {
            name: self.take_required("name")?,
            brand: self.take_required("brand")?,
            description: self.take_required("description")?,
            colors: self.take_required("colors")?,
            sizes: self.take_required("sizes")?,
            gender: self.take_required("gender")?,
            price: self.take_required("price")?,
            category: self.take_required("category")?,
            stock: self.take_required("stock")?,
            sold_count: self.take_required("sold_count")?,
            rating: self.take_required("rating")?,
        };
        Ok((revision, self.files))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form_with(fields: &[(&str, &str)]) -> ProductFormData {
        ProductFormData {
            fields: fields
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            files: Vec::new(),
        }
    }

    fn complete_fields() -> Vec<(&'static str, &'static str)> {
        vec![
            ("name", "Shirt"),
            ("brand", "Acme"),
            ("description", "A shirt"),
            ("colors", "red,blue"),
            ("sizes", "S,M"),
            ("gender", "men"),
            ("price", "19.99"),
            ("category", "tops"),
            ("stock", "5"),
        ]
    }

    #[test]
    fn test_into_submission_with_all_fields() {
        let form = form_with(&complete_fields());
        let (submission, files) = form.into_submission().unwrap();
        assert_eq!(submission.name, "Shirt");
        assert_eq!(submission.stock, "5");
        assert!(files.is_empty());
    }

    #[test]
    fn test_into_submission_missing_field_names_it() {
        let mut fields = complete_fields();
        fields.retain(|(k, _)| *k != "brand");

        let err = form_with(&fields).into_submission().unwrap_err();
        match err {
            ProductError::Validation(msg) => assert!(msg.contains("brand")),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_into_revision_requires_counters() {
        let err = form_with(&complete_fields()).into_revision().unwrap_err();
        match err {
            ProductError::Validation(msg) => assert!(msg.contains("sold_count")),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_into_revision_with_counters() {
        let mut fields = complete_fields();
        fields.push(("sold_count", "7"));
        fields.push(("rating", "4.5"));

        let (revision, _) = form_with(&fields).into_revision().unwrap();
        assert_eq!(revision.sold_count, "7");
        assert_eq!(revision.rating, "4.5");
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let mut fields = complete_fields();
        fields.push(("debug", "true"));

        assert!(form_with(&fields).into_submission().is_ok());
    }
}
