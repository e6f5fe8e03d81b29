//! Product Service - upload orchestration and persistence

use futures_util::future::join_all;
use media::{discard_staged, MediaStore, StagedFile, UploadedMedia};
use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;

use crate::error::{ProductError, ProductResult};
use crate::models::{Product, ProductRevision, ProductSubmission};
use crate::repository::ProductRepository;

/// Logical folder products images live under on the media host
const MEDIA_FOLDER: &str = "ecommerce";

/// Product service providing the create/read/update/delete operations.
///
/// Create and update push attached files to the media host before
/// persisting; staged local copies are garbage-collected afterwards as a
/// non-fatal side effect.
pub struct ProductService<R: ProductRepository, M: MediaStore> {
    repository: Arc<R>,
    media: Arc<M>,
}

impl<R: ProductRepository, M: MediaStore> ProductService<R, M> {
    /// Create a new ProductService with the given repository and media host
    pub fn new(repository: R, media: M) -> Self {
        Self {
            repository: Arc::new(repository),
            media: Arc::new(media),
        }
    }

    /// Create a new product.
    ///
    /// Requires at least one attached file. All files are uploaded
    /// concurrently and joined before anything is persisted; a single
    /// failed upload fails the whole operation and best-effort deletes the
    /// uploads that did succeed.
    #[instrument(skip(self, submission, files), fields(product_name = %submission.name))]
    pub async fn create_product(
        &self,
        submission: ProductSubmission,
        files: Vec<StagedFile>,
    ) -> ProductResult<Product> {
        if files.is_empty() {
            return Err(ProductError::Validation(
                "At least one image is required".to_string(),
            ));
        }

        let uploaded = self.upload_all(&files).await?;
        let images = uploaded.into_iter().map(|m| m.url).collect();

        let created = self
            .repository
            .create(submission.into_new_product(images)?)
            .await?;

        discard_staged(&files).await;
        Ok(created)
    }

    /// List all products, unfiltered and unpaginated
    #[instrument(skip(self))]
    pub async fn fetch_all_products(&self) -> ProductResult<Vec<Product>> {
        self.repository.find_all().await
    }

    /// Get a product by ID
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: Uuid) -> ProductResult<Product> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    /// Overwrite an existing product.
    ///
    /// Attached files are optional: when present they are uploaded with the
    /// same fail-fast semantics as create and replace the image list; when
    /// absent the prior record's images carry over unchanged. Every other
    /// field is overwritten from the form.
    #[instrument(skip(self, revision, files))]
    pub async fn update_product(
        &self,
        id: Uuid,
        revision: ProductRevision,
        files: Vec<StagedFile>,
    ) -> ProductResult<Product> {
        let uploaded = if files.is_empty() {
            None
        } else {
            Some(self.upload_all(&files).await?)
        };

        let existing = match self.repository.find_by_id(id).await? {
            Some(product) => product,
            None => {
                // The uploads above happen before the lookup; retract them
                // so a 404 does not strand assets on the media host.
                if let Some(uploaded) = uploaded {
                    self.retract_uploads(&uploaded).await;
                }
                return Err(ProductError::NotFound(id));
            }
        };

        let images = match uploaded {
            Some(uploaded) => uploaded.into_iter().map(|m| m.url).collect(),
            None => existing.images,
        };

        let updated = self
            .repository
            .update(id, revision.into_overwrite(images)?)
            .await?;

        discard_staged(&files).await;
        Ok(updated)
    }

    /// Delete a product.
    ///
    /// Remotely hosted images of a deleted product are left in place.
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: Uuid) -> ProductResult<()> {
        if self.repository.find_by_id(id).await?.is_none() {
            return Err(ProductError::NotFound(id));
        }

        if !self.repository.delete(id).await? {
            return Err(ProductError::NotFound(id));
        }
        Ok(())
    }

    /// Upload every staged file concurrently, collecting results in input
    /// order. If any upload fails, the uploads that succeeded are
    /// best-effort deleted and the first failure is returned.
    async fn upload_all(&self, files: &[StagedFile]) -> ProductResult<Vec<UploadedMedia>> {
        let uploads = files
            .iter()
            .map(|file| self.media.upload(&file.path, MEDIA_FOLDER));
        let results = join_all(uploads).await;

        let mut uploaded = Vec::with_capacity(results.len());
        let mut first_error = None;

        for result in results {
            match result {
                Ok(media) => uploaded.push(media),
                Err(e) if first_error.is_none() => first_error = Some(e),
                Err(_) => {}
            }
        }

        match first_error {
            None => Ok(uploaded),
            Some(e) => {
                self.retract_uploads(&uploaded).await;
                discard_staged(files).await;
                Err(e.into())
            }
        }
    }

    /// Best-effort deletion of already-uploaded assets after an aborted
    /// operation. Failures are logged; the original error still wins.
    async fn retract_uploads(&self, uploaded: &[UploadedMedia]) {
        for media in uploaded {
            if let Err(e) = self.media.delete(&media.asset_id).await {
                tracing::warn!(asset_id = %media.asset_id, error = %e, "Failed to retract upload");
            }
        }
    }
}

impl<R: ProductRepository, M: MediaStore> Clone for ProductService<R, M> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            media: Arc::clone(&self.media),
        }
    }
}
