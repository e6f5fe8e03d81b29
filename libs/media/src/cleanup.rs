use crate::StagedFile;
use tracing::{debug, warn};

/// Remove staged files from local disk, best-effort.
///
/// Failure to remove a file is logged and the remaining files are still
/// attempted; a committed create/update must never fail because local
/// garbage collection did.
pub async fn discard_staged(files: &[StagedFile]) {
    for file in files {
        match tokio::fs::remove_file(&file.path).await {
            Ok(()) => debug!(path = %file.path.display(), "Removed staged upload"),
            Err(e) => {
                warn!(path = %file.path.display(), error = %e, "Failed to remove staged upload");
            }
        }
    }
}
