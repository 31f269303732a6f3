use std::fs;
use std::path::Path;

use crate::error::FetchError;
use crate::fetch::FetchedSchema;

/// Persist each fetched raw schema document under its source file name, for
/// later reference from the generated documentation.
pub fn save_raw_documents(dir: &Path, schemas: &[FetchedSchema]) -> Result<(), FetchError> {
    fs::create_dir_all(dir).map_err(|source| FetchError::Persist {
        path: dir.display().to_string(),
        source,
    })?;

    for schema in schemas {
        let path = dir.join(&schema.file_name);
        fs::write(&path, &schema.raw).map_err(|source| FetchError::Persist {
            path: path.display().to_string(),
            source,
        })?;
        log::info!("persisted raw schema {}", path.display());
    }

    Ok(())
}
