use std::io::Write;

use tempfile::NamedTempFile;

use crate::{document::DistributionConfigDocument, error::ReconcileError};

/// Write the document to a fresh temp file for submission.
///
/// The file lives exactly as long as the returned handle; dropping it on any path removes it.
pub fn stage_config(document: &DistributionConfigDocument) -> Result<NamedTempFile, ReconcileError> {
    let mut file = tempfile::Builder::new()
        .prefix("distribution-config-")
        .suffix(".json")
        .tempfile()?;
    file.write_all(document.to_json_pretty()?.as_bytes())?;
    file.flush()?;
    tracing::debug!("Staged distribution config at {:?}", file.path());
    Ok(file)
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::*;

    #[test]
    fn staged_file_holds_document_until_dropped() {
        let document = DistributionConfigDocument::from_json(r#"{"Origins":{"Quantity":0,"Items":[]}}"#).unwrap();

        let staged = stage_config(&document).unwrap();
        let path = staged.path().to_path_buf();
        assert!(path.extension().is_some_and(|ext| ext == "json"));

        let on_disk: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(on_disk, document.as_value());

        drop(staged);
        assert!(!path.exists());
    }
}
