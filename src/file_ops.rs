use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::data::Feature;
use crate::error::CatalogError;
use crate::import::{import_into, parse_import};
use crate::store::FeatureStore;

/// Reads an uploaded `.json` file whole, as UTF-8 text.
pub fn read_json_text(file_path: &Path) -> Result<String, CatalogError> {
    let bytes = fs::read(file_path).map_err(|source| CatalogError::Io {
        path: file_path.display().to_string(),
        source,
    })?;

    String::from_utf8(bytes)
        .map_err(|_| CatalogError::Parse(format!("{} is not UTF-8 text", file_path.display())))
}

/// Runs an uploaded file through the same validator as pasted text.
pub fn read_import_file(file_path: &Path) -> Result<Vec<Feature>, CatalogError> {
    let text = read_json_text(file_path)?;
    parse_import(&text)
}

/// Reads an uploaded file and merges it into `store` when it validates.
pub fn import_file_into(store: &mut FeatureStore, file_path: &Path) -> Result<usize, CatalogError> {
    let text = read_json_text(file_path)?;
    import_into(store, &text)
}

/// Reads a single JSON document (e.g. one feature for the form).
pub fn read_json_from_file<T: DeserializeOwned>(file_path: &Path) -> Result<T, CatalogError> {
    let text = read_json_text(file_path)?;
    if text.trim().is_empty() {
        return Err(CatalogError::EmptyInput);
    }
    serde_json::from_str(&text).map_err(|e| CatalogError::Parse(e.to_string()))
}

pub fn is_json_file(file_path: &Path) -> bool {
    file_path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn temp_json(content: &[u8]) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        file.write_all(content).unwrap();
        file
    }

    #[test]
    fn test_import_file_goes_through_validator() {
        let file = temp_json(br#"{"new_features":[{"id":"f1","title":"Dark Mode","description":"d"}]}"#);

        let features = read_import_file(file.path()).unwrap();
        assert_eq!(features.len(), 1);
        assert_eq!(features[0].id, "f1");
    }

    #[test]
    fn test_import_file_schema_error() {
        let file = temp_json(br#"{"new_features":{}}"#);
        let err = read_import_file(file.path()).unwrap_err();
        assert_eq!(err.kind(), "schema");
    }

    #[test]
    fn test_bad_import_file_leaves_store_untouched() {
        let mut store = FeatureStore::new();
        let good = temp_json(br#"{"new_features":[{"id":"f1","title":"t","description":"d"}]}"#);
        assert_eq!(import_file_into(&mut store, good.path()).unwrap(), 1);

        let bad = temp_json(br#"{"new_features":[{"id":"f2","title":"t"}]}"#);
        let err = import_file_into(&mut store, bad.path()).unwrap_err();

        assert_eq!(err.kind(), "schema");
        assert_eq!(store.len(), 1);
        assert!(!store.contains("f2"));
    }

    #[test]
    fn test_non_utf8_is_parse_error() {
        let file = temp_json(&[0xff, 0xfe, 0x00]);
        let err = read_import_file(file.path()).unwrap_err();
        assert_eq!(err.kind(), "parse");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_import_file(&dir.path().join("nope.json")).unwrap_err();
        assert_eq!(err.kind(), "io");
    }

    #[test]
    fn test_single_feature_document() {
        let file = temp_json(br#"{"id":"","title":"t","description":"d","type":"Security"}"#);
        let feature: Feature = read_json_from_file(file.path()).unwrap();
        assert_eq!(feature.r#type, "Security");
        assert!(feature.id.is_empty());
    }

    #[test]
    fn test_json_extension_check() {
        assert!(is_json_file(Path::new("features.json")));
        assert!(is_json_file(Path::new("FEATURES.JSON")));
        assert!(!is_json_file(Path::new("features.txt")));
        assert!(!is_json_file(Path::new("features")));
    }
}
