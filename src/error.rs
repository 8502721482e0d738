use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("no JSON data was provided")]
    EmptyInput,

    #[error("invalid JSON, check the syntax: {0}")]
    Parse(String),

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error("fetching features from {source_name} failed: {reason}")]
    Fetch { source_name: String, reason: String },

    #[error("no feature with id {0}")]
    NotFound(String),

    #[error("missing required fields: {}", .0.join(", "))]
    InvalidForm(Vec<&'static str>),

    #[error("could not read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Structurally valid JSON that does not have the import shape.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SchemaError {
    #[error("the 'new_features' field must be present and hold an array")]
    MissingEntries,

    #[error("entry {index} is missing the required field '{field}' (id, title, description)")]
    MissingField { index: usize, field: &'static str },

    #[error("entry {index} is malformed: {reason}")]
    MalformedEntry { index: usize, reason: String },
}

impl CatalogError {
    /// Short error class, used as a log field.
    pub fn kind(&self) -> &'static str {
        match self {
            CatalogError::EmptyInput => "empty",
            CatalogError::Parse(_) => "parse",
            CatalogError::Schema(_) => "schema",
            CatalogError::Fetch { .. } => "fetch",
            CatalogError::NotFound(_) => "not_found",
            CatalogError::InvalidForm(_) => "invalid_form",
            CatalogError::Io { .. } => "io",
        }
    }
}
