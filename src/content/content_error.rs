use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("Failed to read content file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse content: {0}")]
    Parse(#[from] toml::de::Error),
}
