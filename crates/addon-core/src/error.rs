use thiserror::Error;

#[derive(Error, Debug)]
pub enum AddOnError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Path conflict at '{path}': segment '{segment}' holds a non-mapping value")]
    PathConflict { path: String, segment: String },

    #[error("Helm chart install failed: {chart} -- {source}")]
    Install {
        chart: String,
        #[source]
        source: anyhow::Error,
    },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type AddOnResult<T> = Result<T, AddOnError>;
