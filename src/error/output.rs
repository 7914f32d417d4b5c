use thiserror::Error;

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("failed to serialize greeting as {format}: {source}")]
    Serialize {
        format: String,
        source: serde_json::Error,
    },

    #[error("failed to write greeting to stdout: {source}")]
    Write { source: std::io::Error },
}

impl OutputError {
    pub fn serialize(format: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialize {
            format: format.into(),
            source,
        }
    }

    pub fn write(source: std::io::Error) -> Self {
        Self::Write { source }
    }
}
