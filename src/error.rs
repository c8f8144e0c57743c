#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Request(#[from] reqwest::Error),

    #[error("invalid JSON for matchweek {matchweek}: {source}")]
    Decode {
        matchweek: u32,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to fetch matchweek {matchweek}")]
    NoData { matchweek: u32 },

    #[error("IO error: {0}")]
    Io(#[from] IOError),

    #[error("failed to write to stdout: {0}")]
    Stdout(#[source] std::io::Error),

    #[error("JSON serialization error: {0}")]
    JSON(#[from] JSONError),
}

/// Message of `err` followed by each cause that adds something new, so
/// `error sending request` ends with what actually went wrong.
pub fn error_chain(err: &dyn std::error::Error) -> String {
    let mut text = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !text.contains(&cause_text) {
            text.push_str(": ");
            text.push_str(&cause_text);
        }
        source = cause.source();
    }
    text
}

#[derive(thiserror::Error, Debug)]
#[error("{source} ({})", file.display())]
pub struct IOError {
    file: std::path::PathBuf,
    #[source]
    source: std::io::Error,
}

impl IOError {
    pub fn new(file: impl Into<std::path::PathBuf>, source: std::io::Error) -> Self {
        Self {
            file: file.into(),
            source,
        }
    }
}

#[derive(thiserror::Error, Debug)]
#[error("{source}{}", match file { Some(f) => format!(" ({})", f.display()), None => String::new() })]
pub struct JSONError {
    file: Option<std::path::PathBuf>,
    #[source]
    source: serde_json::Error,
}

impl JSONError {
    pub fn new(file: Option<std::path::PathBuf>, source: serde_json::Error) -> Self {
        Self { file, source }
    }
}
