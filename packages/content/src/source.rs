use std::collections::HashMap;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("network error fetching {path}: {message}")]
    Network { path: String, message: String },
    #[error("{path} answered with status {status}")]
    Status { path: String, status: u16 },
    #[error("could not parse {path}: {message}")]
    Parse { path: String, message: String },
    #[error("refusing to fetch {0}")]
    InvalidPath(String),
}

/// Where static site files (data, dictionaries, fragments) come from.
///
/// Futures are not `Send`: on the web every fetch runs on the browser's
/// single thread.
#[async_trait(?Send)]
pub trait AssetSource {
    async fn fetch_text(&self, path: &str) -> Result<String, FetchError>;
}

/// Fetch `path` and deserialize it as JSON.
pub async fn fetch_json<T, S>(source: &S, path: &str) -> Result<T, FetchError>
where
    T: DeserializeOwned,
    S: AssetSource + ?Sized,
{
    let text = source.fetch_text(path).await?;
    serde_json::from_str(&text).map_err(|e| FetchError::Parse {
        path: path.to_string(),
        message: e.to_string(),
    })
}

/// In-memory source keyed by path. Missing paths answer 404.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    files: HashMap<String, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, path: impl Into<String>, body: impl Into<String>) -> Self {
        self.files.insert(path.into(), body.into());
        self
    }
}

#[async_trait(?Send)]
impl AssetSource for MemorySource {
    async fn fetch_text(&self, path: &str) -> Result<String, FetchError> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| FetchError::Status {
                path: path.to_string(),
                status: 404,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[tokio::test]
    async fn missing_file_is_a_404() {
        let err = MemorySource::new().fetch_text("/nope").await.unwrap_err();
        assert_eq!(
            err,
            FetchError::Status {
                path: "/nope".into(),
                status: 404
            }
        );
    }

    #[tokio::test]
    async fn bad_json_is_a_parse_error() {
        let source = MemorySource::new().with("/x.json", "{not json");
        let err = fetch_json::<Value, _>(&source, "/x.json").await.unwrap_err();
        assert!(matches!(err, FetchError::Parse { .. }));
    }
}
