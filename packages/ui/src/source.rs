use std::rc::Rc;

use async_trait::async_trait;
use content::{AssetSource, FetchError};
use dioxus::prelude::*;
use gloo_net::http::Request;

/// Fetches site files from the origin serving the app.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpSource;

#[async_trait(?Send)]
impl AssetSource for HttpSource {
    async fn fetch_text(&self, path: &str) -> Result<String, FetchError> {
        let network = |e: gloo_net::Error| FetchError::Network {
            path: path.to_string(),
            message: e.to_string(),
        };
        let response = Request::get(path).send().await.map_err(network)?;
        if !response.ok() {
            return Err(FetchError::Status {
                path: path.to_string(),
                status: response.status(),
            });
        }
        response.text().await.map_err(network)
    }
}

/// Where components load data, dictionaries and fragments from.
pub type SharedSource = Rc<dyn AssetSource>;

/// The source provided through context, or [`HttpSource`] when the app
/// does not provide one.
pub fn use_asset_source() -> SharedSource {
    try_use_context::<SharedSource>().unwrap_or_else(|| Rc::new(HttpSource) as SharedSource)
}
