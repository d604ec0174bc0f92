//! HTML fragments pulled into the page by URL (`data-src` slots).

use tracing::error;

use crate::source::AssetSource;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    pub src: String,
    /// `None` when the fetch failed; the slot stays empty.
    pub markup: Option<String>,
}

/// Fetch each fragment one at a time, in the given order. A failure is
/// logged and does not stop the remaining fetches.
pub async fn load_components<S, I>(source: &S, sources: I) -> Vec<Component>
where
    S: AssetSource + ?Sized,
    I: IntoIterator,
    I::Item: Into<String>,
{
    let mut loaded = Vec::new();
    for src in sources {
        let src = src.into();
        let markup = match source.fetch_text(&src).await {
            Ok(markup) => Some(markup),
            Err(err) => {
                error!("includes: failed to load component {src}: {err}");
                None
            }
        };
        loaded.push(Component { src, markup });
    }
    loaded
}
