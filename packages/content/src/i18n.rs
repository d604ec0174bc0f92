//! JSON-backed translation dictionaries addressed by dotted key paths.

use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::config::SiteConfig;
use crate::source::{fetch_json, AssetSource, FetchError};

/// Result of walking a dotted path through a dictionary tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup<'a> {
    Text(&'a str),
    /// The path exists but ends on a mapping, number, list...
    Branch,
    Missing,
}

impl<'a> Lookup<'a> {
    pub fn text(self) -> Option<&'a str> {
        match self {
            Lookup::Text(s) => Some(s),
            Lookup::Branch | Lookup::Missing => None,
        }
    }
}

pub fn resolve<'a>(tree: &'a Value, path: &str) -> Lookup<'a> {
    let mut node = tree;
    for segment in path.split('.') {
        match node.as_object().and_then(|map| map.get(segment)) {
            Some(next) => node = next,
            None => return Lookup::Missing,
        }
    }
    match node.as_str() {
        Some(text) => Lookup::Text(text),
        None => Lookup::Branch,
    }
}

/// The full translation tree for one language.
#[derive(Debug, Clone, PartialEq)]
pub struct Dictionary {
    tree: Value,
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::empty()
    }
}

impl Dictionary {
    pub fn empty() -> Self {
        Self {
            tree: Value::Object(Map::new()),
        }
    }

    /// Wrap a parsed tree. Only JSON objects are dictionaries.
    pub fn from_value(tree: Value) -> Option<Self> {
        tree.is_object().then_some(Self { tree })
    }

    pub fn is_empty(&self) -> bool {
        self.tree.as_object().map_or(true, Map::is_empty)
    }

    pub fn lookup(&self, path: &str) -> Lookup<'_> {
        resolve(&self.tree, path)
    }

    pub fn text(&self, path: &str) -> Option<&str> {
        self.lookup(path).text()
    }

    pub fn text_or(&self, path: &str, default: &str) -> String {
        self.text(path).unwrap_or(default).to_string()
    }

    /// The `(key, text)` pairs to write into tagged nodes. Keys that do not
    /// resolve to a string are left out so their nodes keep their text.
    pub fn updates_for<'k, I>(&self, keys: I) -> Vec<(String, String)>
    where
        I: IntoIterator<Item = &'k str>,
    {
        let mut updates: Vec<(String, String)> = Vec::new();
        for key in keys {
            if updates.iter().any(|(seen, _)| seen == key) {
                continue;
            }
            if let Some(text) = self.text(key) {
                updates.push((key.to_string(), text.to_string()));
            }
        }
        updates
    }
}

/// Lowercase and trim a language code. Codes that could escape the
/// `lang/` directory are rejected.
pub fn normalize_lang(code: &str) -> Option<String> {
    let code = code.trim().to_ascii_lowercase();
    let valid = !code.is_empty()
        && code
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
    valid.then_some(code)
}

/// Stored preference first, then the document's `lang`, then the fallback.
pub fn initial_language(
    stored: Option<&str>,
    document_lang: Option<&str>,
    config: &SiteConfig,
) -> String {
    stored
        .and_then(normalize_lang)
        .or_else(|| document_lang.and_then(normalize_lang))
        .unwrap_or_else(|| config.fallback_lang.to_string())
}

async fn load_dictionary<S>(
    source: &S,
    config: &SiteConfig,
    code: &str,
) -> Result<Dictionary, FetchError>
where
    S: AssetSource + ?Sized,
{
    let path = config.lang_path(code);
    let tree: Value = fetch_json(source, &path).await?;
    Dictionary::from_value(tree).ok_or_else(|| FetchError::Parse {
        path,
        message: "expected a JSON object".to_string(),
    })
}

/// Load the dictionary for `lang`, falling back to the configured default
/// language, then to an empty dictionary.
pub async fn fetch_translations<S>(source: &S, config: &SiteConfig, lang: &str) -> Dictionary
where
    S: AssetSource + ?Sized,
{
    let fallback = config.fallback_lang;
    match normalize_lang(lang) {
        Some(code) if code != fallback => match load_dictionary(source, config, &code).await {
            Ok(dict) => return dict,
            Err(err) => debug!("i18n: {code} unavailable ({err}), trying {fallback}"),
        },
        Some(_) => {}
        None => debug!("i18n: rejected language code {lang:?}, trying {fallback}"),
    }

    match load_dictionary(source, config, fallback).await {
        Ok(dict) => dict,
        Err(err) => {
            warn!("i18n: no translations available ({err}), keeping page text");
            Dictionary::empty()
        }
    }
}
