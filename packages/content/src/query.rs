/// Value of `key` in a URL query string (`?id=2&x=y`), percent-decoded.
/// Empty values count as absent.
pub fn query_param(search: &str, key: &str) -> Option<String> {
    let search = search.strip_prefix('?').unwrap_or(search);
    for pair in search.split('&') {
        let mut it = pair.splitn(2, '=');
        let k = it.next().unwrap_or("");
        let v = it.next().unwrap_or("");
        if k == key && !v.is_empty() {
            let v = v.replace('+', " ");
            return Some(urlencoding::decode(&v).ok()?.into_owned());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_param() {
        assert_eq!(query_param("?id=2", "id").as_deref(), Some("2"));
        assert_eq!(query_param("lang=en&id=kombucha", "id").as_deref(), Some("kombucha"));
    }

    #[test]
    fn decodes_values() {
        assert_eq!(query_param("?id=miso%20blanc", "id").as_deref(), Some("miso blanc"));
        assert_eq!(query_param("?id=miso+blanc", "id").as_deref(), Some("miso blanc"));
    }

    #[test]
    fn missing_or_empty_is_none() {
        assert_eq!(query_param("", "id"), None);
        assert_eq!(query_param("?id=", "id"), None);
        assert_eq!(query_param("?ids=3", "id"), None);
    }
}
