// Structured query-string construction
//
// The CDI API takes every parameter in the query string, including
// multi-valued ones (`levels=..&levels=..`). `Query` keeps pairs in
// insertion order so repeated keys stay positionally aligned.

use url::Url;

use crate::models::SessionKey;

/// Query keys whose values must never reach a log line.
const SECRET_KEYS: &[&str] = &["userPWD", "sessionKey"];

/// Ordered list of query parameters.
#[derive(Debug, Default, Clone)]
pub struct Query {
    pairs: Vec<(&'static str, String)>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a single `key=value` pair.
    pub fn param(mut self, key: &'static str, value: impl ToString) -> Self {
        self.pairs.push((key, value.to_string()));
        self
    }

    /// Append one `key=value` pair per item, in iteration order.
    pub fn repeated<I>(mut self, key: &'static str, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: ToString,
    {
        self.pairs
            .extend(values.into_iter().map(|v| (key, v.to_string())));
        self
    }

    /// Append the `sessionKey` pair.
    pub fn session(self, key: &SessionKey) -> Self {
        self.param("sessionKey", key.expose())
    }

    /// Write the pairs into `url`, replacing any query it already had.
    pub fn apply_to(&self, url: &mut Url) {
        url.set_query(None);
        if self.pairs.is_empty() {
            return;
        }
        let mut serializer = url.query_pairs_mut();
        for (key, value) in &self.pairs {
            serializer.append_pair(key, value);
        }
    }
}

/// Render a URL for logging with credential values masked.
pub(crate) fn redacted(url: &Url) -> String {
    let mut masked = url.clone();
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let value = if SECRET_KEYS.contains(&k.as_ref()) {
                "***".to_owned()
            } else {
                v.into_owned()
            };
            (k.into_owned(), value)
        })
        .collect();

    if pairs.is_empty() {
        return masked.to_string();
    }

    masked.set_query(None);
    masked.query_pairs_mut().extend_pairs(pairs);
    masked.to_string()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn repeated_keys_keep_insertion_order() {
        let query = Query::new()
            .repeated("levels", [70, 0, 0])
            .repeated("lights", ["L1", "L2", "L3"])
            .param("sessionKey", "tok");

        let mut url = Url::parse("http://cdi.local/api/areaControl/setLightsLevel").unwrap();
        query.apply_to(&mut url);

        assert_eq!(
            url.query(),
            Some("levels=70&levels=0&levels=0&lights=L1&lights=L2&lights=L3&sessionKey=tok")
        );
    }

    #[test]
    fn values_are_percent_encoded() {
        let mut url = Url::parse("http://cdi.local/api/user/login").unwrap();
        Query::new()
            .param("userName", "front desk")
            .param("userPWD", "p&ss=1")
            .apply_to(&mut url);
        assert_eq!(url.query(), Some("userName=front+desk&userPWD=p%26ss%3D1"));
    }

    #[test]
    fn redaction_masks_credentials_only() {
        let url = Url::parse(
            "http://cdi.local/api/areaControl/openDoor?doorId=D1&floor=2&sessionKey=abc",
        )
        .unwrap();
        let shown = redacted(&url);
        assert!(shown.contains("doorId=D1"));
        assert!(shown.contains("floor=2"));
        assert!(!shown.contains("abc"));
    }
}
