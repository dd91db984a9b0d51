use anyhow::{bail, Context};
use serde_json::Value;

/// Provider name to API key, in the order the credential file lists them.
///
/// Held for the page session only, never written to storage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    keys: Vec<(String, String)>,
}

impl Credentials {
    /// Parses a credential file: a JSON object mapping provider names to API keys.
    ///
    /// Values are not validated. Strings are taken as-is and anything else keeps its JSON text.
    pub fn parse(text: &str) -> anyhow::Result<Self> {
        let value: Value = serde_json::from_str(text).context("credential file is not valid JSON")?;
        let Value::Object(map) = value else {
            bail!("credential file must contain a JSON object, found {value}");
        };
        let keys = map
            .into_iter()
            .map(|(provider, key)| {
                let key = match key {
                    Value::String(key) => key,
                    other => other.to_string(),
                };
                (provider, key)
            })
            .collect();
        Ok(Self { keys })
    }

    pub fn providers(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(|(provider, _)| provider.as_str())
    }

    /// The provider's key, or `None` when it is missing or empty.
    pub fn key(&self, provider: &str) -> Option<&str> {
        self.keys
            .iter()
            .find(|(name, _)| name == provider)
            .map(|(_, key)| key.as_str())
            .filter(|key| !key.is_empty())
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_provider_file() {
        let credentials = Credentials::parse(r#"{"openai":"sk-1"}"#).unwrap();
        assert_eq!(credentials.providers().collect::<Vec<_>>(), vec!["openai"]);
        assert_eq!(credentials.key("openai"), Some("sk-1"));
    }

    #[test]
    fn providers_keep_file_order() {
        let credentials =
            Credentials::parse(r#"{"openai":"a","cohere":"b","anthropic":"c"}"#).unwrap();
        assert_eq!(
            credentials.providers().collect::<Vec<_>>(),
            vec!["openai", "cohere", "anthropic"]
        );
    }

    #[test]
    fn rejects_non_json() {
        assert!(Credentials::parse("openai=sk-1").is_err());
    }

    #[test]
    fn rejects_non_object() {
        assert!(Credentials::parse(r#"["openai"]"#).is_err());
        assert!(Credentials::parse(r#""sk-1""#).is_err());
    }

    #[test]
    fn empty_or_missing_key_is_absent() {
        let credentials = Credentials::parse(r#"{"openai":""}"#).unwrap();
        assert_eq!(credentials.key("openai"), None);
        assert_eq!(credentials.key("cohere"), None);
        assert_eq!(credentials.len(), 1);
    }

    #[test]
    fn non_string_values_keep_json_text() {
        let credentials = Credentials::parse(r#"{"google":123}"#).unwrap();
        assert_eq!(credentials.key("google"), Some("123"));
    }

    #[test]
    fn empty_object_is_valid() {
        let credentials = Credentials::parse("{}").unwrap();
        assert!(credentials.is_empty());
    }
}
