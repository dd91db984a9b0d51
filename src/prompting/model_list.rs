use super::credentials::Credentials;

/// Models offered for the selected provider, plus the one picked for generation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelList {
    pub models: Vec<String>,
    pub selected: String,
}

impl ModelList {
    /// Takes a fresh list from the backend and defaults the selection to its first entry.
    /// An empty list leaves the selection as it was.
    pub fn replace(&mut self, models: Vec<String>) {
        if let Some(first) = models.first() {
            self.selected = first.clone();
        }
        self.models = models;
    }

    pub fn clear(&mut self) {
        self.models.clear();
    }

    pub fn select(&mut self, model: String) {
        self.selected = model;
    }

    pub fn apply(&mut self, update: ModelListUpdate) {
        match update {
            ModelListUpdate::Clear => self.clear(),
            ModelListUpdate::Replace(models) => self.replace(models),
            ModelListUpdate::Keep => {}
        }
    }
}

/// Outcome of a model-list refresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelListUpdate {
    /// The provider has no key; nothing was requested.
    Clear,
    Replace(Vec<String>),
    /// The request failed or the body was malformed.
    Keep,
}

/// What a model-list request needs. Only built for providers that have a key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelQuery {
    pub provider: String,
    pub api_key: String,
}

impl ModelQuery {
    pub fn for_provider(provider: &str, credentials: &Credentials) -> Option<Self> {
        if provider.is_empty() {
            return None;
        }
        credentials.key(provider).map(|api_key| Self {
            provider: provider.to_string(),
            api_key: api_key.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(models: &[&str], selected: &str) -> ModelList {
        ModelList {
            models: models.iter().map(|m| m.to_string()).collect(),
            selected: selected.to_string(),
        }
    }

    #[test]
    fn replace_selects_first_model() {
        let mut models = list(&["old"], "old");
        models.replace(vec!["m1".to_string(), "m2".to_string()]);
        assert_eq!(models, list(&["m1", "m2"], "m1"));
    }

    #[test]
    fn replace_with_empty_list_keeps_selection() {
        let mut models = list(&["old"], "old");
        models.replace(vec![]);
        assert_eq!(models, list(&[], "old"));
    }

    #[test]
    fn clear_empties_models() {
        let mut models = list(&["m1", "m2"], "m2");
        models.clear();
        assert!(models.models.is_empty());
        assert_eq!(models.selected, "m2");
    }

    #[test]
    fn apply_dispatches_updates() {
        let mut models = list(&["m1", "m2"], "m2");
        models.apply(ModelListUpdate::Keep);
        assert_eq!(models, list(&["m1", "m2"], "m2"));
        models.apply(ModelListUpdate::Replace(vec!["x".to_string()]));
        assert_eq!(models, list(&["x"], "x"));
        models.apply(ModelListUpdate::Clear);
        assert_eq!(models, list(&[], "x"));
    }

    #[test]
    fn query_needs_a_key() {
        let credentials = Credentials::parse(r#"{"openai":"sk-1","cohere":""}"#).unwrap();
        assert_eq!(
            ModelQuery::for_provider("openai", &credentials),
            Some(ModelQuery {
                provider: "openai".to_string(),
                api_key: "sk-1".to_string(),
            })
        );
        assert_eq!(ModelQuery::for_provider("cohere", &credentials), None);
        assert_eq!(ModelQuery::for_provider("anthropic", &credentials), None);
        assert_eq!(ModelQuery::for_provider("", &credentials), None);
    }
}
