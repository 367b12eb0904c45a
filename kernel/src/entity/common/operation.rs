use vodca::{AsRefln, Fromln};

/// Case-insensitive substring filter. An empty query matches everything.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Fromln, AsRefln)]
pub struct SearchQuery(String);

impl SearchQuery {
    pub fn new(query: impl Into<String>) -> Self {
        Self(query.into().to_lowercase())
    }

    pub fn matches(&self, text: &str) -> bool {
        text.to_lowercase().contains(&self.0)
    }
}

#[cfg(test)]
mod test {
    use super::SearchQuery;

    #[test]
    fn matches_ignoring_case() {
        let query = SearchQuery::new("DUN");
        assert!(query.matches("Dune"));
        assert!(query.matches("Children of dune"));
        assert!(!query.matches("Foundation"));
    }

    #[test]
    fn empty_query_matches_everything() {
        let query = SearchQuery::new("");
        assert!(query.matches("Dune"));
        assert!(query.matches(""));
    }
}
