use std::fmt;

use shared::{Error, Result};
use shared_http::api::MembershipQuery;

/// Ordered set of corpus names.
///
/// On the wire the selection is a single comma-joined parameter, so names are
/// trimmed, empty names are dropped and duplicates keep their first position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CorpusSelection(Vec<String>);

impl CorpusSelection {
    pub fn new<I, S>(corpora: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut names: Vec<String> = Vec::new();
        for corpus in corpora {
            let name = corpus.as_ref().trim();
            if !name.is_empty() && !names.iter().any(|n| n == name) {
                names.push(name.to_string());
            }
        }
        Self(names)
    }

    /// Parses the comma-joined wire form.
    pub fn parse(param: &str) -> Self {
        Self::new(param.split(','))
    }

    pub fn to_param(&self) -> String {
        self.0.join(",")
    }

    pub fn contains(&self, corpus: &str) -> bool {
        self.0.iter().any(|c| c == corpus)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for CorpusSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_param())
    }
}

/// The page state a membership request is made for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryContext {
    pub query_key: String,
    pub current_corpora: CorpusSelection,
}

impl QueryContext {
    pub fn new(query_key: impl Into<String>, current_corpora: CorpusSelection) -> Self {
        Self {
            query_key: query_key.into(),
            current_corpora,
        }
    }

    /// Context described by the route parameters of a query page.
    pub fn from_route(query_key: &str, current_corpora: &str) -> Self {
        Self::new(query_key, CorpusSelection::parse(current_corpora))
    }

    /// Same query, viewed over a different set of corpora.
    pub fn with_corpora(&self, selection: CorpusSelection) -> Self {
        Self {
            query_key: self.query_key.clone(),
            current_corpora: selection,
        }
    }

    /// Snapshots the context into request parameters.
    pub fn to_query(&self) -> Result<MembershipQuery> {
        let query_key = self.query_key.trim();
        if query_key.is_empty() {
            return Err(Error::MissingContext("query_key"));
        }
        Ok(MembershipQuery::new(
            query_key,
            self.current_corpora.to_param(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_parse_trims_and_dedupes() {
        let selection = CorpusSelection::parse(" 2020-03-27, 2020-04-03,,2020-03-27 ");
        assert_eq!(
            selection.iter().collect::<Vec<_>>(),
            vec!["2020-03-27", "2020-04-03"]
        );
        assert_eq!(selection.to_param(), "2020-03-27,2020-04-03");
        assert!(selection.contains("2020-04-03"));
        assert!(!selection.contains("2020-04-10"));
    }

    #[test]
    fn test_empty_selection() {
        let selection = CorpusSelection::parse("");
        assert!(selection.is_empty());
        assert_eq!(selection.len(), 0);
        assert_eq!(selection.to_string(), "");
    }

    #[test]
    fn test_to_query_snapshots_context() {
        let context = QueryContext::new("C0011849", CorpusSelection::new(["PubMed", "CORD-19"]));
        let query = context.to_query().unwrap();
        assert_eq!(query.query_key, "C0011849");
        assert_eq!(query.current_corpora, "PubMed,CORD-19");
    }

    #[test]
    fn test_to_query_requires_query_key() {
        let context = QueryContext::new("   ", CorpusSelection::default());
        assert_eq!(
            context.to_query().unwrap_err(),
            Error::MissingContext("query_key")
        );
    }

    #[test]
    fn test_from_route_tracks_each_route() {
        let before = QueryContext::from_route("C0011849", "a,b");
        let after = QueryContext::from_route("C0011849", "b");

        assert_eq!(before.to_query().unwrap().current_corpora, "a,b");
        assert_eq!(after.to_query().unwrap().current_corpora, "b");
        assert_eq!(
            QueryContext::from_route("C0040405", "").to_query().unwrap(),
            MembershipQuery::new("C0040405", "")
        );
    }

    #[test]
    fn test_with_corpora_keeps_query_key() {
        let context = QueryContext::new("C0011849", CorpusSelection::parse("a,b"));
        let next = context.with_corpora(CorpusSelection::parse("b"));
        assert_eq!(next.query_key, "C0011849");
        assert_eq!(next.current_corpora.to_param(), "b");
        assert_eq!(context.current_corpora.to_param(), "a,b");
    }
}
