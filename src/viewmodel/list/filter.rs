/// Client-side filters for one screen.
///
/// Every dimension is conjunctive: a record is visible only if it passes all
/// active dimensions. Applying the same change twice leaves the filters
/// unchanged.
pub trait FilterSet: Clone + PartialEq + Default + Send + Sync + 'static {
    type Record;
    type Change: Send + 'static;

    fn apply(&mut self, change: Self::Change);

    fn matches(&self, record: &Self::Record) -> bool;

    fn select(&self, items: &[Self::Record]) -> Vec<Self::Record>
    where
        Self::Record: Clone,
    {
        items.iter().filter(|record| self.matches(record)).cloned().collect()
    }
}

/// Case-insensitive substring match of `query` against any of `fields`.
///
/// A blank query matches everything.
pub fn matches_search<'a>(query: &str, fields: impl IntoIterator<Item = Option<&'a str>>) -> bool {
    let query = query.trim();
    if query.is_empty() {
        return true;
    }
    let query = query.to_lowercase();
    fields
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(&query))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_query_matches_everything() {
        assert!(matches_search("", [None]));
        assert!(matches_search("   ", [Some("anything")]));
    }

    #[test]
    fn search_ignores_case_and_surrounding_whitespace() {
        assert!(matches_search(" HOPE ", [Some("Little Hope Home")]));
        assert!(!matches_search("hope", [Some("Sunrise"), None]));
    }

    #[test]
    fn any_field_may_match() {
        assert!(matches_search("ana@", [Some("Ana"), Some("ana@example.com")]));
    }
}
