//! Repository selection against inclusion/omission rules.
//!
//! Omission always takes precedence over inclusion: a repository matching
//! any omit dimension is excluded no matter what would have included it.
//! If every include dimension is empty, every non-omitted repository in
//! the in-scope organizations is included (permissive default).

use std::fmt;
use std::sync::Arc;

use roster_shared::{InventoryConfig, Repository};

/// A side-effect-free inclusion callback.
pub type RepositoryPredicate = Arc<dyn Fn(&Repository) -> bool + Send + Sync>;

/// Selection rules for the repository working set.
#[derive(Clone, Default)]
pub struct FilterCriteria {
    /// Organizations in scope for the selection.
    pub organizations: Vec<String>,
    /// Literal repository names to include.
    pub include_names: Vec<String>,
    /// Topic tags to include.
    pub include_topics: Vec<String>,
    /// Inclusion callbacks; a repository satisfies this dimension if any
    /// predicate returns true.
    pub include_predicates: Vec<RepositoryPredicate>,
    /// Literal repository names to exclude unconditionally.
    pub omit_names: Vec<String>,
    /// Topic tags to exclude unconditionally (matched against ALL of a
    /// repository's topics, not only the one that triggered inclusion).
    pub omit_topics: Vec<String>,
}

impl fmt::Debug for FilterCriteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterCriteria")
            .field("organizations", &self.organizations)
            .field("include_names", &self.include_names)
            .field("include_topics", &self.include_topics)
            .field("include_predicates", &self.include_predicates.len())
            .field("omit_names", &self.omit_names)
            .field("omit_topics", &self.omit_topics)
            .finish()
    }
}

impl From<&InventoryConfig> for FilterCriteria {
    fn from(config: &InventoryConfig) -> Self {
        Self {
            organizations: config.organizations.clone(),
            include_names: config.include_names.clone(),
            include_topics: config.include_topics.clone(),
            include_predicates: Vec::new(),
            omit_names: config.omit_names.clone(),
            omit_topics: config.omit_topics.clone(),
        }
    }
}

/// Apply the selection rules to a candidate list.
///
/// The filter is stable: result order preserves input order, with no
/// re-sorting. Candidates outside `criteria.organizations` are rejected
/// even if the source already scoped by organization.
pub fn select(candidates: &[Repository], criteria: &FilterCriteria) -> Vec<Repository> {
    candidates
        .iter()
        .filter(|repo| matches(repo, criteria))
        .cloned()
        .collect()
}

fn matches(repo: &Repository, criteria: &FilterCriteria) -> bool {
    if !criteria.organizations.contains(&repo.organization) {
        return false;
    }

    // Omission short-circuits: any match excludes the repository.
    if criteria.omit_names.contains(&repo.name) {
        return false;
    }
    if repo.topics.iter().any(|t| criteria.omit_topics.contains(t)) {
        return false;
    }

    // Permissive default: with no include dimensions, everything survives.
    if criteria.include_names.is_empty()
        && criteria.include_topics.is_empty()
        && criteria.include_predicates.is_empty()
    {
        return true;
    }

    criteria.include_names.contains(&repo.name)
        || repo
            .topics
            .iter()
            .any(|t| criteria.include_topics.contains(t))
        || criteria.include_predicates.iter().any(|p| p(repo))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn repo(name: &str, topics: &[&str]) -> Repository {
        Repository {
            name: name.into(),
            description: format!("d-{name}"),
            url: format!("u-{name}"),
            topics: topics.iter().map(|t| t.to_string()).collect(),
            organization: "acme".into(),
            updated_at: Utc::now(),
            pushed_at: Utc::now(),
        }
    }

    fn criteria() -> FilterCriteria {
        FilterCriteria {
            organizations: vec!["acme".into()],
            ..Default::default()
        }
    }

    fn names(repos: &[Repository]) -> Vec<&str> {
        repos.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn permissive_default_keeps_everything_but_omit_matches() {
        let candidates = vec![repo("a", &["x"]), repo("b", &["y"]), repo("c", &[])];
        let mut crit = criteria();
        crit.omit_names = vec!["b".into()];

        let selected = select(&candidates, &crit);
        assert_eq!(names(&selected), ["a", "c"]);
    }

    #[test]
    fn omit_name_wins_over_topic_inclusion() {
        let candidates = vec![repo("a", &["keep"]), repo("b", &["keep"])];
        let mut crit = criteria();
        crit.include_topics = vec!["keep".into()];
        crit.omit_names = vec!["a".into()];

        let selected = select(&candidates, &crit);
        assert_eq!(names(&selected), ["b"]);
    }

    #[test]
    fn omit_topic_matches_any_topic_regardless_of_inclusion_trigger() {
        // Documented precedence rule: `a` carries both "x" and "y"; omitting
        // topic "y" excludes `a` even though "x" alone would have kept it.
        let candidates = vec![repo("a", &["x", "y"]), repo("b", &["y"])];
        let mut crit = criteria();
        crit.omit_topics = vec!["y".into()];

        let selected = select(&candidates, &crit);
        assert!(selected.is_empty());
    }

    #[test]
    fn include_dimensions_are_disjunctive() {
        let candidates = vec![
            repo("by-name", &[]),
            repo("by-topic", &["wanted"]),
            repo("by-predicate", &[]),
            repo("unmatched", &[]),
        ];
        let mut crit = criteria();
        crit.include_names = vec!["by-name".into()];
        crit.include_topics = vec!["wanted".into()];
        crit.include_predicates =
            vec![Arc::new(|r: &Repository| r.name == "by-predicate") as RepositoryPredicate];

        let selected = select(&candidates, &crit);
        assert_eq!(names(&selected), ["by-name", "by-topic", "by-predicate"]);
    }

    #[test]
    fn filter_is_stable_and_preserves_input_order() {
        let candidates = vec![repo("c", &["t"]), repo("a", &["t"]), repo("b", &["t"])];
        let selected = select(&candidates, &criteria());
        assert_eq!(names(&selected), ["c", "a", "b"]);
    }

    #[test]
    fn out_of_scope_organizations_are_rejected() {
        let mut other = repo("other", &["x"]);
        other.organization = "someone-else".into();
        let candidates = vec![repo("a", &["x"]), other];

        let selected = select(&candidates, &criteria());
        assert_eq!(names(&selected), ["a"]);
    }

    #[test]
    fn zero_organizations_yields_empty_set() {
        let candidates = vec![repo("a", &["x"])];
        let crit = FilterCriteria::default();
        assert!(select(&candidates, &crit).is_empty());
    }

    #[test]
    fn criteria_from_inventory_config() {
        let config = InventoryConfig {
            organizations: vec!["acme".into()],
            include_topics: vec!["tooling".into()],
            omit_names: vec!["sandbox".into()],
            ..Default::default()
        };
        let crit = FilterCriteria::from(&config);
        assert_eq!(crit.organizations, ["acme"]);
        assert_eq!(crit.include_topics, ["tooling"]);
        assert_eq!(crit.omit_names, ["sandbox"]);
        assert!(crit.include_predicates.is_empty());
    }
}
