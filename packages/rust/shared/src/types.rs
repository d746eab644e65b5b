//! Core domain types for the roster inventory pipeline.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Repository
// ---------------------------------------------------------------------------

/// A source-code repository record, as supplied by the repository source.
///
/// Read-only to the pipeline: records are fetched fresh per invocation and
/// never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Repository {
    /// Repository name, unique within an organization.
    pub name: String,
    /// Free-text description; may be empty.
    #[serde(default)]
    pub description: String,
    /// Canonical web address.
    pub url: String,
    /// Topic tags, in the repository's own stored order; may be empty.
    #[serde(default)]
    pub topics: Vec<String>,
    /// Owning organization, used as a filter dimension.
    pub organization: String,
    /// When the repository was last updated (display only).
    pub updated_at: DateTime<Utc>,
    /// When the repository was last pushed to (display only).
    pub pushed_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// TopicGroups
// ---------------------------------------------------------------------------

/// One topic and the repositories carrying it, in input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicGroup {
    /// The topic tag.
    pub topic: String,
    /// Repositories carrying this topic, in the order they were grouped.
    pub repositories: Vec<Repository>,
}

/// Topic → repositories mapping in first-seen topic order.
///
/// Vec-backed so that section order in the rendered page is structural:
/// the first repository to carry a topic determines where that topic's
/// section appears. A repository with N topics appears in exactly N groups.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TopicGroups {
    /// Groups in first-seen topic order.
    pub groups: Vec<TopicGroup>,
}

impl TopicGroups {
    /// Append a repository to the group for `topic`, creating the group on
    /// first encounter (at the end, preserving first-seen order).
    pub fn push(&mut self, topic: &str, repository: Repository) {
        match self.groups.iter_mut().find(|g| g.topic == topic) {
            Some(group) => group.repositories.push(repository),
            None => self.groups.push(TopicGroup {
                topic: topic.to_string(),
                repositories: vec![repository],
            }),
        }
    }

    /// Look up a group by topic.
    pub fn get(&self, topic: &str) -> Option<&TopicGroup> {
        self.groups.iter().find(|g| g.topic == topic)
    }

    /// Number of topic groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether there are no groups at all.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Iterate groups in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &TopicGroup> {
        self.groups.iter()
    }
}

// ---------------------------------------------------------------------------
// InventoryPage
// ---------------------------------------------------------------------------

/// A fully assembled inventory page, ready to publish.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryPage {
    /// Page title.
    pub title: String,
    /// Free-text preamble shown before the topic sections.
    pub description: String,
    /// Rendered Markdown body (title + description + all topic sections).
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo(name: &str, topics: &[&str]) -> Repository {
        Repository {
            name: name.into(),
            description: format!("{name} description"),
            url: format!("https://github.com/acme/{name}"),
            topics: topics.iter().map(|t| t.to_string()).collect(),
            organization: "acme".into(),
            updated_at: Utc::now(),
            pushed_at: Utc::now(),
        }
    }

    #[test]
    fn topic_groups_preserve_first_seen_order() {
        let mut groups = TopicGroups::default();
        groups.push("zeta", repo("a", &["zeta"]));
        groups.push("alpha", repo("b", &["alpha"]));
        groups.push("zeta", repo("c", &["zeta"]));

        let order: Vec<&str> = groups.iter().map(|g| g.topic.as_str()).collect();
        assert_eq!(order, ["zeta", "alpha"]);
        assert_eq!(groups.get("zeta").unwrap().repositories.len(), 2);
    }

    #[test]
    fn repository_deserializes_with_missing_optional_fields() {
        let json = r#"{
            "name": "widgets",
            "url": "https://github.com/acme/widgets",
            "organization": "acme",
            "updated_at": "2024-05-01T12:00:00Z",
            "pushed_at": "2024-05-02T12:00:00Z"
        }"#;
        let repo: Repository = serde_json::from_str(json).expect("deserialize");
        assert_eq!(repo.description, "");
        assert!(repo.topics.is_empty());
    }
}
