//! Topic grouping: fan each repository out into one entry per topic.

use roster_shared::{Repository, TopicGroups};
use tracing::debug;

/// Group repositories by topic tag.
///
/// A repository with N topics lands in exactly N groups, once per topic,
/// never deduplicated across groups. A repository with no topics lands in
/// no group at all and is silently absent from every rendered section.
/// Group order is first-seen across the input sequence.
pub fn group_by_topic(repositories: &[Repository]) -> TopicGroups {
    let mut groups = TopicGroups::default();
    for repo in repositories {
        for topic in &repo.topics {
            groups.push(topic, repo.clone());
        }
    }

    debug!(
        repositories = repositories.len(),
        topics = groups.len(),
        "grouped repositories by topic"
    );
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn repo(name: &str, topics: &[&str]) -> Repository {
        Repository {
            name: name.into(),
            description: String::new(),
            url: format!("u-{name}"),
            topics: topics.iter().map(|t| t.to_string()).collect(),
            organization: "acme".into(),
            updated_at: Utc::now(),
            pushed_at: Utc::now(),
        }
    }

    #[test]
    fn repository_appears_once_per_topic() {
        let repos = vec![repo("a", &["x", "y", "z"])];
        let groups = group_by_topic(&repos);

        assert_eq!(groups.len(), 3);
        for topic in ["x", "y", "z"] {
            let group = groups.get(topic).expect("group exists");
            assert_eq!(group.repositories.len(), 1);
            assert_eq!(group.repositories[0].name, "a");
        }
    }

    #[test]
    fn untagged_repository_contributes_to_no_group() {
        let repos = vec![repo("a", &["x"]), repo("untagged", &[])];
        let groups = group_by_topic(&repos);

        assert_eq!(groups.len(), 1);
        assert!(groups.get("x").is_some());
    }

    #[test]
    fn group_order_is_first_seen_not_alphabetical() {
        let repos = vec![repo("a", &["zeta", "alpha"]), repo("b", &["midway"])];
        let groups = group_by_topic(&repos);

        let order: Vec<&str> = groups.iter().map(|g| g.topic.as_str()).collect();
        assert_eq!(order, ["zeta", "alpha", "midway"]);
    }

    #[test]
    fn shared_topic_accumulates_in_input_order() {
        let repos = vec![repo("a", &["x", "y"]), repo("b", &["y"])];
        let groups = group_by_topic(&repos);

        let x_names: Vec<&str> = groups
            .get("x")
            .unwrap()
            .repositories
            .iter()
            .map(|r| r.name.as_str())
            .collect();
        let y_names: Vec<&str> = groups
            .get("y")
            .unwrap()
            .repositories
            .iter()
            .map(|r| r.name.as_str())
            .collect();

        assert_eq!(x_names, ["a"]);
        assert_eq!(y_names, ["a", "b"]);
    }

    #[test]
    fn empty_input_yields_empty_map() {
        assert!(group_by_topic(&[]).is_empty());
    }
}
