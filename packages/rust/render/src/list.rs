//! Per-topic repository list rendering.

use roster_shared::TopicGroups;

/// Render the topic sections of the inventory page.
///
/// For each topic in map order: a level-2 heading, a blank line, one bullet
/// per repository (`* [<name>](<url>): <description>`), and a trailing blank
/// line after the list. An empty description renders as an empty trailing
/// segment after the colon, not a placeholder.
pub fn render_topic_list(groups: &TopicGroups) -> String {
    let mut markdown = String::new();
    for group in groups.iter() {
        markdown.push_str(&format!("## {}\n\n", group.topic));
        for repo in &group.repositories {
            markdown.push_str(&format!(
                "* [{}]({}): {}\n",
                repo.name, repo.url, repo.description
            ));
        }
        markdown.push('\n');
    }
    markdown
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use roster_shared::Repository;

    fn repo(name: &str, url: &str, description: &str, topics: &[&str]) -> Repository {
        Repository {
            name: name.into(),
            description: description.into(),
            url: url.into(),
            topics: topics.iter().map(|t| t.to_string()).collect(),
            organization: "acme".into(),
            updated_at: Utc::now(),
            pushed_at: Utc::now(),
        }
    }

    #[test]
    fn renders_sections_in_map_order_with_exact_format() {
        let mut groups = TopicGroups::default();
        let a = repo("a", "u1", "d1", &["x", "y"]);
        let b = repo("b", "u2", "", &["y"]);
        groups.push("x", a.clone());
        groups.push("y", a);
        groups.push("y", b);

        let body = render_topic_list(&groups);
        assert_eq!(
            body,
            "## x\n\n* [a](u1): d1\n\n## y\n\n* [a](u1): d1\n* [b](u2): \n\n"
        );

        // Section order matches first-seen topic order, not alphabetical
        let x_pos = body.find("## x").unwrap();
        let y_pos = body.find("## y").unwrap();
        assert!(x_pos < y_pos);
    }

    #[test]
    fn empty_description_renders_as_empty_trailing_segment() {
        let mut groups = TopicGroups::default();
        groups.push("y", repo("b", "u2", "", &["y"]));

        let body = render_topic_list(&groups);
        assert!(body.contains("* [b](u2): \n"));
    }

    #[test]
    fn empty_map_renders_empty_body() {
        let groups = TopicGroups::default();
        assert_eq!(render_topic_list(&groups), "");
    }

    #[test]
    fn rendering_is_idempotent() {
        let mut groups = TopicGroups::default();
        groups.push("x", repo("a", "u1", "d1", &["x"]));
        groups.push("z", repo("c", "u3", "d3", &["z"]));

        let first = render_topic_list(&groups);
        let second = render_topic_list(&groups);
        assert_eq!(first, second);
    }
}
