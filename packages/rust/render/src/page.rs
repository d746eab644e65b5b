//! Full inventory page assembly.

use roster_shared::{InventoryPage, TopicGroups};
use tracing::instrument;

use crate::list::render_topic_list;

/// Assemble the complete inventory page: title, description, then the
/// rendered topic sections.
#[instrument(skip_all, fields(title = %title, topics = groups.len()))]
pub fn render_page(title: &str, description: &str, groups: &TopicGroups) -> InventoryPage {
    let mut body = String::new();
    body.push_str(&format!("# {title}\n\n"));
    body.push_str(&format!("{description}\n\n"));
    body.push_str(&render_topic_list(groups));

    InventoryPage {
        title: title.to_string(),
        description: description.to_string(),
        body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use roster_shared::Repository;

    fn repo(name: &str) -> Repository {
        Repository {
            name: name.into(),
            description: "desc".into(),
            url: format!("https://github.com/acme/{name}"),
            topics: vec!["tools".into()],
            organization: "acme".into(),
            updated_at: Utc::now(),
            pushed_at: Utc::now(),
        }
    }

    #[test]
    fn page_carries_title_and_description_ahead_of_sections() {
        let mut groups = TopicGroups::default();
        groups.push("tools", repo("a"));

        let page = render_page("Inventory", "All the repos.", &groups);
        assert!(page.body.starts_with("# Inventory\n\nAll the repos.\n\n## tools\n"));
        assert_eq!(page.title, "Inventory");
        assert_eq!(page.description, "All the repos.");
    }

    #[test]
    fn empty_group_map_yields_front_matter_only() {
        let page = render_page("Inventory", "All the repos.", &TopicGroups::default());
        assert_eq!(page.body, "# Inventory\n\nAll the repos.\n\n");
    }
}
