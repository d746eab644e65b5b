//! Tabular repository display for the confirmation prompt.

use roster_shared::Repository;

/// Column headers for the repository confirmation table.
pub const REPOSITORY_TABLE_HEADERS: [&str; 6] = [
    "ID",
    "Name",
    "Description",
    "URL",
    "Last Updated",
    "Last Pushed",
];

/// Detail rows for a repository list table, with 1-based row ids.
pub fn repository_table_rows(repositories: &[Repository]) -> Vec<Vec<String>> {
    repositories
        .iter()
        .enumerate()
        .map(|(i, repo)| {
            vec![
                (i + 1).to_string(),
                repo.name.clone(),
                repo.description.clone(),
                repo.url.clone(),
                repo.updated_at.to_rfc3339(),
                repo.pushed_at.to_rfc3339(),
            ]
        })
        .collect()
}
