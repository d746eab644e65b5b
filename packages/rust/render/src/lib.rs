//! Markdown rendering for the inventory page.
//!
//! Pure string assembly: a topic group map in, a Markdown document out.
//! Rendering is deterministic — the same input always yields byte-identical
//! output, and section order follows the group map's stored order.

mod list;
mod page;
mod table;

pub use list::render_topic_list;
pub use page::render_page;
pub use table::{REPOSITORY_TABLE_HEADERS, repository_table_rows};
