use okra_core::datefmt;
use okra_core::types::Objective;
use okra_core::Page;

/// Format a key-value pair for display.
pub fn kv(key: &str, value: &str) -> String {
    format!("{key:>16}: {value}")
}

/// Format a header line.
pub fn header(title: &str) -> String {
    format!("=== {title} ===")
}

/// Render one objective as a text tile.
pub fn tile(obj: &Objective) -> String {
    let mut out = format!("[{}] {} ({}, {})\n", obj.id, obj.title, obj.status, obj.rag);
    out.push_str(&kv("from", &datefmt::to_display(&obj.from_date)));
    out.push('\n');
    out.push_str(&kv("to", &datefmt::to_display(&obj.to_date)));
    out.push('\n');
    out.push_str(&kv("assignee", &obj.assignee));
    out.push('\n');
    out.push_str(&kv("owner", &obj.owner));
    out.push('\n');
    out.push_str(&kv(
        "last updated",
        &datefmt::to_display(&obj.last_updated),
    ));
    out
}

/// Render the pagination footer.
pub fn page_footer(page: &Page<Objective>, total_items: usize) -> String {
    let mut out = format!(
        "page {} of {} ({} objectives)",
        page.number, page.total_pages, total_items
    );
    if !page.is_last() {
        out.push_str(", rerun with --page to see more");
    }
    out
}
