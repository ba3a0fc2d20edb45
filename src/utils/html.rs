//! The two fixed HTML fragments of the simple-index page format.
//!
//! Index-consuming tools match these byte-for-byte. The unclosed anchor
//! in the item template matches historical simple-index generators and
//! must stay unclosed.

/// Wrap rendered list items in the fixed page template. Items are joined
/// with a single newline, no trailing newline.
pub fn page(items: &[String]) -> String {
    format!("<html><body><ul>{}</ul></body></html>", items.join("\n"))
}

/// One list item linking `path` with visible text `name`.
pub fn list_item(path: &str, name: &str) -> String {
    format!(r#"<li><a href="{path}">{name}</a>"#)
}
