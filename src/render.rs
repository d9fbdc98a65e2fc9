//! Presentation of computed link sequences.
//!
//! The core crate only decides which links exist. This module turns them
//! into an HTML list or a one-line terminal rendering.

use serde::{Deserialize, Serialize};

use range_pager_core::Link;

/// Placeholder in [`RenderOptions::url`] replaced by the target page number.
pub const PAGE_PLACEHOLDER: &str = "%n";

/// Markup options for [`html`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Link URL template, `%n` is the page number (default: "/page/%n")
    pub url: String,
    pub list_class: String,
    pub item_class: String,
    pub link_class: String,
    pub prev_class: String,
    pub next_class: String,
    pub first_class: String,
    pub last_class: String,
    pub active_class: String,
    pub gap_class: String,
    pub prev_text: String,
    pub next_text: String,
    pub first_text: String,
    pub last_text: String,
    pub gap_text: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            url: "/page/%n".to_string(),
            list_class: "range-paginator".to_string(),
            item_class: String::new(),
            link_class: String::new(),
            prev_class: "prev".to_string(),
            next_class: "next".to_string(),
            first_class: "first".to_string(),
            last_class: "last".to_string(),
            active_class: "active".to_string(),
            gap_class: "empty".to_string(),
            prev_text: "&laquo; Previous".to_string(),
            next_text: "Next &raquo;".to_string(),
            first_text: "First".to_string(),
            last_text: "Last".to_string(),
            gap_text: "&nbsp;...&nbsp;".to_string(),
        }
    }
}

/// Substitute the first `%n` in `template` with `page`.
pub fn href(template: &str, page: u64) -> String {
    template.replacen(PAGE_PLACEHOLDER, &page.to_string(), 1)
}

/// Render links as a `<ul>` with one `<li>` per link.
///
/// An empty sequence renders as an empty string.
pub fn html(links: &[Link], options: &RenderOptions) -> String {
    if links.is_empty() {
        return String::new();
    }

    let mut out = format!("<ul class=\"{}\">", options.list_class);
    for link in links {
        let (label, class) = match link {
            Link::Page { number, active } => {
                let class = if *active { options.active_class.as_str() } else { "" };
                (number.to_string(), class)
            }
            Link::Ellipsis => (options.gap_text.clone(), options.gap_class.as_str()),
            Link::First { .. } => (options.first_text.clone(), options.first_class.as_str()),
            Link::Last { .. } => (options.last_text.clone(), options.last_class.as_str()),
            Link::Prev { .. } => (options.prev_text.clone(), options.prev_class.as_str()),
            Link::Next { .. } => (options.next_text.clone(), options.next_class.as_str()),
        };
        let url = link.target().map(|page| href(&options.url, page));
        push_item(&mut out, options, url.as_deref(), &label, class);
    }
    out.push_str("</ul>");

    tracing::debug!(links = links.len(), bytes = out.len(), "Rendered html");
    out
}

fn push_item(out: &mut String, options: &RenderOptions, url: Option<&str>, label: &str, class: &str) {
    let classes: Vec<&str> = [options.item_class.as_str(), class]
        .into_iter()
        .filter(|c| !c.is_empty())
        .collect();

    out.push_str(&format!("<li class=\"{}\">", classes.join(" ")));
    match url {
        Some(url) => out.push_str(&format!(
            "<a class=\"{}\" href=\"{}\"><span>{}</span></a>",
            options.link_class, url, label
        )),
        None => out.push_str(&format!("<span>{}</span>", label)),
    }
    out.push_str("</li>");
}

/// Render links on a single line for terminal output.
///
/// The active page is bracketed, e.g. `« First ‹ Prev 1 … 9 [10] 11 … 20 Next › Last »`.
pub fn text(links: &[Link]) -> String {
    links
        .iter()
        .map(|link| match link {
            Link::Page { number, active: true } => format!("[{}]", number),
            Link::Page { number, .. } => number.to_string(),
            Link::Ellipsis => "…".to_string(),
            Link::First { .. } => "« First".to_string(),
            Link::Last { .. } => "Last »".to_string(),
            Link::Prev { .. } => "‹ Prev".to_string(),
            Link::Next { .. } => "Next ›".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use range_pager_core::{compute, PaginationConfig};

    fn windowed() -> Vec<Link> {
        compute(&PaginationConfig {
            total: 500,
            current: 10,
            ..Default::default()
        })
    }

    #[test]
    fn href_replaces_placeholder() {
        assert_eq!(href("/page/%n", 7), "/page/7");
        assert_eq!(href("/list?p=%n&q=%n", 3), "/list?p=3&q=%n");
        assert_eq!(href("/static", 3), "/static");
    }

    #[test]
    fn empty_sequence_renders_nothing() {
        assert_eq!(html(&[], &RenderOptions::default()), "");
        assert_eq!(text(&[]), "");
    }

    #[test]
    fn html_two_pages() {
        let links = compute(&PaginationConfig {
            total: 50,
            ..Default::default()
        });
        let want = concat!(
            "<ul class=\"range-paginator\">",
            "<li class=\"first\"><a class=\"\" href=\"/page/1\"><span>First</span></a></li>",
            "<li class=\"active\"><a class=\"\" href=\"/page/1\"><span>1</span></a></li>",
            "<li class=\"\"><a class=\"\" href=\"/page/2\"><span>2</span></a></li>",
            "<li class=\"last\"><a class=\"\" href=\"/page/2\"><span>Last</span></a></li>",
            "</ul>",
        );

        assert_eq!(html(&links, &RenderOptions::default()), want);
    }

    #[test]
    fn html_gap_has_no_anchor() {
        let options = RenderOptions {
            url: "?page=%n".to_string(),
            item_class: "item".to_string(),
            ..Default::default()
        };
        let out = html(&windowed(), &options);

        assert!(out.contains("<li class=\"item empty\"><span>&nbsp;...&nbsp;</span></li>"));
        assert!(out.contains(
            "<li class=\"item prev\"><a class=\"\" href=\"?page=9\"><span>&laquo; Previous</span></a></li>"
        ));
        assert!(out.contains("<li class=\"item active\"><a class=\"\" href=\"?page=10\"><span>10</span></a></li>"));
        assert!(out.contains("href=\"?page=11\"><span>Next &raquo;</span>"));
        assert_eq!(out.matches("<li ").count(), windowed().len());
    }

    #[test]
    fn text_line() {
        assert_eq!(
            text(&windowed()),
            "« First ‹ Prev 1 … 8 9 [10] 11 12 … 20 Next › Last »"
        );
    }

    #[test]
    fn options_from_partial_toml() {
        let options: RenderOptions = toml::from_str("url = \"/items/%n\"\nactive_class = \"current\"").unwrap();
        assert_eq!(options.url, "/items/%n");
        assert_eq!(options.active_class, "current");
        assert_eq!(options.gap_class, "empty");
    }
}
