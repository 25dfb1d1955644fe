use baitulmal_core::navigation::{navigation_links, visible_links, NavLink};
use baitulmal_domain::Result;
use serde_json::{json, Value};

use super::{render, OutputFormat};
use crate::context::AppContext;

fn to_json(links: &[NavLink]) -> Value {
    links
        .iter()
        .map(|link| {
            json!({ "to": link.to, "label": link.label, "children": to_json(&link.children) })
        })
        .collect()
}

fn to_text(links: &[NavLink], depth: usize, out: &mut String) {
    for link in links {
        out.push_str(&format!("{}{}  {}\n", "  ".repeat(depth), link.label, link.to));
        to_text(&link.children, depth + 1, out);
    }
}

/// Sidebar entries for the stored session's role
pub fn links(ctx: &AppContext, format: OutputFormat) -> Result<String> {
    let role = ctx.viewer_role()?;
    let links = visible_links(&navigation_links(), role);
    render(format, &to_json(&links), |_| {
        let mut out = String::new();
        to_text(&links, 0, &mut out);
        out.trim_end().to_string()
    })
}
