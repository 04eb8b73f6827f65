//! Section renderer
//!
//! Renders the "open source" section to an HTML fragment: organization cards
//! followed by the contribution feed in whichever state it is in. Styling is
//! left to the page stylesheet; the markup only carries class names.

use chrono::{DateTime, Utc};

use super::relative_time::relative_time;
use crate::app::FeedState;
use crate::domain::entities::{ContributionItem, OrgAffiliation};

pub const EMPTY_FEED_MESSAGE: &str = "No pull requests found.";
pub const PROFILE_LINK_TEXT: &str = "View GitHub Profile";

/// Inputs the feed markup needs besides the state itself
pub struct FeedContext<'a> {
    pub profile_url: &'a str,
    /// Placeholder rows shown while loading
    pub skeleton_rows: u32,
    pub now: DateTime<Utc>,
}

/// Render the whole section
pub fn render_section(
    orgs: &[OrgAffiliation],
    state: &FeedState,
    ctx: &FeedContext<'_>,
) -> String {
    let mut buf = String::new();

    buf.push_str("<section id=\"opensource\" class=\"opensource\">\n");
    buf.push_str("<h2>Contributing to the <span class=\"accent\">Fleet</span></h2>\n");
    buf.push_str(&render_orgs(orgs));
    buf.push_str("<h3 class=\"feed-heading\">Latest Pull Requests</h3>\n");
    buf.push_str(&render_feed(state, ctx));
    buf.push_str("</section>\n");

    buf
}

/// Render the organization cards
pub fn render_orgs(orgs: &[OrgAffiliation]) -> String {
    let mut buf = String::from("<div class=\"org-grid\">\n");
    for org in orgs {
        buf.push_str(&format!(
            "<a class=\"org-card\" href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">\
             <span class=\"org-name\">{}</span>\
             <span class=\"org-role\">{}</span></a>\n",
            escape_html(org.url),
            escape_html(org.name),
            org.role.label(),
        ));
    }
    buf.push_str("</div>\n");
    buf
}

/// Render the feed in its current state
pub fn render_feed(state: &FeedState, ctx: &FeedContext<'_>) -> String {
    match state {
        FeedState::Loading => render_skeleton(ctx.skeleton_rows),
        FeedState::Failed => format!(
            "<div class=\"feed-fallback\">{}</div>\n",
            profile_link(ctx.profile_url)
        ),
        FeedState::Loaded { items } if items.is_empty() => format!(
            "<div class=\"feed-empty\"><p>{}</p>{}</div>\n",
            EMPTY_FEED_MESSAGE,
            profile_link(ctx.profile_url)
        ),
        FeedState::Loaded { items } => {
            let mut buf = String::from("<div class=\"feed-list\">\n");
            for item in items {
                buf.push_str(&render_item(item, ctx.now));
            }
            buf.push_str("</div>\n");
            buf.push_str(&format!(
                "<div class=\"feed-profile\">{}</div>\n",
                profile_link(ctx.profile_url)
            ));
            buf
        }
    }
}

fn render_skeleton(rows: u32) -> String {
    let mut buf = String::from("<div class=\"feed-list feed-skeleton\" aria-busy=\"true\">\n");
    for _ in 0..rows {
        buf.push_str("<div class=\"pr-row pr-row-skeleton\"></div>\n");
    }
    buf.push_str("</div>\n");
    buf
}

fn render_item(item: &ContributionItem, now: DateTime<Utc>) -> String {
    format!(
        "<a class=\"pr-row\" href=\"{url}\" target=\"_blank\" rel=\"noopener noreferrer\">\
         <span class=\"pr-repo\">{repo}</span>\
         <span class=\"pr-title\">{title}</span>\
         <span class=\"pr-number\">{number}</span>\
         <span class=\"pr-status {class}\">{label}</span>\
         <time class=\"pr-updated\" datetime=\"{updated}\">{ago}</time></a>\n",
        url = escape_html(&item.url),
        repo = escape_html(&item.repository),
        title = escape_html(&item.title),
        number = escape_html(&item.sequence_number),
        class = item.status.css_class(),
        label = item.status.label(),
        updated = escape_html(&item.last_updated),
        ago = escape_html(&relative_time(&item.last_updated, now)),
    )
}

fn profile_link(url: &str) -> String {
    format!(
        "<a class=\"profile-link\" href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{} &#8599;</a>",
        escape_html(url),
        PROFILE_LINK_TEXT
    )
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
