//! HTML rendering of organiser cards.

use orgboard_view::escape_html;

use crate::item::{ItemKind, OrganiserItem};

/// CSS class stamped on every organiser card.
pub const CARD_CLASS: &str = "organiser-card";

const RECIPE_ICON: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="14" height="14" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M3 2v7c0 1.1.9 2 2 2h4a2 2 0 0 0 2-2V2"/><path d="M7 2v20"/><path d="M21 15V2v0a5 5 0 0 0-5 5v6c0 1.1.9 2 2 2h3Zm0 0v7"/></svg>"#;
const EXERCISE_ICON: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="14" height="14" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="m6.5 6.5 11 11"/><path d="m21 21-1-1"/><path d="m3 3 1 1"/><path d="m18 22 4-4"/><path d="m2 6 4-4"/><path d="m3 10 7-7"/><path d="m14 21 7-7"/></svg>"#;
const TASK_ICON: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="14" height="14" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><rect x="3" y="3" width="18" height="18" rx="2" ry="2"/><path d="m9 12 2 2 4-4"/></svg>"#;

/// Maps vault-relative paths to displayable resource URLs.
///
/// Cover values naming vault files cannot be embedded as-is; the embedder
/// owns the vault and knows how to serve its files.
pub trait VaultResolver {
    /// Resource URL for a vault path, or `None` when no such file exists.
    fn resource_url(&self, vault_path: &str) -> Option<String>;
}

impl<F: Fn(&str) -> Option<String>> VaultResolver for F {
    fn resource_url(&self, vault_path: &str) -> Option<String> {
        self(vault_path)
    }
}

/// Renders one card's inner HTML. All interpolated metadata is escaped.
pub fn render_card(item: &OrganiserItem, resolver: &dyn VaultResolver) -> String {
    let icon = match item.kind {
        ItemKind::Recipe => RECIPE_ICON,
        ItemKind::Exercise => EXERCISE_ICON,
        ItemKind::Task | ItemKind::Unknown => TASK_ICON,
    };
    let title = escape_html(&item.title);
    let cover = match resolve_cover(item, resolver) {
        Some(url) => format!(
            r#"<div class="card-cover"><img src="{}" alt="{title}" draggable="false" /></div>"#,
            escape_html(&url)
        ),
        None => String::new(),
    };
    format!(
        r#"<div class="organiser-card-content">{cover}<div class="card-header">{icon}<div class="card-title">{title}</div></div></div>"#
    )
}

/// Resolves an item's cover value to an embeddable URL.
///
/// Accepts plain or wiki-link (`![[path|alias]]`) values. Known-safe remote
/// and app schemes pass through unchanged; everything else is treated as a
/// vault path, tried verbatim and then relative to the item's own directory.
/// Values with any other URL scheme or a protocol-relative prefix resolve to
/// `None` rather than ending up in an `img src`.
pub fn resolve_cover(item: &OrganiserItem, resolver: &dyn VaultResolver) -> Option<String> {
    let raw = item.cover.as_deref()?.trim();
    if raw.is_empty() {
        return None;
    }
    let normalized = strip_wiki_link(raw).replace('\\', "/");
    if normalized.is_empty() || !is_safe_cover_url(&normalized) {
        return None;
    }
    if has_allowed_scheme(&normalized) {
        return Some(normalized);
    }

    let vault_path = normalized
        .trim_start_matches("./")
        .trim_start_matches('/');
    if let Some(url) = resolver.resource_url(vault_path) {
        return Some(url);
    }
    let base_dir = item.path.rsplit_once('/').map(|(dir, _)| dir)?;
    resolver.resource_url(&join_vault_path(base_dir, vault_path))
}

/// Inner target of a `[[...]]` or `![[...]]` link, before any `|alias`.
fn strip_wiki_link(value: &str) -> String {
    let inner = value
        .strip_prefix('!')
        .unwrap_or(value)
        .strip_prefix("[[")
        .and_then(|rest| rest.strip_suffix("]]"))
        .unwrap_or(value);
    let target = inner.split('|').next().unwrap_or("");
    target.trim().to_string()
}

fn has_allowed_scheme(value: &str) -> bool {
    let lower = value.to_lowercase();
    ["http://", "https://", "app://", "obsidian://"]
        .iter()
        .any(|scheme| lower.starts_with(scheme))
}

fn is_safe_cover_url(value: &str) -> bool {
    if has_allowed_scheme(value) {
        return true;
    }
    let lower = value.to_lowercase();
    if lower.starts_with("//") {
        return false;
    }
    !has_url_scheme(&lower)
}

/// True when the value starts with `scheme:` per RFC 3986 scheme syntax.
fn has_url_scheme(value: &str) -> bool {
    let Some((scheme, _)) = value.split_once(':') else {
        return false;
    };
    let mut chars = scheme.chars();
    match chars.next() {
        Some(first) if first.is_ascii_lowercase() => chars
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '+' | '.' | '-')),
        _ => false,
    }
}

/// Joins a relative path onto a base directory, resolving `.` and `..`
/// segments without ever escaping the vault root.
fn join_vault_path(base_dir: &str, relative: &str) -> String {
    let mut resolved: Vec<&str> = Vec::new();
    for part in base_dir.split('/').chain(relative.split('/')) {
        match part {
            "" | "." => {}
            ".." => {
                resolved.pop();
            }
            other => resolved.push(other),
        }
    }
    resolved.join("/")
}
