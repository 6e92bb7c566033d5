//! Pure projection of the entry index into renderable columns.

use std::cmp::Ordering;

use orgboard_index::{BoardEntry, EntryStore};
use orgboard_model::{Card, ColumnCards, ColumnDef, Frontmatter, GROUP_HEADER_CLASS, group_header_id};

use crate::escape::escape_html;

/// Reserved bucket for entries whose grouping function yields nothing usable.
/// Participates in the default lexicographic bucket order like any other key.
pub const UNGROUPED: &str = "Ungrouped";

type RuntimeFilter<T> = Box<dyn Fn(&T, &Frontmatter) -> bool>;
type ItemSort<T> = Box<dyn Fn(&T, &T) -> Ordering>;
type GroupKey<T> = Box<dyn Fn(&T, &Frontmatter) -> Option<String>>;
type GroupLabel = Box<dyn Fn(&str) -> String>;
type GroupOrder = Box<dyn Fn(&str, &str) -> Ordering>;

/// Runtime rendering options, composable with (and independent of) the
/// structural rules the index was built from.
pub struct ViewOptions<T> {
    /// CSS class stamped on every real card.
    pub card_class: String,
    /// Per-render predicate over the transformed item and its frontmatter.
    pub runtime_filter: Option<RuntimeFilter<T>>,
    /// Stable comparator over transformed items only.
    pub sort: Option<ItemSort<T>>,
    /// Secondary bucketing within a column, rendered with header cards.
    pub group_by: Option<GroupKey<T>>,
    /// Display label for a group key; the key itself when unset.
    pub group_label: Option<GroupLabel>,
    /// Bucket order; lexicographic by key when unset.
    pub group_order: Option<GroupOrder>,
}

impl<T> Default for ViewOptions<T> {
    fn default() -> Self {
        Self {
            card_class: String::new(),
            runtime_filter: None,
            sort: None,
            group_by: None,
            group_label: None,
            group_order: None,
        }
    }
}

impl<T> ViewOptions<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_card_class(mut self, class: impl Into<String>) -> Self {
        self.card_class = class.into();
        self
    }

    pub fn with_runtime_filter(
        mut self,
        filter: impl Fn(&T, &Frontmatter) -> bool + 'static,
    ) -> Self {
        self.runtime_filter = Some(Box::new(filter));
        self
    }

    pub fn with_sort(mut self, sort: impl Fn(&T, &T) -> Ordering + 'static) -> Self {
        self.sort = Some(Box::new(sort));
        self
    }

    pub fn with_group_by(
        mut self,
        group_by: impl Fn(&T, &Frontmatter) -> Option<String> + 'static,
    ) -> Self {
        self.group_by = Some(Box::new(group_by));
        self
    }

    pub fn with_group_label(mut self, label: impl Fn(&str) -> String + 'static) -> Self {
        self.group_label = Some(Box::new(label));
        self
    }

    pub fn with_group_order(
        mut self,
        order: impl Fn(&str, &str) -> Ordering + 'static,
    ) -> Self {
        self.group_order = Some(Box::new(order));
        self
    }
}

/// Projects every configured column. Pure and side-effect free; re-run
/// wholesale on configuration or option changes, per column on incremental
/// updates.
pub fn project<T>(
    columns: &[ColumnDef],
    entries: &EntryStore<T>,
    render: &dyn Fn(&T) -> String,
    options: &ViewOptions<T>,
) -> Vec<ColumnCards> {
    columns
        .iter()
        .map(|column| project_column(column, entries, render, options))
        .collect()
}

/// Projects a single column: runtime filter, stable sort, optional grouping.
pub fn project_column<T>(
    column: &ColumnDef,
    entries: &EntryStore<T>,
    render: &dyn Fn(&T) -> String,
    options: &ViewOptions<T>,
) -> ColumnCards {
    let mut visible: Vec<&BoardEntry<T>> = entries
        .entries(&column.id)
        .iter()
        .filter(|entry| {
            options
                .runtime_filter
                .as_ref()
                .is_none_or(|filter| filter(&entry.item, &entry.frontmatter))
        })
        .collect();
    if let Some(sort) = &options.sort {
        // sort_by is stable: equal items keep their index order
        visible.sort_by(|a, b| sort(&a.item, &b.item));
    }

    let mut cards = Vec::with_capacity(visible.len());
    match &options.group_by {
        None => {
            for entry in visible {
                cards.push(card_for(entry, render, options));
            }
        }
        Some(group_by) => {
            let mut groups: Vec<(String, Vec<&BoardEntry<T>>)> = Vec::new();
            for entry in visible {
                let key = resolve_group(group_by(&entry.item, &entry.frontmatter));
                match groups.iter_mut().find(|(existing, _)| *existing == key) {
                    Some((_, bucket)) => bucket.push(entry),
                    None => groups.push((key, vec![entry])),
                }
            }
            groups.sort_by(|(a, _), (b, _)| match &options.group_order {
                Some(order) => order(a, b),
                None => a.cmp(b),
            });
            for (key, bucket) in groups {
                let label = options
                    .group_label
                    .as_ref()
                    .map_or_else(|| key.clone(), |label| label(&key));
                cards.push(Card {
                    id: group_header_id(&column.id, &key),
                    html: format!(
                        "<div class=\"kanban-group-label\">{}</div>",
                        escape_html(&label)
                    ),
                    class: GROUP_HEADER_CLASS.to_string(),
                });
                for entry in bucket {
                    cards.push(card_for(entry, render, options));
                }
            }
        }
    }

    ColumnCards {
        id: column.id.clone(),
        title: column.title.clone(),
        cards,
    }
}

fn resolve_group(raw: Option<String>) -> String {
    match raw {
        Some(key) if !key.trim().is_empty() => key,
        _ => UNGROUPED.to_string(),
    }
}

fn card_for<T>(
    entry: &BoardEntry<T>,
    render: &dyn Fn(&T) -> String,
    options: &ViewOptions<T>,
) -> Card {
    Card {
        id: entry.path.clone(),
        html: render(&entry.item),
        class: options.card_class.clone(),
    }
}
