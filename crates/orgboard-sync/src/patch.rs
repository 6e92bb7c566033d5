//! Minimal-diff reconciliation of one widget column against its projection.

use std::collections::BTreeSet;

use anyhow::Result;
use orgboard_model::ColumnCards;

use crate::widget::BoardWidget;

/// Brings one widget column in line with `target`.
///
/// Diffs by card id: stale cards are removed, missing cards added, cards
/// whose html or class changed are overwritten in place, and the column is
/// reordered to the target order last. Cards that match exactly are not
/// touched, which keeps an in-flight drag on an unrelated card alive.
pub fn sync_column(widget: &mut dyn BoardWidget, target: &ColumnCards) -> Result<()> {
    if !widget.has_column(&target.id) {
        return widget.add_column(target);
    }
    if widget.column_title(&target.id).as_deref() != Some(target.title.as_str()) {
        widget.set_column_title(&target.id, &target.title)?;
    }

    let current = widget.card_ids(&target.id);
    let wanted: BTreeSet<&str> = target.cards.iter().map(|card| card.id.as_str()).collect();
    for card_id in &current {
        if !wanted.contains(card_id.as_str()) {
            widget.remove_card(&target.id, card_id)?;
        }
    }

    let current: BTreeSet<String> = current.into_iter().collect();
    for card in &target.cards {
        if current.contains(&card.id) {
            let body = widget.card_body(&target.id, &card.id);
            let unchanged = body
                .as_ref()
                .is_some_and(|(html, class)| html == &card.html && class == &card.class);
            if !unchanged {
                widget.set_card_body(&target.id, card)?;
            }
        } else {
            widget.add_card(&target.id, card)?;
        }
    }

    let order: Vec<String> = target.cards.iter().map(|card| card.id.clone()).collect();
    widget.reorder_cards(&target.id, &order)
}
