//! The live board session: index, projection, widget and refresh scheduling.

use std::collections::BTreeSet;
use std::time::{Duration, Instant};

use orgboard_classify::{ColumnLookup, writes_for_move};
use orgboard_index::{BoardRules, EntryStore, RecordEvent, RecordStore, apply_event, build_entries};
use orgboard_model::{BoardConfig, BoardError, ColumnCards, ColumnId, Result, is_group_header_id};
use orgboard_view::{ViewOptions, project, project_column};
use tracing::{debug, warn};

use crate::patch::sync_column;
use crate::widget::BoardWidget;

/// Delays governing refresh coalescing and self-echo suppression.
#[derive(Debug, Clone, Copy)]
pub struct SessionTiming {
    /// Quiet period after the last dirty column before the widget is patched.
    pub refresh_delay: Duration,
    /// Window after an internal frontmatter write during which the first
    /// metadata-changed event is treated as our own echo.
    pub echo_window: Duration,
}

impl Default for SessionTiming {
    fn default() -> Self {
        Self {
            refresh_delay: Duration::from_millis(50),
            echo_window: Duration::from_millis(250),
        }
    }
}

type CardRenderer<T> = Box<dyn Fn(&T) -> String>;

/// One mounted board: the entry index plus the machinery keeping an attached
/// widget in sync with it.
///
/// The session owns no clock; every time-sensitive operation takes `now` from
/// the caller, and the caller drives [`poll`](Self::poll) from its own timer.
pub struct BoardSession<T, W: BoardWidget> {
    config: BoardConfig,
    lookup: ColumnLookup,
    rules: BoardRules<T>,
    renderer: CardRenderer<T>,
    view: ViewOptions<T>,
    entries: EntryStore<T>,
    widget: Option<W>,
    pending: BTreeSet<ColumnId>,
    refresh_at: Option<Instant>,
    suppress_until: Option<Instant>,
    timing: SessionTiming,
}

impl<T, W: BoardWidget> BoardSession<T, W> {
    pub fn new(
        config: BoardConfig,
        rules: BoardRules<T>,
        renderer: impl Fn(&T) -> String + 'static,
        view: ViewOptions<T>,
    ) -> Self {
        let lookup = ColumnLookup::new(&config.columns);
        let entries = EntryStore::new(&config.columns);
        Self {
            config,
            lookup,
            rules,
            renderer: Box::new(renderer),
            view,
            entries,
            widget: None,
            pending: BTreeSet::new(),
            refresh_at: None,
            suppress_until: None,
            timing: SessionTiming::default(),
        }
    }

    pub fn with_timing(mut self, timing: SessionTiming) -> Self {
        self.timing = timing;
        self
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn entries(&self) -> &EntryStore<T> {
        &self.entries
    }

    /// Projects every configured column from the current index.
    pub fn project_all(&self) -> Vec<ColumnCards> {
        project(&self.config.columns, &self.entries, &self.renderer, &self.view)
    }

    /// Rebuilds the index from scratch and resets the widget to match.
    ///
    /// Any queued partial refresh is dropped; the reset supersedes it.
    pub fn rebuild(&mut self, store: &dyn RecordStore) {
        self.entries = build_entries(
            store,
            &self.config.columns,
            &self.config.mapping,
            &self.lookup,
            &self.rules,
        );
        self.pending.clear();
        self.refresh_at = None;
        self.reset_widget();
    }

    /// Swaps in a new configuration. The old index is unusable under the new
    /// column set and rule, so this always rebuilds.
    pub fn set_config(&mut self, config: BoardConfig, store: &dyn RecordStore) {
        self.lookup = ColumnLookup::new(&config.columns);
        self.config = config;
        self.rebuild(store);
    }

    /// Attaches a widget and paints the full board onto it.
    pub fn attach_widget(&mut self, widget: W) {
        self.widget = Some(widget);
        self.reset_widget();
    }

    pub fn detach_widget(&mut self) -> Option<W> {
        self.widget.take()
    }

    /// Applies one record event to the index and queues the stale columns.
    ///
    /// The index is always updated; the echo window only decides whether the
    /// widget gets repainted. The first metadata-changed event inside the
    /// window after one of our own frontmatter writes schedules no refresh,
    /// since the widget already shows the card where the user dropped it.
    pub fn handle_event(&mut self, store: &dyn RecordStore, event: &RecordEvent, now: Instant) {
        let stale = apply_event(
            &mut self.entries,
            store,
            &self.config.mapping,
            &self.lookup,
            &self.rules,
            event,
        );
        if matches!(event, RecordEvent::Changed { .. })
            && let Some(deadline) = self.suppress_until.take()
            && now <= deadline
        {
            debug!(?event, "skipping widget refresh for echoed write");
            return;
        }
        self.schedule(stale, now);
    }

    /// Marks columns dirty and restarts the refresh delay.
    ///
    /// Keystroke-triggered save bursts keep pushing the deadline out, so one
    /// widget patch covers the whole burst. An empty column set is a no-op:
    /// events that dirtied nothing must not postpone a pending refresh.
    pub fn schedule(&mut self, columns: impl IntoIterator<Item = ColumnId>, now: Instant) {
        let mut dirtied = false;
        for column in columns {
            self.pending.insert(column);
            dirtied = true;
        }
        if dirtied {
            self.refresh_at = Some(now + self.timing.refresh_delay);
        }
    }

    /// Queues every configured column for refresh.
    pub fn schedule_all(&mut self, now: Instant) {
        let all: Vec<ColumnId> = self.config.columns.iter().map(|c| c.id.clone()).collect();
        self.schedule(all, now);
    }

    /// Flushes the pending refresh if its delay has elapsed.
    ///
    /// Returns `true` when a refresh ran. Dirty columns are patched
    /// individually; columns no longer in the configuration are skipped.
    pub fn poll(&mut self, now: Instant) -> Result<bool> {
        let Some(deadline) = self.refresh_at else {
            return Ok(false);
        };
        if now < deadline {
            return Ok(false);
        }
        self.refresh_at = None;
        let dirty = std::mem::take(&mut self.pending);
        let Some(widget) = self.widget.as_mut() else {
            return Ok(true);
        };
        for id in dirty {
            let Some(column) = self.config.column(&id) else {
                continue;
            };
            let cards = project_column(column, &self.entries, &self.renderer, &self.view);
            sync_column(widget, &cards).map_err(BoardError::Widget)?;
        }
        Ok(true)
    }

    /// Handles a card dropped onto a column.
    ///
    /// Writes the frontmatter mutations that make the classification rule
    /// agree with the drop, moves the index entry optimistically, and arms
    /// the echo window so the resulting metadata-changed event is not
    /// processed a second time. Write failures are logged and the optimistic
    /// move stands; the next real event for the record corrects the index.
    pub fn handle_drop(
        &mut self,
        store: &mut dyn RecordStore,
        card_id: &str,
        target: &ColumnId,
        now: Instant,
    ) -> Result<()> {
        if is_group_header_id(card_id) {
            return Ok(());
        }
        let column = self
            .config
            .column(target)
            .ok_or_else(|| BoardError::UnknownColumn(target.to_string()))?;
        let writes = writes_for_move(column, &self.config.mapping);
        if let Err(error) = store.apply_writes(card_id, &writes) {
            warn!(path = card_id, %error, "frontmatter write for drop failed");
        }
        self.suppress_until = Some(now + self.timing.echo_window);

        let mut stale = BTreeSet::from([target.clone()]);
        if let Some(from) = self.entries.move_entry(card_id, target) {
            stale.insert(from);
        }
        self.schedule(stale, now);
        Ok(())
    }

    fn reset_widget(&mut self) {
        if self.widget.is_none() {
            return;
        }
        let columns = self.project_all();
        if let Some(widget) = self.widget.as_mut()
            && let Err(error) = widget.reset(&columns)
        {
            warn!(%error, "widget reset failed; detaching widget");
            self.widget = None;
        }
    }
}
