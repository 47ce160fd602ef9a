//! Active-channel tracking and selection epochs.
//!
//! [`SelectionController`] is the single source of truth for "which channel
//! is active" and the only writer of unread-clearing decisions. Every change
//! of selection advances a monotonically increasing [`Epoch`]; reconciling
//! fetches are tagged with the epoch at issue time so results that complete
//! after the user has moved on can be discarded instead of overwriting the
//! newer view.

use natter_proto::ChannelId;

/// Monotonically increasing counter identifying the current selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Epoch(u64);

/// Tracks the single active channel.
///
/// At most one channel is selected at any time; no selection is a valid
/// state (message send is disabled while unselected).
#[derive(Debug, Clone, Default)]
pub struct SelectionController {
    selected: Option<ChannelId>,
    epoch: Epoch,
}

impl SelectionController {
    /// Create a controller with nothing selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently selected channel, if any.
    pub fn selected(&self) -> Option<&ChannelId> {
        self.selected.as_ref()
    }

    /// True if `id` is the selected channel.
    pub fn is_selected(&self, id: &ChannelId) -> bool {
        self.selected.as_ref() == Some(id)
    }

    /// Current selection epoch.
    pub fn epoch(&self) -> Epoch {
        self.epoch
    }

    /// True if `epoch` matches the current selection epoch.
    ///
    /// Fetch completions carrying a stale epoch must be discarded.
    pub fn is_current(&self, epoch: Epoch) -> bool {
        self.epoch == epoch
    }

    /// Select `id` and advance the epoch.
    ///
    /// Re-selecting the already selected channel still advances the epoch so
    /// in-flight reloads for the previous view cannot land afterwards.
    pub fn select(&mut self, id: ChannelId) -> Epoch {
        self.selected = Some(id);
        self.epoch = Epoch(self.epoch.0 + 1);
        self.epoch
    }

    /// Clear the selection and advance the epoch.
    pub fn clear(&mut self) -> Epoch {
        self.selected = None;
        self.epoch = Epoch(self.epoch.0 + 1);
        self.epoch
    }
}
