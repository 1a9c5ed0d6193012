//! Reveal gate state for sections that wait on their images.
//!
//! DESIGN
//! ======
//! Two independent flags per display instance:
//!
//! - `phase`: `Initializing -> WaitingForAssets -> Ready`, restarted whenever
//!   the item list changes.
//! - `mounted`: flipped once after the first paint and never cleared. It gates
//!   entrance animations so they run once per instance, not once per cycle.
//!
//! Every preload cycle gets a generation ticket from [`RevealState::begin`].
//! A settlement carrying an older ticket belongs to a superseded list and is
//! dropped.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

/// Where a display instance is in its asset cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealPhase {
    /// Created, no preload issued yet.
    #[default]
    Initializing,
    /// A preload is in flight; render the placeholder.
    WaitingForAssets,
    /// The latest preload settled; render content.
    Ready,
}

/// What a settlement did to the gate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SettleOutcome {
    /// The current cycle settled; content shows.
    Opened,
    /// The ticket belongs to an older item list.
    Superseded,
    /// The current cycle had already settled.
    AlreadyReady,
}

/// Identifies one preload cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct RevealTicket(u64);

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RevealState {
    phase: RevealPhase,
    mounted: bool,
    generation: u64,
}

impl RevealState {
    pub fn new() -> Self {
        Self::default()
    }

    /// State for an instance with nothing to load: already `Ready`, so the
    /// first render (server or client) shows content.
    pub fn opened() -> Self {
        let mut state = Self::new();
        let ticket = state.begin();
        state.settle(ticket);
        state
    }

    /// Start a preload cycle for a new item list.
    pub fn begin(&mut self) -> RevealTicket {
        self.generation += 1;
        self.phase = RevealPhase::WaitingForAssets;
        RevealTicket(self.generation)
    }

    /// Record that the preload for `ticket` settled.
    ///
    /// Individual outcomes do not matter: a settled batch opens the gate.
    /// Only the latest ticket can open it.
    pub fn settle(&mut self, ticket: RevealTicket) -> SettleOutcome {
        if ticket.0 != self.generation {
            return SettleOutcome::Superseded;
        }
        if self.phase != RevealPhase::WaitingForAssets {
            return SettleOutcome::AlreadyReady;
        }
        self.phase = RevealPhase::Ready;
        SettleOutcome::Opened
    }

    /// Record the first paint. Returns `true` only on the first call.
    pub fn mark_mounted(&mut self) -> bool {
        if self.mounted {
            return false;
        }
        self.mounted = true;
        true
    }

    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    /// `imagesLoaded`: the current cycle's preload has settled.
    pub fn images_loaded(&self) -> bool {
        self.phase == RevealPhase::Ready
    }

    /// `isVisible` / `mounted`: the first paint has happened.
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn shows_placeholder(&self) -> bool {
        !self.images_loaded()
    }

    /// Entrance animations may start once content is shown after first paint.
    pub fn animations_enabled(&self) -> bool {
        self.mounted && self.images_loaded()
    }
}
