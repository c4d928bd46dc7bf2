//! Hover intent for a single dropdown.
//!
//! Pointer enter and leave only take effect after [`HOVER_DELAY`], so
//! sweeping the pointer across the menu bar does not flicker dropdowns open.
//! The machine never owns a timer itself. Every call to
//! [`HoverIntent::handle`] returns the [`TimerAction`] the caller has to
//! apply to its single timer slot, and a fired timer is reported back with the
//! [`Ticket`] it was scheduled for. Tickets from superseded timers are
//! ignored, so at most one transition is ever pending.

use log::trace;
use std::time::Duration;
use strum::Display;

/// Delay between pointer enter/leave and the matching open/close.
pub const HOVER_DELAY: Duration = Duration::from_millis(200);

/// Identifies the one timer a [`HoverEvent::TimerFired`] belongs to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

/// Where a dropdown is in its open/close cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Display)]
pub enum DropdownPhase {
    /// Hidden, no timer outstanding.
    #[default]
    Closed,
    /// Hidden, opens when the current timer fires.
    PendingOpen,
    /// Visible, no timer outstanding.
    Open,
    /// Visible, closes when the current timer fires.
    PendingClose,
}

/// Input to [`HoverIntent::handle`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoverEvent {
    /// Pointer moved onto the item.
    PointerEnter,
    /// Pointer moved off the item.
    PointerLeave,
    /// The timer scheduled for this ticket elapsed.
    TimerFired(Ticket),
    /// Click somewhere outside the item.
    ClickOutside,
    /// A link inside the dropdown was clicked.
    LinkActivated,
}

/// What the owner of the timer slot must do after an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerAction {
    /// Leave the timer slot as it is.
    Keep,
    /// Clear the pending timer.
    Cancel,
    /// Clear the pending timer, then schedule one that reports
    /// `TimerFired(ticket)` after `delay`.
    Restart {
        /// Ticket the new timer reports back with.
        ticket: Ticket,
        /// How long until the new timer fires.
        delay: Duration,
    },
}

/// Hover-intent state of one dropdown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HoverIntent {
    phase: DropdownPhase,
    ticket: Ticket,
    delay: Duration,
}

impl Default for HoverIntent {
    fn default() -> Self {
        Self::new(HOVER_DELAY)
    }
}

impl HoverIntent {
    /// A closed dropdown that debounces pointer movement by `delay`.
    pub const fn new(delay: Duration) -> Self {
        Self {
            phase: DropdownPhase::Closed,
            ticket: Ticket(0),
            delay,
        }
    }

    /// The current phase.
    pub const fn phase(&self) -> DropdownPhase {
        self.phase
    }

    /// Whether the dropdown is visible. A pending close is still open.
    pub const fn is_open(&self) -> bool {
        matches!(self.phase, DropdownPhase::Open | DropdownPhase::PendingClose)
    }

    /// Whether a timer is expected to be outstanding.
    pub const fn is_pending(&self) -> bool {
        matches!(
            self.phase,
            DropdownPhase::PendingOpen | DropdownPhase::PendingClose
        )
    }

    /// Applies `event` and returns what to do with the timer slot.
    pub fn handle(&mut self, event: HoverEvent) -> TimerAction {
        use DropdownPhase::{Closed, Open, PendingClose, PendingOpen};

        let before = self.phase;
        let action = match (self.phase, event) {
            (Closed | PendingOpen, HoverEvent::PointerEnter) => self.restart(PendingOpen),
            (Open, HoverEvent::PointerEnter) | (Closed, HoverEvent::PointerLeave) => {
                TimerAction::Keep
            }
            (PendingClose, HoverEvent::PointerEnter) => self.settle(Open),
            (PendingOpen, HoverEvent::PointerLeave) => self.settle(Closed),
            (Open | PendingClose, HoverEvent::PointerLeave) => self.restart(PendingClose),
            (PendingOpen, HoverEvent::TimerFired(ticket)) if ticket == self.ticket => {
                self.phase = Open;
                TimerAction::Keep
            }
            (PendingClose, HoverEvent::TimerFired(ticket)) if ticket == self.ticket => {
                self.phase = Closed;
                TimerAction::Keep
            }
            (_, HoverEvent::TimerFired(_)) => TimerAction::Keep,
            (_, HoverEvent::ClickOutside | HoverEvent::LinkActivated) => {
                self.force_close()
            }
        };

        if before != self.phase {
            trace!("Dropdown {before} -> {} on {event:?}", self.phase);
        }
        action
    }

    /// Closes immediately, dropping any pending transition.
    pub fn force_close(&mut self) -> TimerAction {
        let action = if self.is_pending() {
            TimerAction::Cancel
        } else {
            TimerAction::Keep
        };
        self.phase = DropdownPhase::Closed;
        action
    }

    fn restart(&mut self, phase: DropdownPhase) -> TimerAction {
        self.ticket = Ticket(self.ticket.0.wrapping_add(1));
        self.phase = phase;
        TimerAction::Restart {
            ticket: self.ticket,
            delay: self.delay,
        }
    }

    /// Moves to a settled phase and voids the outstanding ticket.
    fn settle(&mut self, phase: DropdownPhase) -> TimerAction {
        self.ticket = Ticket(self.ticket.0.wrapping_add(1));
        self.phase = phase;
        TimerAction::Cancel
    }
}
