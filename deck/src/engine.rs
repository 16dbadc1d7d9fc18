use crate::consts::EXIT_DELAY_MS;
use crate::gesture::{ExitToken, Phase, Verdict};
use crate::motion::CardTransform;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action<T> {
    /// The active card was liked. Fired once, at commit time.
    Liked(T),
    /// The active card was disliked. Fired once, at commit time.
    Disliked(T),
    /// The user asked for the full profile of the active card.
    ViewProfile(T),
    /// The host should call [`SwipeDeck::complete_exit`] with `token` after
    /// `delay_ms` milliseconds.
    ScheduleExit { token: ExitToken, delay_ms: u32 },
    /// The deck moved on; `index` is the new active position.
    Advanced { index: usize },
    /// The last card left the stack.
    Exhausted,
    /// Gesture state changed and [`SwipeDeck::transform`] has a new value.
    /// Hosts that poll the transform redraw on this; hosts that read it
    /// reactively can skip it.
    RenderNeeded,
}

/// A finite, ordered stack of cards and the gesture state of its top card.
///
/// Only the card at [`SwipeDeck::index`] is interactive; the one after it is
/// shown as an inert preview. The index only ever moves forward, one step per
/// completed exit, and stops at `len()`.
#[derive(Debug, Clone)]
pub struct SwipeDeck<T> {
    items: Vec<T>,
    index: usize,
    phase: Phase,
    next_token: u64,
}

impl<T: Clone> SwipeDeck<T> {
    #[must_use]
    pub fn new(items: Vec<T>) -> Self {
        let phase = if items.is_empty() { Phase::Settled } else { Phase::Idle };
        Self { items, index: 0, phase, next_token: 0 }
    }

    // --- Queries ---

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Position of the active card. Equals `len()` once the deck is exhausted.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The interactive card, if any remain.
    #[must_use]
    pub fn current(&self) -> Option<&T> {
        self.items.get(self.index)
    }

    /// The inert card rendered beneath the active one.
    #[must_use]
    pub fn preview(&self) -> Option<&T> {
        self.items.get(self.index + 1)
    }

    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.index >= self.items.len()
    }

    /// One-based position and total, for the "3 / 7" indicator.
    #[must_use]
    pub fn position(&self) -> Option<(usize, usize)> {
        if self.is_exhausted() {
            None
        } else {
            Some((self.index + 1, self.items.len()))
        }
    }

    /// Token of the exit currently waiting for its timer, if any.
    #[must_use]
    pub fn pending_exit(&self) -> Option<ExitToken> {
        match self.phase {
            Phase::Committing { token, .. } => Some(token),
            _ => None,
        }
    }

    /// Render snapshot of the active card.
    #[must_use]
    pub fn transform(&self) -> CardTransform {
        CardTransform::at(self.phase.offset())
    }

    // --- Pointer input ---

    /// Pointer went down on the active card at horizontal position `x`.
    pub fn on_drag_start(&mut self, x: f64) -> Vec<Action<T>> {
        if !matches!(self.phase, Phase::Idle | Phase::Dragging { .. }) || self.current().is_none() {
            return Vec::new();
        }
        self.phase = Phase::Dragging { start_x: x, offset: 0.0 };
        vec![Action::RenderNeeded]
    }

    /// Pointer moved to horizontal position `x`.
    pub fn on_drag_move(&mut self, x: f64) -> Vec<Action<T>> {
        let Phase::Dragging { start_x, .. } = self.phase else {
            return Vec::new();
        };
        self.phase = Phase::Dragging { start_x, offset: x - start_x };
        vec![Action::RenderNeeded]
    }

    /// Pointer released at horizontal position `x`. Commits past the
    /// threshold, springs back otherwise.
    pub fn on_drag_end(&mut self, x: f64) -> Vec<Action<T>> {
        let Phase::Dragging { start_x, .. } = self.phase else {
            return Vec::new();
        };
        match Verdict::from_offset(x - start_x) {
            Some(verdict) => self.commit(verdict),
            None => {
                self.phase = Phase::Idle;
                vec![Action::RenderNeeded]
            }
        }
    }

    /// Pointer left or was cancelled mid-drag. Always springs back.
    pub fn on_drag_cancel(&mut self) -> Vec<Action<T>> {
        if !self.phase.is_dragging() {
            return Vec::new();
        }
        self.phase = Phase::Idle;
        vec![Action::RenderNeeded]
    }

    // --- Buttons ---

    /// Heart button. Same outcome as a right swipe.
    pub fn like(&mut self) -> Vec<Action<T>> {
        self.press(Verdict::Like)
    }

    /// Cross button. Same outcome as a left swipe.
    pub fn dislike(&mut self) -> Vec<Action<T>> {
        self.press(Verdict::Dislike)
    }

    /// Info button. Never advances the deck.
    pub fn view_profile(&mut self) -> Vec<Action<T>> {
        if !matches!(self.phase, Phase::Idle | Phase::Dragging { .. }) {
            return Vec::new();
        }
        match self.current() {
            Some(item) => vec![Action::ViewProfile(item.clone())],
            None => Vec::new(),
        }
    }

    // --- Deferred exit ---

    /// Finish the exit identified by `token`, advancing to the next card.
    /// Stale or unknown tokens are ignored.
    pub fn complete_exit(&mut self, token: ExitToken) -> Vec<Action<T>> {
        if self.pending_exit() != Some(token) {
            return Vec::new();
        }
        self.index += 1;
        let mut actions = vec![Action::Advanced { index: self.index }];
        if self.is_exhausted() {
            self.phase = Phase::Settled;
            actions.push(Action::Exhausted);
        } else {
            self.phase = Phase::Idle;
        }
        actions.push(Action::RenderNeeded);
        actions
    }

    /// Drop a pending exit without advancing. The verdict action has already
    /// been emitted and is not retracted.
    pub fn cancel_exit(&mut self) -> Vec<Action<T>> {
        if !self.phase.is_committing() {
            return Vec::new();
        }
        self.phase = Phase::Idle;
        vec![Action::RenderNeeded]
    }

    // --- Internals ---

    fn press(&mut self, verdict: Verdict) -> Vec<Action<T>> {
        if !matches!(self.phase, Phase::Idle | Phase::Dragging { .. }) {
            return Vec::new();
        }
        self.commit(verdict)
    }

    fn commit(&mut self, verdict: Verdict) -> Vec<Action<T>> {
        let Some(item) = self.current().cloned() else {
            return Vec::new();
        };
        self.next_token += 1;
        let token = ExitToken(self.next_token);
        self.phase = Phase::Committing { verdict, token };
        let decided = match verdict {
            Verdict::Like => Action::Liked(item),
            Verdict::Dislike => Action::Disliked(item),
        };
        vec![decided, Action::ScheduleExit { token, delay_ms: EXIT_DELAY_MS }, Action::RenderNeeded]
    }
}
