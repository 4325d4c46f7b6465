//! Swipe State Machine
//!
//! Pure gesture-to-state mapping for a swipe-to-reveal row.
//! No rendering and no timers: callers feed `SwipeEvent`s and act on
//! the returned `Transition` (start a settle animation, fire a callback).

use crate::config::SwipeConfig;

/// Stable position a row settles to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RestState {
    #[default]
    Closed,
    Open,
}

impl RestState {
    /// Offset of this rest position
    pub fn offset(self, config: &SwipeConfig) -> f64 {
        match self {
            RestState::Closed => 0.0,
            RestState::Open => config.open_offset(),
        }
    }
}

/// Current phase of a row
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SwipePhase {
    Closed,
    /// Pointer is down and moving; `from` is the pre-drag rest
    Dragging { from: RestState, translation: f64 },
    Open,
}

/// Input events for a row
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SwipeEvent {
    DragStart,
    /// Total horizontal translation since drag start
    DragMove(f64),
    DragEnd(f64),
    DragCancel,
    TapBody,
    TapDelete,
    DeleteConfirmed,
    DeleteCancelled,
}

/// Callback the host should run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowAction {
    Select,
    /// Show the blocking delete confirmation
    PromptDelete,
    Delete,
}

/// Result of handling one event
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Transition {
    /// Animate toward this rest position
    pub settle: Option<RestState>,
    pub action: Option<RowAction>,
}

impl Transition {
    fn none() -> Self {
        Self::default()
    }

    fn settle(rest: RestState) -> Self {
        Self { settle: Some(rest), action: None }
    }
}

/// Classify a released drag.
///
/// `previous` is the rest position the drag started from, `translation`
/// the total horizontal movement since drag start.
pub fn settle(config: &SwipeConfig, previous: RestState, translation: f64) -> RestState {
    if translation < config.open_trigger {
        RestState::Open
    } else if translation > config.close_trigger && previous == RestState::Open {
        RestState::Closed
    } else if previous.offset(config) < config.snap_midpoint {
        RestState::Open
    } else {
        RestState::Closed
    }
}

/// Swipe state for one row
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwipeMachine {
    config: SwipeConfig,
    phase: SwipePhase,
}

impl Default for SwipeMachine {
    fn default() -> Self {
        Self::new(SwipeConfig::default())
    }
}

impl SwipeMachine {
    pub fn new(config: SwipeConfig) -> Self {
        Self { config, phase: SwipePhase::Closed }
    }

    pub fn config(&self) -> &SwipeConfig {
        &self.config
    }

    pub fn phase(&self) -> SwipePhase {
        self.phase
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, SwipePhase::Dragging { .. })
    }

    /// Rest position the row is at, or was at before the current drag
    pub fn rest(&self) -> RestState {
        match self.phase {
            SwipePhase::Closed => RestState::Closed,
            SwipePhase::Open => RestState::Open,
            SwipePhase::Dragging { from, .. } => from,
        }
    }

    /// Offset the row should be drawn at when no animation is running
    pub fn offset(&self) -> f64 {
        match self.phase {
            SwipePhase::Dragging { from, translation } => from.offset(&self.config) + translation,
            _ => self.rest().offset(&self.config),
        }
    }

    fn rest_at(&mut self, rest: RestState) {
        self.phase = match rest {
            RestState::Closed => SwipePhase::Closed,
            RestState::Open => SwipePhase::Open,
        };
    }

    pub fn handle(&mut self, event: SwipeEvent) -> Transition {
        let transition = match (self.phase, event) {
            (SwipePhase::Dragging { .. }, SwipeEvent::DragStart) => Transition::none(),
            (_, SwipeEvent::DragStart) => {
                self.phase = SwipePhase::Dragging { from: self.rest(), translation: 0.0 };
                Transition::none()
            }
            (SwipePhase::Dragging { from, .. }, SwipeEvent::DragMove(translation)) => {
                self.phase = SwipePhase::Dragging { from, translation };
                Transition::none()
            }
            (SwipePhase::Dragging { from, .. }, SwipeEvent::DragEnd(translation)) => {
                let target = settle(&self.config, from, translation);
                self.rest_at(target);
                Transition::settle(target)
            }
            (SwipePhase::Dragging { from, .. }, SwipeEvent::DragCancel) => {
                self.rest_at(from);
                Transition::settle(from)
            }
            (SwipePhase::Closed, SwipeEvent::TapBody) => Transition {
                settle: None,
                action: Some(RowAction::Select),
            },
            (SwipePhase::Open, SwipeEvent::TapBody) => {
                self.rest_at(RestState::Closed);
                Transition::settle(RestState::Closed)
            }
            (SwipePhase::Open, SwipeEvent::TapDelete) => Transition {
                settle: None,
                action: Some(RowAction::PromptDelete),
            },
            (_, SwipeEvent::DeleteConfirmed) => {
                self.rest_at(RestState::Closed);
                Transition {
                    settle: Some(RestState::Closed),
                    action: Some(RowAction::Delete),
                }
            }
            (_, SwipeEvent::DeleteCancelled) => {
                self.rest_at(RestState::Closed);
                Transition::settle(RestState::Closed)
            }
            // Moves and releases without a drag, taps mid-drag, delete taps while closed
            _ => Transition::none(),
        };

        log::trace!("[SWIPE] {:?} -> {:?} ({:?})", event, self.phase, transition);
        transition
    }
}
