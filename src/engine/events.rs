//! Engine events - typed state-change notifications
//!
//! The engine publishes every observable state change as a tagged
//! union over mpsc channels. Subscribers that lag or disappear never
//! block the engine; sends to dead receivers are dropped.

use std::sync::mpsc::{self, Receiver, Sender};

use crate::core::Piece;
use crate::types::{ClearKind, ShapeType};

/// One observable engine state change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EngineEvent {
    /// The active piece moved, rotated, or spawned; `drop_y` is the
    /// projected landing row of the matrix origin (ghost preview).
    ActiveChanged { piece: Piece, drop_y: i32 },
    /// A shape entered the lookahead queue. `replaced_oldest` is false
    /// only for the three pushes that seed the queue at game start.
    QueueChanged {
        shape: ShapeType,
        replaced_oldest: bool,
    },
    /// The hold slot changed to this shape.
    HoldChanged { shape: ShapeType },
    ScoreChanged { score: u32 },
    LevelChanged { level: u32 },
    /// Lines were cleared by the last lock.
    LinesCleared { kind: ClearKind },
    /// The clear-type label reverted to empty.
    LabelExpired,
    PauseToggled { paused: bool },
    /// Terminal; published exactly once.
    GameOver,
}

/// Fan-out of engine events to any number of subscribers.
#[derive(Debug, Default)]
pub struct EventDispatcher {
    subscribers: Vec<Sender<EngineEvent>>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new subscriber and return its receiving end.
    pub fn subscribe(&mut self) -> Receiver<EngineEvent> {
        let (tx, rx) = mpsc::channel();
        self.subscribers.push(tx);
        rx
    }

    /// Deliver an event to every subscriber.
    pub fn dispatch(&self, event: EngineEvent) {
        for tx in &self.subscribers {
            let _ = tx.send(event);
        }
    }
}
