//! Engine module - stateful orchestration on top of `core`
//!
//! The piece controller (bag, queue, hold), the marathon game state
//! with its command surface, typed events, and the gravity worker.

pub mod controller;
pub mod events;
pub mod game;
pub mod worker;

// Re-export commonly used types
pub use controller::PieceController;
pub use events::{EngineEvent, EventDispatcher};
pub use game::{GameSnapshot, Marathon, TickOutcome};
pub use worker::GameWorker;
