//! blockfall - a falling-block puzzle engine.
//!
//! The mechanics of a Tetris-style game without any presentation: a
//! 10-column board, seven tetromino shapes with precomputed rotation
//! states and SRS-style wall kicks, a 7-bag randomizer with a 3-piece
//! lookahead, a one-shot hold slot, line clearing with marathon
//! scoring, and a timed gravity worker.
//!
//! A frontend drives the engine through [`engine::Marathon::handle`]
//! (discrete commands) and observes it through [`engine::EngineEvent`]
//! subscriptions or [`engine::Marathon::snapshot`].
//!
//! # Example
//!
//! ```
//! use std::sync::{Arc, Mutex};
//!
//! use blockfall::engine::{GameWorker, Marathon};
//! use blockfall::types::GameCommand;
//!
//! let game = Arc::new(Mutex::new(Marathon::new(12345)));
//! let worker = GameWorker::spawn(Arc::clone(&game));
//!
//! // Input path: commands serialize against gravity on the mutex.
//! game.lock().unwrap().handle(GameCommand::MoveLeft);
//! game.lock().unwrap().handle(GameCommand::HardDrop);
//!
//! worker.join().unwrap();
//! ```

pub mod core;
pub mod engine;
pub mod types;
