//! Gravity worker - the timed driver behind the game loop
//!
//! A plain thread that owns nothing but a cancellation flag: it locks
//! the shared [`Marathon`], advances gravity once, and sleeps for the
//! current gravity interval. Input delivery serializes against it
//! through the same mutex. Sleeps happen in short slices so stop
//! requests and pause changes take effect promptly.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use anyhow::{anyhow, Result};

use crate::engine::game::{Marathon, TickOutcome};
use crate::types::WORKER_POLL_MS;

/// Handle to a running gravity thread.
pub struct GameWorker {
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<Result<()>>>,
}

impl GameWorker {
    /// Start the gravity thread over a shared game. Starts the game on
    /// first tick if the caller has not already.
    pub fn spawn(game: Arc<Mutex<Marathon>>) -> Self {
        let stop = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&stop);
        let handle = thread::spawn(move || run(game, flag));
        Self {
            stop,
            handle: Some(handle),
        }
    }

    /// Request cancellation; returns without waiting.
    pub fn stop(&self) {
        self.stop.store(true, Ordering::Relaxed);
    }

    /// Stop and wait for the thread, surfacing any engine error it hit.
    pub fn join(mut self) -> Result<()> {
        self.stop();
        match self.handle.take() {
            Some(handle) => handle
                .join()
                .map_err(|_| anyhow!("gravity worker panicked"))?,
            None => Ok(()),
        }
    }
}

impl Drop for GameWorker {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
    }
}

fn run(game: Arc<Mutex<Marathon>>, stop: Arc<AtomicBool>) -> Result<()> {
    loop {
        let interval = {
            let mut game = game.lock().map_err(|_| anyhow!("engine mutex poisoned"))?;
            if !game.started() {
                game.start();
            }
            if let TickOutcome::GameOver = game.gravity_tick()? {
                return Ok(());
            }
            if game.game_over() {
                return Ok(());
            }
            game.game_speed_ms()
        };

        let mut remaining = interval;
        while remaining > 0 {
            if stop.load(Ordering::Relaxed) {
                return Ok(());
            }
            let slice = remaining.min(WORKER_POLL_MS);
            thread::sleep(Duration::from_millis(slice));
            remaining -= slice;
        }
    }
}
