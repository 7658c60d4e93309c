//! Marathon game - gravity automaton, scoring, and the command surface
//!
//! Ties the board and piece controller together: one `gravity_tick`
//! per gravity interval descends the active piece or settles it (lock,
//! clear, score, level, respawn), and `handle` applies presentation-
//! layer commands. All state behind one value so a single mutex can
//! serialize the gravity worker against input delivery.

use std::sync::mpsc::Receiver;

use arrayvec::ArrayVec;

use crate::core::{Board, Piece};
use crate::engine::controller::PieceController;
use crate::engine::events::{EngineEvent, EventDispatcher};
use crate::types::{
    ClearKind, EngineError, GameCommand, RotateDir, ShapeType, BASE_GRAVITY_MS, LEVEL_LINES,
    QUEUE_LEN, SPEEDUP_DIVISOR,
};

/// What one gravity tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Paused, finished, or not yet started; nothing moved.
    Idle,
    /// The active piece descended one row (or sat at the bottom for
    /// one more tick).
    Descended,
    /// The active piece settled: locked, lines cleared, next spawned.
    Locked { cleared: Option<ClearKind> },
    /// The settling piece never entered the field; terminal.
    GameOver,
}

/// Read-only view of everything the presentation layer polls.
#[derive(Debug, Clone)]
pub struct GameSnapshot {
    pub active: Option<Piece>,
    pub drop_y: i32,
    pub held: Option<ShapeType>,
    pub queue: ArrayVec<ShapeType, QUEUE_LEN>,
    pub score: u32,
    pub level: u32,
    pub label: &'static str,
    pub paused: bool,
    pub game_over: bool,
}

/// Complete marathon-mode game state.
#[derive(Debug)]
pub struct Marathon {
    board: Board,
    controller: PieceController,
    events: EventDispatcher,
    score: u32,
    level: u32,
    /// Lines cleared since the last level-up. Perfect clears add their
    /// sentinel value, not the literal row count.
    lines_toward_level: u32,
    /// Reserved for combo chains; currently always 0.
    combo: u32,
    game_speed_ms: u64,
    last_clear: Option<ClearKind>,
    /// Gravity ticks until the clear-type label reverts to empty.
    label_ticks: u8,
    paused: bool,
    game_over: bool,
    started: bool,
}

impl Marathon {
    /// New game on the default board with the given RNG seed.
    pub fn new(seed: u32) -> Self {
        Self::with_board(Board::new(), seed)
    }

    /// New game on a prepared board (scenario setup, custom panel
    /// sizes).
    pub fn with_board(board: Board, seed: u32) -> Self {
        Self {
            board,
            controller: PieceController::new(seed),
            events: EventDispatcher::new(),
            score: 0,
            level: 1,
            lines_toward_level: 0,
            combo: 0,
            game_speed_ms: BASE_GRAVITY_MS,
            last_clear: None,
            label_ticks: 0,
            paused: false,
            game_over: false,
            started: false,
        }
    }

    /// Register an event subscriber; call before `start` to observe
    /// the opening deal.
    pub fn subscribe(&mut self) -> Receiver<EngineEvent> {
        self.events.subscribe()
    }

    /// Spawn the first piece. Idempotent.
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.controller.spawn_block(&self.board, &self.events);
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Current gravity interval in milliseconds.
    pub fn game_speed_ms(&self) -> u64 {
        self.game_speed_ms
    }

    /// Clear-type label of the most recent clear, or "" once expired.
    pub fn label(&self) -> &'static str {
        self.last_clear.map(ClearKind::label).unwrap_or("")
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn controller(&self) -> &PieceController {
        &self.controller
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            active: self.controller.active(),
            drop_y: self.controller.drop_y(),
            held: self.controller.held(),
            queue: self.controller.queue().iter().copied().collect(),
            score: self.score,
            level: self.level,
            label: self.label(),
            paused: self.paused,
            game_over: self.game_over,
        }
    }

    /// Apply a presentation-layer command. While paused everything but
    /// toggle-pause is gated; after game over everything is inert.
    pub fn handle(&mut self, command: GameCommand) {
        if command == GameCommand::TogglePause {
            if self.game_over || !self.started {
                return;
            }
            self.paused = !self.paused;
            self.events.dispatch(EngineEvent::PauseToggled {
                paused: self.paused,
            });
            return;
        }

        if self.paused || self.game_over || !self.started {
            return;
        }

        match command {
            GameCommand::MoveLeft => self.controller.move_block_left(&self.board, &self.events),
            GameCommand::MoveRight => self.controller.move_block_right(&self.board, &self.events),
            GameCommand::RotateCw => {
                self.controller
                    .rotate_block(RotateDir::Clockwise, &self.board, &self.events)
            }
            GameCommand::RotateCcw => {
                self.controller
                    .rotate_block(RotateDir::CounterClockwise, &self.board, &self.events)
            }
            GameCommand::SoftDrop => self.controller.move_block_down(&self.board, &self.events),
            GameCommand::HardDrop => self.controller.hard_drop(&self.board, &self.events),
            GameCommand::Hold => self.controller.hold_block(&self.board, &self.events),
            GameCommand::TogglePause => {}
        }
    }

    /// Advance gravity by one interval: descend the active piece, or
    /// settle it when it sits at the bottom.
    pub fn gravity_tick(&mut self) -> Result<TickOutcome, EngineError> {
        if self.paused || self.game_over || !self.started {
            return Ok(TickOutcome::Idle);
        }

        if self.controller.check_bottom(&self.board)? {
            return self.settle();
        }

        self.controller.move_block_down(&self.board, &self.events);
        self.age_label();
        Ok(TickOutcome::Descended)
    }

    /// The clear-type label stays up for one further tick, then
    /// reverts to empty.
    fn age_label(&mut self) {
        if self.label_ticks == 0 {
            if self.last_clear.take().is_some() {
                self.events.dispatch(EngineEvent::LabelExpired);
            }
        } else {
            self.label_ticks -= 1;
        }
    }

    /// Lock the settled piece, clear lines, score, level up, respawn.
    fn settle(&mut self) -> Result<TickOutcome, EngineError> {
        if self.controller.is_block_out_of_bounds()? {
            self.game_over = true;
            self.events.dispatch(EngineEvent::GameOver);
            return Ok(TickOutcome::GameOver);
        }

        let piece = self.controller.active().ok_or(EngineError::NoActivePiece)?;
        self.board
            .lock(piece.props(), piece.x(), piece.y(), piece.color());

        let cleared = self.board.clear_lines();
        self.lines_toward_level += cleared as u32;

        let kind = ClearKind::from_cleared(cleared);
        self.last_clear = kind;
        self.label_ticks = 1;

        if let Some(kind) = kind {
            self.score += kind.multiplier() * (self.level + self.combo);
            self.events.dispatch(EngineEvent::LinesCleared { kind });
        }
        self.events.dispatch(EngineEvent::ScoreChanged { score: self.score });

        if self.lines_toward_level > LEVEL_LINES {
            self.level += 1;
            self.events.dispatch(EngineEvent::LevelChanged { level: self.level });
            self.game_speed_ms -= self.game_speed_ms / SPEEDUP_DIVISOR;
            self.lines_toward_level = 0;
        }

        self.controller.spawn_block(&self.board, &self.events);
        Ok(TickOutcome::Locked { cleared: kind })
    }

    #[cfg(test)]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[cfg(test)]
    pub fn controller_mut(&mut self) -> &mut PieceController {
        &mut self.controller
    }
}
