//! Piece controller - spawning, bag randomizer, lookahead, hold
//!
//! Owns the active piece and the deal state: a 7-shape bag shuffled
//! per cycle, a countdown of un-dealt shapes, the 3-entry lookahead
//! queue, and the one-shot hold slot. Board collision is delegated to
//! [`Board`]; every successful mutation republishes the active piece
//! and its drop projection through the dispatcher.
//!
//! Deal-order note: when the countdown reaches zero the bag is
//! reshuffled *before* the decrement for that same spawn, so one shape
//! of the fresh bag is consumed by the spawn that triggered the
//! reshuffle. The fairness windows pinned in the tests depend on this
//! ordering; do not "fix" it.

use arrayvec::ArrayVec;

use crate::core::{Board, Piece, SimpleRng};
use crate::engine::events::{EngineEvent, EventDispatcher};
use crate::types::{EngineError, RotateDir, ShapeType, QUEUE_LEN};

#[derive(Debug, Clone)]
pub struct PieceController {
    /// Working set of the 7 shape identities, reshuffled per cycle.
    bag: [ShapeType; 7],
    /// Shapes of the current bag not yet dealt into the queue.
    countdown: usize,
    /// False until the very first deal seeds the queue.
    bag_started: bool,
    /// Upcoming shapes, oldest first.
    queue: ArrayVec<ShapeType, QUEUE_LEN>,
    active: Option<Piece>,
    held: Option<ShapeType>,
    /// One-shot permission: re-armed on every spawn, consumed by the
    /// first successful hold/swap after it.
    may_hold: bool,
    /// Projected landing y of the active piece's matrix origin.
    drop_y: i32,
    rng: SimpleRng,
}

impl PieceController {
    pub fn new(seed: u32) -> Self {
        Self {
            bag: ShapeType::ALL,
            countdown: 0,
            bag_started: false,
            queue: ArrayVec::new(),
            active: None,
            held: None,
            may_hold: true,
            drop_y: 0,
            rng: SimpleRng::new(seed),
        }
    }

    pub fn active(&self) -> Option<Piece> {
        self.active
    }

    pub fn held(&self) -> Option<ShapeType> {
        self.held
    }

    /// Upcoming shapes, oldest first. Always 3 entries once the game
    /// has started.
    pub fn queue(&self) -> &[ShapeType] {
        &self.queue
    }

    pub fn drop_y(&self) -> i32 {
        self.drop_y
    }

    pub fn may_hold(&self) -> bool {
        self.may_hold
    }

    /// Deal and spawn the next piece.
    ///
    /// First spawn: shuffle, take bag[6] as the active piece, seed the
    /// queue with bag[5], bag[4], bag[3], countdown = 3. Later spawns:
    /// reshuffle when the countdown hits zero, decrement, promote the
    /// oldest queue entry, refill from bag[countdown].
    pub fn spawn_block(&mut self, board: &Board, events: &EventDispatcher) {
        self.active = None;
        self.may_hold = true;
        self.drop_y = 0;

        let mut piece = if !self.bag_started {
            self.bag_started = true;
            self.rng.shuffle(&mut self.bag);

            for shape in [self.bag[5], self.bag[4], self.bag[3]] {
                events.dispatch(EngineEvent::QueueChanged {
                    shape,
                    replaced_oldest: false,
                });
                self.queue.push(shape);
            }
            self.countdown = 3;

            Piece::new(self.bag[6])
        } else {
            if self.countdown == 0 {
                self.rng.shuffle(&mut self.bag);
                self.countdown = 7;
            }
            self.countdown -= 1;

            let next = self.queue.remove(0);

            let refill = self.bag[self.countdown];
            events.dispatch(EngineEvent::QueueChanged {
                shape: refill,
                replaced_oldest: true,
            });
            self.queue.push(refill);

            Piece::new(next)
        };

        piece.spawn(board);
        self.active = Some(piece);

        self.update_drop_position(board);
        self.dispatch_active(events);
    }

    pub fn move_block_left(&mut self, board: &Board, events: &EventDispatcher) {
        let Some(mut piece) = self.active else {
            return;
        };
        if board.collides(piece.props(), piece.x() - 1, piece.y()) {
            return;
        }
        piece.move_left();
        self.active = Some(piece);
        self.update_drop_position(board);
        self.dispatch_active(events);
    }

    pub fn move_block_right(&mut self, board: &Board, events: &EventDispatcher) {
        let Some(mut piece) = self.active else {
            return;
        };
        if board.collides(piece.props(), piece.x() + 1, piece.y()) {
            return;
        }
        piece.move_right();
        self.active = Some(piece);
        self.update_drop_position(board);
        self.dispatch_active(events);
    }

    /// One-cell descent; a no-op at the bottom (locking is the game
    /// loop's job, not the controller's).
    pub fn move_block_down(&mut self, board: &Board, events: &EventDispatcher) {
        let Some(mut piece) = self.active else {
            return;
        };
        if board.collides(piece.props(), piece.x(), piece.y() + 1) {
            return;
        }
        piece.move_down();
        self.active = Some(piece);
        self.dispatch_active(events);
    }

    /// Descend until the next row would collide. No lock side effect.
    pub fn hard_drop(&mut self, board: &Board, events: &EventDispatcher) {
        let Some(mut piece) = self.active else {
            return;
        };
        while !board.collides(piece.props(), piece.x(), piece.y() + 1) {
            piece.move_down();
        }
        self.active = Some(piece);
        self.dispatch_active(events);
    }

    pub fn rotate_block(&mut self, dir: RotateDir, board: &Board, events: &EventDispatcher) {
        let Some(mut piece) = self.active else {
            return;
        };
        piece.rotate(dir, board);
        self.active = Some(piece);
        self.update_drop_position(board);
        self.dispatch_active(events);
    }

    /// Whether a one-cell descent of the active piece would collide.
    pub fn check_bottom(&self, board: &Board) -> Result<bool, EngineError> {
        let piece = self.active.ok_or(EngineError::NoActivePiece)?;
        Ok(board.collides(piece.props(), piece.x(), piece.y() + 1))
    }

    /// Recompute the landing preview: the lowest y the active piece can
    /// occupy at its current x and rotation.
    pub fn update_drop_position(&mut self, board: &Board) {
        let Some(piece) = self.active else {
            return;
        };
        let mut y = piece.y() + 1;
        while !board.collides(piece.props(), piece.x(), y) {
            y += 1;
        }
        self.drop_y = y - 1;
    }

    /// Hold or swap the active piece's shape, at most once per spawn.
    ///
    /// First ever hold stores the shape and spawns a replacement from
    /// the queue. Afterwards a hold swaps active and held shapes, the
    /// held one respawning fresh at state 0. With the permission
    /// already consumed this is a silent no-op, though the active
    /// piece is still republished.
    pub fn hold_block(&mut self, board: &Board, events: &EventDispatcher) {
        let Some(active) = self.active else {
            return;
        };

        match self.held {
            None => {
                self.held = Some(active.shape());
                events.dispatch(EngineEvent::HoldChanged {
                    shape: active.shape(),
                });

                self.spawn_block(board, events);
                self.may_hold = false;

                self.dispatch_active(events);
                return;
            }
            Some(held_shape) if self.may_hold => {
                self.held = Some(active.shape());

                let mut piece = Piece::new(held_shape);
                piece.spawn(board);
                self.active = Some(piece);
                self.may_hold = false;

                events.dispatch(EngineEvent::HoldChanged {
                    shape: active.shape(),
                });
            }
            Some(_) => {}
        }

        self.update_drop_position(board);
        self.dispatch_active(events);
    }

    /// Game-over probe, run at settle time: a piece whose origin is
    /// still above the grid never fully entered the field. Discards
    /// the active piece when it reports true.
    pub fn is_block_out_of_bounds(&mut self) -> Result<bool, EngineError> {
        let piece = self.active.ok_or(EngineError::NoActivePiece)?;
        if piece.y() < 0 {
            self.active = None;
            return Ok(true);
        }
        Ok(false)
    }

    fn dispatch_active(&self, events: &EventDispatcher) {
        if let Some(piece) = self.active {
            events.dispatch(EngineEvent::ActiveChanged {
                piece,
                drop_y: self.drop_y,
            });
        }
    }

    /// Replace the active piece directly (scenario setup in tests).
    #[cfg(test)]
    pub fn force_active(&mut self, piece: Piece) {
        self.active = Some(piece);
    }
}
