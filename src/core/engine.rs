//! Game engine - ties together board, session, and cascade resolution
//!
//! `GameEngine` owns the grid, the session record, and the processing
//! flag; there is no process-wide state. Collaborators drive it through
//! request methods and drain the event queue after each call. All
//! resolution is synchronous: a committed swap returns the full ordered
//! pass list and the presentation layer replays it with its own pacing.
//!
//! Every request defends its own preconditions. Requests outside them
//! (busy, bad geometry, wrong phase, exhausted moves) are silent no-ops:
//! no state change, no events.

use log::{debug, warn};

use crate::core::cascade::{self, CascadePass};
use crate::core::matches::detect_matches;
use crate::core::rng::SimpleRng;
use crate::core::snapshot::{board_grid, GameSnapshot};
use crate::core::{Board, Session};
use crate::persist::{MemoryStore, ProgressStore, SavedProgress};
use crate::types::{
    Coord, GameEvent, GameMode, GamePhase, ProcessingState, SessionOutcome,
};

/// Result of a swap request
#[derive(Debug, Clone, PartialEq)]
pub enum SwapOutcome {
    /// The swap produced matches and was committed; holds every cascade
    /// pass in resolution order
    Committed(Vec<CascadePass>),
    /// The swap produced no matches and was reverted; no move spent
    NoMatch,
    /// The request failed a precondition; nothing changed
    Rejected,
}

/// The match-3 engine for one player
pub struct GameEngine {
    board: Board,
    session: Option<Session>,
    phase: GamePhase,
    processing: ProcessingState,
    rng: SimpleRng,
    events: Vec<GameEvent>,
    store: Box<dyn ProgressStore>,
    /// Progress as last read from / written to the store
    progress: SavedProgress,
}

impl GameEngine {
    /// Create an engine backed by an in-memory store
    pub fn new(seed: u32) -> Self {
        Self::with_store(Box::new(MemoryStore::new()), seed)
    }

    /// Create an engine reading saved progress from the given store
    pub fn with_store(mut store: Box<dyn ProgressStore>, seed: u32) -> Self {
        let progress = match store.load() {
            Ok(progress) => progress,
            Err(err) => {
                warn!("progress load failed, starting fresh: {err:#}");
                SavedProgress {
                    level: 1,
                    high_score: 0,
                }
            }
        };

        Self {
            board: Board::new(),
            session: None,
            phase: GamePhase::SelectingMode,
            processing: ProcessingState::Idle,
            rng: SimpleRng::new(seed),
            events: Vec::new(),
            store,
            progress,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn mode(&self) -> Option<GameMode> {
        self.session.as_ref().map(|s| s.mode())
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn score(&self) -> u32 {
        self.session.as_ref().map(|s| s.score()).unwrap_or(0)
    }

    pub fn high_score(&self) -> u32 {
        self.session
            .as_ref()
            .map(|s| s.high_score())
            .unwrap_or(self.progress.high_score)
    }

    pub fn level(&self) -> u32 {
        self.session
            .as_ref()
            .map(|s| s.level())
            .unwrap_or(self.progress.level)
    }

    pub fn moves_remaining(&self) -> u32 {
        self.session
            .as_ref()
            .map(|s| s.moves_remaining())
            .unwrap_or(0)
    }

    pub fn target_score(&self) -> u32 {
        self.session
            .as_ref()
            .map(|s| s.target_score())
            .unwrap_or(0)
    }

    /// Take all events queued since the last drain, in emission order
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Copy out the full engine state for the renderer
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: board_grid(&self.board),
            phase: self.phase,
            mode: self.mode(),
            level: self.level(),
            moves_remaining: self.moves_remaining(),
            target_score: self.target_score(),
            score: self.score(),
            high_score: self.high_score(),
            seed: self.rng.seed(),
        }
    }

    /// Enter a session in the chosen mode. Accepted only from the mode
    /// selection phase.
    pub fn select_mode(&mut self, mode: GameMode) -> bool {
        if self.phase != GamePhase::SelectingMode {
            return false;
        }

        let session = match mode {
            GameMode::Level => Session::new_level(self.progress.level, self.progress.high_score),
            GameMode::Infinite => Session::new_infinite(self.progress.high_score),
        };
        debug!(
            "session start: mode={} level={}",
            mode.as_str(),
            session.level()
        );
        self.start_session(session);
        true
    }

    /// Propose swapping two adjacent cells.
    ///
    /// A swap that creates at least one match is committed: in Level mode
    /// one move is spent (regardless of how many passes follow), the
    /// cascade runs to quiescence, and the session end condition is
    /// evaluated. A swap that creates none is reverted at no cost.
    pub fn request_swap(&mut self, a: Coord, b: Coord) -> SwapOutcome {
        if self.phase != GamePhase::Playing || self.processing != ProcessingState::Idle {
            return SwapOutcome::Rejected;
        }
        if !a.in_bounds() || !b.in_bounds() || a == b || !a.is_adjacent(&b) {
            return SwapOutcome::Rejected;
        }
        let Some(session) = self.session.as_ref() else {
            return SwapOutcome::Rejected;
        };
        if !session.has_moves() {
            return SwapOutcome::Rejected;
        }

        self.processing = ProcessingState::Busy;
        self.board.swap(a, b);

        if detect_matches(&self.board).is_empty() {
            // Swap is its own inverse
            self.board.swap(a, b);
            self.events
                .push(GameEvent::Message("No matches! Try again".to_string()));
            debug!("swap {a:?}<->{b:?} reverted: no matches");
            self.processing = ProcessingState::Idle;
            return SwapOutcome::NoMatch;
        }

        // Committed: the move is spent up front, the cascade always runs
        // to quiescence, and only then is the end condition checked.
        let session = self.session.as_mut().expect("checked above");
        session.spend_move();
        if session.mode() == GameMode::Level {
            let moves = session.moves_remaining();
            self.events.push(GameEvent::MovesChanged(moves));
        }
        self.events.push(GameEvent::BoardChanged(board_grid(&self.board)));

        let passes = self.run_cascade();
        debug!(
            "swap {a:?}<->{b:?} committed: {} passes, score={}",
            passes.len(),
            self.score()
        );

        self.check_session_end();
        self.processing = ProcessingState::Idle;
        SwapOutcome::Committed(passes)
    }

    /// Re-permute the whole grid. Free: costs no move, bypasses match
    /// detection, and is accepted under the same gating as a swap.
    pub fn request_shuffle(&mut self) -> bool {
        if self.phase != GamePhase::Playing || self.processing != ProcessingState::Idle {
            return false;
        }
        let Some(session) = self.session.as_ref() else {
            return false;
        };
        if !session.has_moves() {
            return false;
        }

        self.board.shuffle(&mut self.rng);
        debug!("board shuffled");
        self.events.push(GameEvent::BoardChanged(board_grid(&self.board)));
        self.events
            .push(GameEvent::Message("Board shuffled!".to_string()));
        true
    }

    /// Continue to the next level after a win. The level counter already
    /// advanced (and persisted) when the win was recorded.
    pub fn request_next_level(&mut self) -> bool {
        if self.phase != GamePhase::LevelComplete {
            return false;
        }
        let session = Session::new_level(self.progress.level, self.progress.high_score);
        self.start_session(session);
        true
    }

    /// Restart play from a terminal phase: same mode, fresh board, score 0
    pub fn request_retry(&mut self) -> bool {
        if self.phase != GamePhase::LevelComplete && self.phase != GamePhase::GameOver {
            return false;
        }
        let mode = self.mode().expect("terminal phase implies a session");
        let session = match mode {
            GameMode::Level => Session::new_level(self.progress.level, self.progress.high_score),
            GameMode::Infinite => Session::new_infinite(self.progress.high_score),
        };
        self.start_session(session);
        true
    }

    /// Leave the current session and return to mode selection
    pub fn request_back_to_menu(&mut self) -> bool {
        if self.phase == GamePhase::SelectingMode {
            return false;
        }
        self.session = None;
        self.phase = GamePhase::SelectingMode;
        true
    }

    /// Install a session and a freshly initialized, match-free board
    fn start_session(&mut self, session: Session) {
        self.board = cascade::initialize_board(&mut self.rng);
        self.phase = GamePhase::Playing;
        self.processing = ProcessingState::Idle;

        self.events.push(GameEvent::BoardChanged(board_grid(&self.board)));
        self.events.push(GameEvent::ScoreChanged(0));
        if session.mode() == GameMode::Level {
            self.events
                .push(GameEvent::MovesChanged(session.moves_remaining()));
        }
        self.events
            .push(GameEvent::Message("Swipe to match fruits!".to_string()));
        self.session = Some(session);
    }

    /// Run cascade passes to quiescence, scoring each and emitting the
    /// per-pass events. The only place score increases from matches.
    fn run_cascade(&mut self) -> Vec<CascadePass> {
        let mut passes = Vec::new();

        while let Some(pass) = cascade::resolve_pass(&mut self.board, &mut self.rng) {
            let session = self.session.as_mut().expect("cascade runs only in session");
            session.add_score(pass.points);
            let score = session.score();

            self.events.push(GameEvent::CellsMatched {
                cells: pass.cells.clone(),
                points: pass.points,
            });
            self.events.push(GameEvent::ScoreChanged(score));
            self.events
                .push(GameEvent::Message(format!("+{} points!", pass.points)));
            self.events.push(GameEvent::BoardChanged(board_grid(&self.board)));

            if session.record_high_score() {
                let high = session.high_score();
                self.events.push(GameEvent::HighScoreChanged(high));
                self.persist_high_score(high);
            }

            passes.push(pass);
        }

        passes
    }

    /// Evaluate win/loss after quiescence; only move exhaustion ends a
    /// Level session, and Infinite sessions never end here.
    fn check_session_end(&mut self) {
        let Some(session) = self.session.as_ref() else {
            return;
        };
        let Some(outcome) = session.outcome_at_exhaustion() else {
            return;
        };

        let final_score = session.score();
        match outcome {
            SessionOutcome::LevelComplete => {
                let session = self.session.as_mut().expect("checked above");
                session.advance_level();
                let level = session.level();
                debug!("level complete: score={final_score}, next level={level}");
                self.progress.level = level;
                if let Err(err) = self.store.save_level(level) {
                    warn!("level save failed: {err:#}");
                }
                self.phase = GamePhase::LevelComplete;
            }
            SessionOutcome::GameOver => {
                debug!("game over: score={final_score}");
                self.events
                    .push(GameEvent::Message("Not enough points! Try again.".to_string()));
                self.phase = GamePhase::GameOver;
            }
        }
        self.events.push(GameEvent::SessionEnded {
            outcome,
            final_score,
        });
    }

    fn persist_high_score(&mut self, high_score: u32) {
        self.progress.high_score = high_score;
        if let Err(err) = self.store.save_high_score(high_score) {
            warn!("high score save failed: {err:#}");
        }
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[cfg(test)]
    pub(crate) fn session_mut(&mut self) -> &mut Session {
        self.session.as_mut().expect("no active session")
    }
}
