//! Cube sessions.
//!
//! A `CubeSession` owns one cube and runs it in episodes: `reset` starts a
//! fresh scrambled cube, then callers apply moves one at a time and read
//! back a [`SolveReport`] after each. Every applied turn is recorded so it
//! can be undone.
//!
//! ```
//! use twisty_cube::{CubeConfig, CubeSession};
//!
//! let mut session = CubeSession::new(CubeConfig::default().with_scramble_moves(1)).unwrap();
//! let scramble = session.reset();
//! assert_eq!(scramble.len(), 1);
//!
//! session.apply(scramble[0].inverse());
//! assert!(session.is_solved());
//! ```

use im::Vector;
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::core::{CubeConfig, CubeRng, CubeRngState, CubeState, Result};
use crate::detect::{SolveReport, SolvedDetector};
use crate::moves::{format_sequence, LayerTurn, Move, MoveEngine};
use crate::scramble::ScrambleGenerator;

/// A turn recorded in session history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Turn {
    Move(Move),
    Layer(LayerTurn),
}

impl Turn {
    /// The turn that undoes this one.
    #[must_use]
    pub const fn inverse(self) -> Self {
        match self {
            Turn::Move(mv) => Turn::Move(mv.inverse()),
            Turn::Layer(turn) => Turn::Layer(turn.inverse()),
        }
    }

    fn apply(self, state: &mut CubeState) -> Result<()> {
        match self {
            Turn::Move(mv) => {
                MoveEngine::apply(state, mv);
                Ok(())
            }
            Turn::Layer(turn) => MoveEngine::apply_layer(state, turn),
        }
    }
}

impl std::fmt::Display for Turn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Turn::Move(mv) => write!(f, "{mv}"),
            Turn::Layer(turn) => write!(f, "{turn}"),
        }
    }
}

/// Result of applying one turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepOutcome {
    /// Solved status after the turn.
    pub report: SolveReport,
    /// Turns applied since the last reset.
    pub moves_taken: usize,
    /// Whether the configured move limit has been reached.
    pub truncated: bool,
}

/// One cube run in scrambled episodes.
#[derive(Clone, Debug)]
pub struct CubeSession {
    config: CubeConfig,
    solved: CubeState,
    state: CubeState,
    scrambler: Option<ScrambleGenerator>,
    rng: CubeRng,
    scramble: Vec<Move>,
    history: Vector<Turn>,
    episodes: u64,
}

impl CubeSession {
    /// Create a session with a solved cube.
    ///
    /// Fails with `InvalidConfiguration` if `config` does not validate.
    pub fn new(config: CubeConfig) -> Result<Self> {
        config.validate()?;
        let solved = CubeState::new(config.size)?;
        let scrambler = if config.scramble_moves > 0 {
            Some(ScrambleGenerator::from_config(&config)?)
        } else {
            None
        };
        Ok(Self {
            rng: CubeRng::new(config.seed),
            state: solved.clone(),
            solved,
            scrambler,
            scramble: Vec::new(),
            history: Vector::new(),
            episodes: 0,
            config,
        })
    }

    /// Rebuild a session from its config and a saved [`rng_state`](Self::rng_state).
    ///
    /// The cube starts solved; the next `reset` draws the scramble the
    /// saved session would have drawn next.
    pub fn restore(config: CubeConfig, rng: &CubeRngState) -> Result<Self> {
        let mut session = Self::new(config)?;
        session.rng = CubeRng::from_state(rng);
        Ok(session)
    }

    /// Start a new episode: fresh cube, new scramble, empty history.
    ///
    /// Returns the scramble that was applied.
    pub fn reset(&mut self) -> Vec<Move> {
        let mut episode_rng = self.rng.fork();
        self.state = self.solved.clone();
        self.history = Vector::new();
        self.episodes += 1;

        self.scramble = match &self.scrambler {
            Some(scrambler) => {
                scrambler.scramble(&mut self.state, self.config.scramble_moves, &mut episode_rng)
            }
            None => Vec::new(),
        };

        info!(
            "episode {} reset: {n}x{n}x{n} cube, scramble {}",
            self.episodes,
            format_sequence(&self.scramble),
            n = self.config.size
        );
        self.scramble.clone()
    }

    /// Apply a move.
    pub fn apply(&mut self, mv: Move) -> StepOutcome {
        MoveEngine::apply(&mut self.state, mv);
        self.record(Turn::Move(mv))
    }

    /// Apply a layer turn. Fails with `InvalidMove` for a layer outside
    /// the cube, leaving the session unchanged.
    pub fn apply_layer(&mut self, turn: LayerTurn) -> Result<StepOutcome> {
        MoveEngine::apply_layer(&mut self.state, turn)?;
        Ok(self.record(Turn::Layer(turn)))
    }

    /// Apply a discrete action (`0..12`).
    pub fn step(&mut self, action: usize) -> Result<StepOutcome> {
        let mv = Move::from_action(action)?;
        Ok(self.apply(mv))
    }

    /// Undo the most recent turn. Returns it, or `None` if history is empty.
    pub fn undo(&mut self) -> Result<Option<Turn>> {
        let Some(turn) = self.history.pop_back() else {
            return Ok(None);
        };
        turn.inverse().apply(&mut self.state)?;
        debug!("undid {turn}");
        Ok(Some(turn))
    }

    fn record(&mut self, turn: Turn) -> StepOutcome {
        self.history.push_back(turn);
        StepOutcome {
            report: self.report(),
            moves_taken: self.moves_taken(),
            truncated: self.is_truncated(),
        }
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &CubeConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> &CubeState {
        &self.state
    }

    /// Scramble applied by the last reset.
    #[must_use]
    pub fn scramble(&self) -> &[Move] {
        &self.scramble
    }

    /// Turns applied since the last reset, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<Turn> {
        &self.history
    }

    #[must_use]
    pub fn moves_taken(&self) -> usize {
        self.history.len()
    }

    /// Whether the move limit has been reached. Always false without one.
    #[must_use]
    pub fn is_truncated(&self) -> bool {
        self.config
            .move_limit
            .is_some_and(|limit| self.moves_taken() >= limit)
    }

    /// Episodes started so far.
    #[must_use]
    pub fn episodes(&self) -> u64 {
        self.episodes
    }

    #[must_use]
    pub fn report(&self) -> SolveReport {
        SolvedDetector::inspect(&self.state)
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.state.is_solved()
    }

    /// RNG state, for checkpointing. Pass it to [`CubeSession::restore`].
    #[must_use]
    pub fn rng_state(&self) -> CubeRngState {
        self.rng.state()
    }
}
