//! MCTS search implementation.
//!
//! Implements the core MCTS loop:
//! 1. Selection: Traverse the tree using UCB1 to find a node with
//!    untried moves
//! 2. Expansion: Add one child for an untried move
//! 3. Simulation: Random rollout from the new position to a terminal state
//! 4. Backpropagation: Update statistics along the path to the root
//!
//! A one-ply lookahead runs before the loop and returns an immediately
//! winning column outright.

use connect4::{Player, Position, Status};
use rand::Rng;
use rand_chacha::ChaCha20Rng;
use thiserror::Error;
use tracing::{debug, trace};

use crate::config::MctsConfig;
use crate::tree::SearchTree;

/// Errors that can occur during MCTS search.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("no legal moves: the game is already decided")]
    NoLegalMoves,
}

/// One move-selection search over a private tree.
///
/// Built fresh for every decision and discarded afterwards; nothing is
/// shared between searches, and the caller's position is only read to
/// seed the root clone.
pub struct MctsSearch {
    tree: SearchTree,
    config: MctsConfig,
}

impl MctsSearch {
    /// Create a search rooted at a clone of `position`.
    ///
    /// Fails with [`SearchError::NoLegalMoves`] if the position is
    /// terminal; callers must not ask for a move from a decided game.
    pub fn new(position: &Position, config: MctsConfig) -> Result<Self, SearchError> {
        if position.legal_moves().is_empty() {
            return Err(SearchError::NoLegalMoves);
        }

        Ok(Self {
            tree: SearchTree::new(position.clone()),
            config,
        })
    }

    /// Run the configured number of iterations and return the chosen
    /// column.
    pub fn run(&mut self, rng: &mut ChaCha20Rng) -> usize {
        // One-ply lookahead: take an immediately winning column outright.
        if let Some(column) = self.immediate_win() {
            debug!(column, "immediate win found, skipping search");
            return column;
        }

        for _ in 0..self.config.iterations {
            self.simulate(rng);
        }

        let column = match self.tree.best_column() {
            Some(column) => column,
            // Zero iterations leave the root childless; degenerate to a
            // single expansion so a legal column is still returned.
            None => {
                let child = self.tree.expand(self.tree.root());
                self.tree.get(child).column
            }
        };

        let stats = self.tree.stats();
        debug!(
            column,
            root_visits = stats.root_visits,
            nodes = stats.total_nodes,
            "search complete"
        );

        column
    }

    /// Scan the root's legal columns for one that wins on the spot.
    fn immediate_win(&self) -> Option<usize> {
        let root = self.tree.get(self.tree.root());
        let side = root.position.side_to_move();

        for &column in &root.untried_moves {
            let mut probe = root.position.clone();
            probe.make(column).expect("root untried moves are legal");
            if probe.status() == Status::Won(side) {
                return Some(column);
            }
        }

        None
    }

    /// One selection/expansion/simulation/backpropagation pass.
    fn simulate(&mut self, rng: &mut ChaCha20Rng) {
        // Selection: descend through fully expanded nodes. A terminal
        // node has no untried moves and no children, so the walk stops
        // there naturally.
        let mut node_id = self.tree.root();
        while self.tree.get(node_id).is_fully_expanded()
            && !self.tree.get(node_id).children.is_empty()
        {
            node_id = self
                .tree
                .select_child(node_id, self.config.exploration_constant)
                .expect("fully expanded node has children");
        }

        // Expansion
        if !self.tree.get(node_id).is_fully_expanded() {
            node_id = self.tree.expand(node_id);
        }

        // Simulation
        let outcome = rollout(self.tree.get(node_id).position.clone(), rng);

        // Backpropagation
        let value = leaf_value(&self.tree.get(node_id).position, outcome);
        self.tree.backpropagate(node_id, value);

        trace!(node = node_id.0, outcome, "simulation complete");
    }

    /// The search tree (for inspection in tests and benches).
    pub fn tree(&self) -> &SearchTree {
        &self.tree
    }
}

/// Convenience entry point: run one search and return the chosen column.
pub fn choose_move(
    position: &Position,
    config: &MctsConfig,
    rng: &mut ChaCha20Rng,
) -> Result<usize, SearchError> {
    let mut search = MctsSearch::new(position, config.clone())?;
    Ok(search.run(rng))
}

/// Play uniformly-random legal moves until the game ends.
///
/// Returns the terminal outcome: +1 for a Red win, -1 for a Yellow win,
/// 0 for a draw.
fn rollout(mut position: Position, rng: &mut ChaCha20Rng) -> f32 {
    while position.status() == Status::Ongoing {
        let legal = position.legal_moves();
        let column = legal[rng.gen_range(0..legal.len())];
        position.make(column).expect("rollout only plays legal moves");
    }

    outcome_value(position.status())
}

fn outcome_value(status: Status) -> f32 {
    match status {
        Status::Won(Player::Red) => 1.0,
        Status::Won(Player::Yellow) => -1.0,
        _ => 0.0,
    }
}

/// Signed value to seed backpropagation at the simulated-from node.
///
/// Node scores are stored from the perspective of the player who moved
/// into the node. `make` flips the side to move except on a game-ending
/// move, so at a terminal position the mover IS the side to move, and
/// otherwise it is the opponent.
fn leaf_value(position: &Position, outcome: f32) -> f32 {
    let mover = if position.status().is_over() {
        position.side_to_move()
    } else {
        position.side_to_move().other()
    };

    match mover {
        Player::Red => outcome,
        Player::Yellow => -outcome,
    }
}
