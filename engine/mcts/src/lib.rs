//! Monte Carlo Tree Search (MCTS) player for Connect Four.
//!
//! This crate chooses moves for the `connect4` engine by building a search
//! tree over cloned positions. Each search iteration runs four phases:
//!
//! 1. **Selection**: Traverse the tree using UCB1 to balance exploration
//!    and exploitation until reaching a node with untried moves
//! 2. **Expansion**: Apply one untried move to a clone of that node's
//!    position and add the resulting child
//! 3. **Simulation**: Play uniformly-random legal moves from the new
//!    position until the game ends
//! 4. **Backpropagation**: Update visit counts and scores along the path
//!    from the new node to the root, flipping the result's sign at each
//!    level
//!
//! Before any search runs, a one-ply lookahead returns an immediately
//! winning column when one exists.
//!
//! # Usage
//!
//! ```rust,ignore
//! use connect4::Position;
//! use mcts::{choose_move, MctsConfig};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha20Rng;
//!
//! let pos = Position::new();
//! let config = MctsConfig::default().with_iterations(1000);
//! let mut rng = ChaCha20Rng::seed_from_u64(42);
//!
//! let column = choose_move(&pos, &config, &mut rng).unwrap();
//! println!("Best column: {}", column);
//! ```
//!
//! Each call builds and discards its own private tree; the caller's live
//! position is only read to seed the root clone. The whole search is
//! single-threaded and synchronous, and the iteration count is the sole
//! cost control.

pub mod config;
pub mod node;
pub mod search;
pub mod tree;

// Re-export main types
pub use config::MctsConfig;
pub use node::{NodeId, SearchNode};
pub use search::{choose_move, MctsSearch, SearchError};
pub use tree::{SearchTree, TreeStats};
