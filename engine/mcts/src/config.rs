//! MCTS configuration parameters.

/// Configuration for Monte Carlo Tree Search.
#[derive(Debug, Clone)]
pub struct MctsConfig {
    /// Number of search iterations per move. Each iteration runs one
    /// selection/expansion/simulation/backpropagation pass.
    pub iterations: u32,

    /// Exploration constant for the UCB1 formula. Higher values encourage
    /// visiting under-explored children, lower values favor the current
    /// best. The classic choice is sqrt(2) ~= 1.41.
    pub exploration_constant: f32,
}

impl Default for MctsConfig {
    fn default() -> Self {
        Self {
            iterations: 1000,
            exploration_constant: 1.41,
        }
    }
}

impl MctsConfig {
    /// Create a fast config for testing.
    pub fn for_testing() -> Self {
        Self {
            iterations: 50,
            exploration_constant: 1.41,
        }
    }

    /// Builder pattern: set the iteration count.
    pub fn with_iterations(mut self, n: u32) -> Self {
        self.iterations = n;
        self
    }

    /// Builder pattern: set the exploration constant.
    pub fn with_exploration_constant(mut self, c: f32) -> Self {
        self.exploration_constant = c;
        self
    }
}
