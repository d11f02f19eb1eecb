use crate::error::{GraphError, Result};

/// Capacity bound used when the caller does not pick one.
pub const DEFAULT_MAX_VERTICES: usize = 100;

/// Load-time settings for a [`Graph`](crate::Graph).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphConfig {
    /// Upper bound on both the number of matrix rows and the number of
    /// columns in any single row.
    pub max_vertices: usize,
}

impl GraphConfig {
    pub fn new() -> Self {
        Self {
            max_vertices: DEFAULT_MAX_VERTICES,
        }
    }

    pub fn with_max_vertices(max_vertices: usize) -> Result<Self> {
        let config = Self { max_vertices };
        config.validate()?;
        Ok(config)
    }

    /// A zero bound would reject every non-empty graph.
    pub fn validate(&self) -> Result<()> {
        if self.max_vertices == 0 {
            return Err(GraphError::Config(
                "max_vertices must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self::new()
    }
}
