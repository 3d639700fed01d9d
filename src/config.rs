//! Engine-wide limits

/// Deepest tree the parser, loader and visitors will handle
pub const DEFAULT_MAX_DEPTH: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    pub max_depth: usize,
}

impl EngineConfig {
    pub fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    pub fn with_max_depth(max_depth: usize) -> Self {
        Self { max_depth }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}
