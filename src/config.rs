use std::num::NonZeroU64;

pub const DEFAULT_QUANTUM: u64 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimConfig {
    /// Longest turn a round-robin process gets before the cursor moves on.
    pub quantum: NonZeroU64,
}

impl SimConfig {
    pub fn with_quantum(quantum: NonZeroU64) -> Self {
        Self { quantum }
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            quantum: NonZeroU64::MIN.saturating_add(DEFAULT_QUANTUM - 1),
        }
    }
}
