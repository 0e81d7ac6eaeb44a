// Single source of truth for all default values.

// --- Embedding ---
pub const DEFAULT_EMBEDDING_BATCH_SIZE: usize = 50;

// --- Ranking ---
pub const DEFAULT_TOP_K: usize = 5;
