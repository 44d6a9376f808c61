// Configuration constants for the search
pub const DEFAULT_MAX_LEN: usize = 20;
