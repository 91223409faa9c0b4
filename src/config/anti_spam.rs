/// Configuration for per-connection flood protection.
/// All values are counts per second.
pub const MAX_REQUESTS_PER_SECOND: u32 = 30;
