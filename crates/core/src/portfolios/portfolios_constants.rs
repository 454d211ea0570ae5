/// Portfolio classifications
///
/// Accounting treatment tags mirroring financial reporting categories.

/// Held for short-term trading; gains and losses hit earnings directly.
pub const CLASSIFICATION_TRADING: &str = "TRADING";

/// Available-for-sale.
pub const CLASSIFICATION_AFS: &str = "AFS";

/// Held-to-maturity.
pub const CLASSIFICATION_HTM: &str = "HTM";
