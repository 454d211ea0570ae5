/// Decimal precision for presenting a per-unit cost
pub const COST_DISPLAY_PRECISION: u32 = 4;

/// Quantity threshold for significant positions
pub const QUANTITY_THRESHOLD: &str = "0.00000001";
