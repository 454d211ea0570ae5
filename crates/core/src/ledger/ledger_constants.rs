/// Trade sides
///
/// Each constant represents one side of a security trade.

/// Purchase of a security. Increases the held quantity.
pub const TRADE_SIDE_BUY: &str = "BUY";

/// Disposal of a security. Decreases the held quantity.
pub const TRADE_SIDE_SELL: &str = "SELL";
