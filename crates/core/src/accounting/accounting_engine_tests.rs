//! Tests for the accounting engine's pure aggregation functions.

#[cfg(test)]
mod tests {
    use crate::accounting::{aggregate_positions, sum_cash};
    use crate::ledger::{CashEntry, Trade, TradeSide};
    use chrono::{DateTime, TimeZone, Utc};
    use proptest::prelude::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    // ==================== Cash Balance Tests ====================

    #[test]
    fn test_cash_of_empty_ledger_is_zero() {
        assert_eq!(sum_cash(&[], None), Decimal::ZERO);
        assert_eq!(sum_cash(&[], Some(at(2011, 7, 29, 0))), Decimal::ZERO);
    }

    #[test]
    fn test_cash_at_specific_moments() {
        let entries = vec![
            cash_entry(dec!(10), at(2011, 7, 29, 0)),
            cash_entry(dec!(-9), at(2011, 7, 30, 0)),
        ];
        assert_eq!(sum_cash(&entries, Some(at(2011, 7, 29, 0))), dec!(10));
        assert_eq!(sum_cash(&entries, Some(at(2011, 7, 30, 0))), dec!(1));
        assert_eq!(sum_cash(&entries, None), dec!(1));
    }

    #[test]
    fn test_cash_has_no_lookahead() {
        let entries = vec![
            cash_entry(dec!(10), at(2011, 7, 29, 0)),
            cash_entry(dec!(100), at(2011, 7, 31, 0)),
        ];
        // The later entry must not leak into the earlier query
        assert_eq!(sum_cash(&entries, Some(at(2011, 7, 30, 0))), dec!(10));
    }

    #[test]
    fn test_cash_includes_entry_exactly_at_bound() {
        let entries = vec![cash_entry(dec!(5.5), at(2011, 7, 29, 12))];
        assert_eq!(sum_cash(&entries, Some(at(2011, 7, 29, 12))), dec!(5.5));
    }

    proptest! {
        // cash(t2) - cash(t1) equals the sum of deltas in (t1, t2]
        #[test]
        fn prop_cash_window_additivity(
            amounts in prop::collection::vec(-10_000i64..10_000, 0..40),
            split in 0u32..72,
        ) {
            let entries: Vec<CashEntry> = amounts
                .iter()
                .enumerate()
                .filter(|(_, amount)| **amount != 0)
                .map(|(hour, amount)| {
                    cash_entry(Decimal::from(*amount), at(2011, 7, 1, 0) + chrono::Duration::hours(hour as i64))
                })
                .collect();
            let t1 = at(2011, 7, 1, 0) + chrono::Duration::hours(split as i64);
            let t2 = t1 + chrono::Duration::hours(24);

            let in_window: Decimal = entries
                .iter()
                .filter(|e| e.entry_date > t1 && e.entry_date <= t2)
                .map(|e| e.amount)
                .sum();

            prop_assert_eq!(sum_cash(&entries, Some(t2)) - sum_cash(&entries, Some(t1)), in_window);
        }

        // the unbounded query equals the sum of everything
        #[test]
        fn prop_cash_unbounded_is_total(amounts in prop::collection::vec(-10_000i64..10_000, 0..40)) {
            let entries: Vec<CashEntry> = amounts
                .iter()
                .enumerate()
                .map(|(hour, amount)| {
                    cash_entry(Decimal::from(*amount), at(2011, 7, 1, 0) + chrono::Duration::hours(hour as i64))
                })
                .collect();
            let total: Decimal = amounts.iter().map(|a| Decimal::from(*a)).sum();
            prop_assert_eq!(sum_cash(&entries, None), total);
        }
    }

    // ==================== Position Window Tests ====================

    #[test]
    fn test_positions_of_empty_ledger_is_empty() {
        assert!(aggregate_positions(&[], None, None).is_empty());
    }

    #[test]
    fn test_identical_instants_select_nothing() {
        let trades = vec![buy("cmb", dec!(100), dec!(20), at(2012, 3, 5, 10))];
        let instant = at(2012, 3, 6, 0);
        assert!(aggregate_positions(&trades, Some(instant), Some(instant)).is_empty());
    }

    #[test]
    fn test_trade_exactly_at_till_is_included() {
        let end_of_day = at(2012, 3, 6, 0);
        let trades = vec![buy("cmb", dec!(100), dec!(20), end_of_day)];
        let positions = aggregate_positions(&trades, None, Some(end_of_day));
        assert_eq!(positions["cmb"].quantity, dec!(100));
    }

    #[test]
    fn test_trade_after_till_is_excluded() {
        let trades = vec![
            buy("cmb", dec!(100), dec!(20), at(2012, 3, 5, 10)),
            buy("cmb", dec!(200), dec!(20.7625), at(2012, 3, 7, 10)),
        ];
        let positions = aggregate_positions(&trades, None, Some(at(2012, 3, 6, 0)));
        assert_eq!(positions["cmb"].quantity, dec!(100));
        assert_eq!(positions["cmb"].rounded_cost(), dec!(20.0000));
    }

    #[test]
    fn test_trade_exactly_at_from_is_included() {
        let start = at(2012, 3, 5, 10);
        let trades = vec![buy("cmb", dec!(100), dec!(20), start)];
        let positions = aggregate_positions(&trades, Some(start), None);
        assert_eq!(positions["cmb"].quantity, dec!(100));
    }

    #[test]
    fn test_full_range_equals_unbounded_from() {
        let trades = vec![
            buy("cmb", dec!(100), dec!(20), at(2012, 3, 5, 10)),
            buy("gree", dec!(100), dec!(19), at(2012, 3, 5, 11)),
            sell("gree", dec!(40), dec!(21), at(2012, 3, 6, 10)),
        ];
        let till = Some(at(2012, 3, 8, 0));
        let unbounded = aggregate_positions(&trades, None, till);
        let from_start = aggregate_positions(&trades, Some(at(2012, 3, 4, 0)), till);
        assert_eq!(unbounded, from_start);
    }

    // ==================== Moving-Average Cost Tests ====================

    #[test]
    fn test_buys_re_average_cost() {
        let trades = vec![
            buy("cmb", dec!(100), dec!(20), at(2012, 3, 5, 10)),
            buy("cmb", dec!(200), dec!(20.7625), at(2012, 3, 7, 10)),
        ];
        let positions = aggregate_positions(&trades, None, Some(at(2012, 3, 8, 0)));
        assert_eq!(positions.len(), 1);
        assert_eq!(positions["cmb"].quantity, dec!(300));
        assert_eq!(positions["cmb"].rounded_cost(), dec!(20.5083));
    }

    #[test]
    fn test_selling_preserves_average_cost() {
        let trades = vec![
            buy("cmb", dec!(100), dec!(20), at(2012, 3, 5, 10)),
            buy("cmb", dec!(100), dec!(30), at(2012, 3, 6, 10)),
            sell("cmb", dec!(50), dec!(40), at(2012, 3, 7, 10)),
        ];
        let positions = aggregate_positions(&trades, None, None);
        assert_eq!(positions["cmb"].quantity, dec!(150));
        // The sell reduced the quantity but not the average
        assert_eq!(positions["cmb"].average_cost, dec!(25));
    }

    #[test]
    fn test_closed_position_is_dropped() {
        let trades = vec![
            buy("cmb", dec!(100), dec!(20), at(2012, 3, 5, 10)),
            buy("gree", dec!(100), dec!(19), at(2012, 3, 5, 11)),
            sell("gree", dec!(100), dec!(22), at(2012, 3, 6, 10)),
        ];
        let positions = aggregate_positions(&trades, None, None);
        assert_eq!(positions.len(), 1);
        assert!(positions.contains_key("cmb"));
        assert!(!positions.contains_key("gree"));
    }

    #[test]
    fn test_rebuy_after_close_starts_fresh_average() {
        let trades = vec![
            buy("cmb", dec!(100), dec!(20), at(2012, 3, 5, 10)),
            sell("cmb", dec!(100), dec!(25), at(2012, 3, 6, 10)),
            buy("cmb", dec!(50), dec!(30), at(2012, 3, 7, 10)),
        ];
        let positions = aggregate_positions(&trades, None, None);
        assert_eq!(positions["cmb"].quantity, dec!(50));
        assert_eq!(positions["cmb"].average_cost, dec!(30));
    }

    #[test]
    fn test_cost_spans_history_before_from() {
        // The window only nets the quantities; the average carries the
        // full history up to the window's end.
        let trades = vec![
            buy("cmb", dec!(100), dec!(20), at(2012, 3, 5, 10)),
            buy("cmb", dec!(200), dec!(20.7625), at(2012, 3, 7, 10)),
        ];
        let positions =
            aggregate_positions(&trades, Some(at(2012, 3, 7, 0)), Some(at(2012, 3, 8, 0)));
        assert_eq!(positions["cmb"].quantity, dec!(200));
        assert_eq!(positions["cmb"].rounded_cost(), dec!(20.5083));
    }

    #[test]
    fn test_oversell_clamps_basis() {
        let trades = vec![
            buy("cmb", dec!(100), dec!(20), at(2012, 3, 5, 10)),
            sell("cmb", dec!(150), dec!(25), at(2012, 3, 6, 10)),
        ];
        let positions = aggregate_positions(&trades, None, None);
        assert_eq!(positions["cmb"].quantity, dec!(-50));
        assert_eq!(positions["cmb"].average_cost, Decimal::ZERO);
    }

    #[test]
    fn test_unordered_input_replays_in_timestamp_order() {
        // Same trades as the re-average case, listed out of order
        let trades = vec![
            buy("cmb", dec!(200), dec!(20.7625), at(2012, 3, 7, 10)),
            buy("cmb", dec!(100), dec!(20), at(2012, 3, 5, 10)),
        ];
        let positions = aggregate_positions(&trades, None, None);
        assert_eq!(positions["cmb"].rounded_cost(), dec!(20.5083));
    }

    // ==================== Helper Functions ====================

    fn at(year: i32, month: u32, day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, hour, 0, 0).unwrap()
    }

    fn cash_entry(amount: Decimal, entry_date: DateTime<Utc>) -> CashEntry {
        CashEntry {
            id: format!("c-{}", entry_date.timestamp()),
            portfolio_id: "p-1".to_string(),
            amount,
            entry_date,
            created_at: entry_date,
        }
    }

    fn trade(
        security_id: &str,
        side: TradeSide,
        quantity: Decimal,
        price: Decimal,
        trade_date: DateTime<Utc>,
    ) -> Trade {
        Trade {
            id: format!("t-{}-{}", security_id, trade_date.timestamp()),
            portfolio_id: "p-1".to_string(),
            security_id: security_id.to_string(),
            side,
            quantity,
            price,
            trade_date,
            created_at: trade_date,
        }
    }

    fn buy(security_id: &str, quantity: Decimal, price: Decimal, date: DateTime<Utc>) -> Trade {
        trade(security_id, TradeSide::Buy, quantity, price, date)
    }

    fn sell(security_id: &str, quantity: Decimal, price: Decimal, date: DateTime<Utc>) -> Trade {
        trade(security_id, TradeSide::Sell, quantity, price, date)
    }
}
