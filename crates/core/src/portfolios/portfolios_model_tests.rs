//! Tests for portfolio domain models including Classification.

#[cfg(test)]
mod tests {
    use crate::portfolios::{Classification, NewPortfolio, PortfolioUpdate};
    use std::str::FromStr;

    // ==================== Classification Tests ====================

    #[test]
    fn test_classification_serialization() {
        assert_eq!(
            serde_json::to_string(&Classification::Trading).unwrap(),
            "\"TRADING\""
        );
        assert_eq!(serde_json::to_string(&Classification::Afs).unwrap(), "\"AFS\"");
        assert_eq!(serde_json::to_string(&Classification::Htm).unwrap(), "\"HTM\"");
    }

    #[test]
    fn test_classification_round_trip() {
        for classification in [
            Classification::Trading,
            Classification::Afs,
            Classification::Htm,
        ] {
            assert_eq!(
                Classification::from_str(classification.as_str()).unwrap(),
                classification
            );
        }
    }

    #[test]
    fn test_classification_rejects_unknown_tag() {
        assert!(Classification::from_str("aaa").is_err());
        assert!(Classification::from_str("trading").is_err());
        assert!(Classification::from_str("").is_err());
    }

    // ==================== NewPortfolio Validation Tests ====================

    #[test]
    fn test_new_portfolio_valid() {
        assert!(new_portfolio("u-1", "A Share", "TRADING")
            .collect_violations()
            .is_empty());
    }

    #[test]
    fn test_new_portfolio_requires_user_id() {
        let violations = new_portfolio("", "A Share", "TRADING").collect_violations();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].field, "userId");
    }

    #[test]
    fn test_new_portfolio_requires_nonblank_name() {
        let violations = new_portfolio("u-1", "  ", "TRADING").collect_violations();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].field, "name");
    }

    #[test]
    fn test_new_portfolio_rejects_bad_classification() {
        let violations = new_portfolio("u-1", "A Share", "aaa").collect_violations();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].field, "classification");
    }

    #[test]
    fn test_new_portfolio_reports_all_violations_at_once() {
        let violations = new_portfolio("", "   ", "aaa").collect_violations();
        let fields: Vec<&str> = violations.iter().map(|v| v.field).collect();
        assert_eq!(fields, vec!["userId", "name", "classification"]);
    }

    #[test]
    fn test_new_portfolio_trims_name() {
        assert_eq!(
            new_portfolio("u-1", "  A Share ", "TRADING").trimmed_name(),
            "A Share"
        );
    }

    // ==================== PortfolioUpdate Validation Tests ====================

    #[test]
    fn test_update_requires_id() {
        let update = PortfolioUpdate {
            id: String::new(),
            name: "A Share".to_string(),
            classification: "AFS".to_string(),
        };
        let violations = update.collect_violations();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].field, "id");
    }

    // ==================== Helper Functions ====================

    fn new_portfolio(user_id: &str, name: &str, classification: &str) -> NewPortfolio {
        NewPortfolio {
            id: None,
            user_id: user_id.to_string(),
            name: name.to_string(),
            classification: classification.to_string(),
        }
    }
}
