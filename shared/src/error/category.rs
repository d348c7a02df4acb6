//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// Order errors (4xxx)
    Order,
    /// Delivery errors (7xxx)
    Delivery,
}

impl ErrorCategory {
    /// Get the string name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::Order => "order",
            Self::Delivery => "delivery",
        }
    }
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        match self.code() {
            7000..8000 => ErrorCategory::Delivery,
            _ => ErrorCategory::Order,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_category() {
        assert_eq!(ErrorCode::SizeRequired.category(), ErrorCategory::Order);
        assert_eq!(ErrorCode::AmountOutOfRange.category(), ErrorCategory::Order);
        assert_eq!(
            ErrorCode::OutsideDeliveryArea.category(),
            ErrorCategory::Delivery
        );
    }

    #[test]
    fn test_category_name() {
        assert_eq!(ErrorCategory::Order.name(), "order");
        assert_eq!(ErrorCode::OutsideDeliveryArea.category().name(), "delivery");
    }
}
