//! Unified error codes
//!
//! Error codes are organized by category:
//! - 4xxx: Order errors
//! - 7xxx: Delivery errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values so the frontend can localize
/// them without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 4xxx: Order ====================
    /// Order item not found
    OrderItemNotFound = 4006,
    /// Order is empty
    OrderEmpty = 4007,
    /// Dish declares sizes but none was selected
    SizeRequired = 4102,
    /// Half-half item is missing one of its halves
    HalfHalfMissingSide = 4103,
    /// The two dishes may not be combined as halves
    HalfHalfNotAllowed = 4104,
    /// A price or total exceeds the representable range
    AmountOutOfRange = 4105,

    // ==================== 7xxx: Delivery ====================
    /// Delivery coordinate lies outside every active zone
    OutsideDeliveryArea = 7001,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // Order
            ErrorCode::OrderItemNotFound => "Order item not found",
            ErrorCode::OrderEmpty => "Order is empty",
            ErrorCode::SizeRequired => "A size must be selected for this dish",
            ErrorCode::HalfHalfMissingSide => "Both halves must have a dish selected",
            ErrorCode::HalfHalfNotAllowed => "These dishes cannot be combined as halves",
            ErrorCode::AmountOutOfRange => "Amount is out of range",

            // Delivery
            ErrorCode::OutsideDeliveryArea => "Address is outside every delivery zone",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // Order
            4006 => Ok(ErrorCode::OrderItemNotFound),
            4007 => Ok(ErrorCode::OrderEmpty),
            4102 => Ok(ErrorCode::SizeRequired),
            4103 => Ok(ErrorCode::HalfHalfMissingSide),
            4104 => Ok(ErrorCode::HalfHalfNotAllowed),
            4105 => Ok(ErrorCode::AmountOutOfRange),

            // Delivery
            7001 => Ok(ErrorCode::OutsideDeliveryArea),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_roundtrip_through_u16() {
        for code in [
            ErrorCode::OrderItemNotFound,
            ErrorCode::OrderEmpty,
            ErrorCode::SizeRequired,
            ErrorCode::HalfHalfMissingSide,
            ErrorCode::HalfHalfNotAllowed,
            ErrorCode::AmountOutOfRange,
            ErrorCode::OutsideDeliveryArea,
        ] {
            assert_eq!(ErrorCode::try_from(code.code()), Ok(code));
        }
    }

    #[test]
    fn test_unknown_code_rejected() {
        assert_eq!(ErrorCode::try_from(1234), Err(InvalidErrorCode(1234)));
        assert_eq!(ErrorCode::try_from(0), Err(InvalidErrorCode(0)));
    }

    #[test]
    fn test_serializes_as_number() {
        let json = serde_json::to_string(&ErrorCode::SizeRequired).unwrap();
        assert_eq!(json, "4102");
        let code: ErrorCode = serde_json::from_str("7001").unwrap();
        assert_eq!(code, ErrorCode::OutsideDeliveryArea);
        assert!(serde_json::from_str::<ErrorCode>("9001").is_err());
    }

    #[test]
    fn test_display_is_numeric() {
        assert_eq!(ErrorCode::AmountOutOfRange.to_string(), "4105");
        assert_eq!(ErrorCode::SizeRequired.to_string(), "4102");
    }
}
