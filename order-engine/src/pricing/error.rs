use shared::error::{AppError, ErrorCode};
use shared::order::HalfSide;
use thiserror::Error;

/// Pricing errors
///
/// Only genuinely invalid configurations surface here; geometric non-matches
/// and out-of-range quantities/prices are resolved locally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PricingError {
    #[error("Size must be selected for dish: {dish}")]
    SizeRequired { dish: String },

    #[error("Half-half item has no dish on its {side} half")]
    MissingHalf { side: HalfSide },

    #[error("Dishes cannot be combined as halves: {left} / {right}")]
    HalfHalfNotAllowed { left: String, right: String },

    #[error("Delivery address is outside every active zone")]
    OutsideDeliveryArea,

    #[error("Order line not found: {0}")]
    ItemNotFound(String),

    #[error("Order has no items")]
    EmptyOrder,

    #[error("Amount out of range: {0}")]
    AmountOutOfRange(String),
}

impl PricingError {
    pub(crate) fn out_of_range(item: impl Into<String>) -> Self {
        PricingError::AmountOutOfRange(item.into())
    }

    /// Incomplete item configuration: block submission, never default a price
    pub fn is_incomplete_configuration(&self) -> bool {
        matches!(
            self,
            PricingError::SizeRequired { .. } | PricingError::MissingHalf { .. }
        )
    }
}

impl From<PricingError> for AppError {
    fn from(err: PricingError) -> Self {
        let message = err.to_string();
        match err {
            PricingError::SizeRequired { dish } => {
                AppError::with_message(ErrorCode::SizeRequired, message).with_detail("dish", dish)
            }
            PricingError::MissingHalf { side } => {
                AppError::with_message(ErrorCode::HalfHalfMissingSide, message)
                    .with_detail("side", side.to_string())
            }
            PricingError::HalfHalfNotAllowed { left, right } => {
                AppError::with_message(ErrorCode::HalfHalfNotAllowed, message)
                    .with_detail("left", left)
                    .with_detail("right", right)
            }
            PricingError::OutsideDeliveryArea => {
                AppError::with_message(ErrorCode::OutsideDeliveryArea, message)
            }
            PricingError::ItemNotFound(instance_id) => {
                AppError::with_message(ErrorCode::OrderItemNotFound, message)
                    .with_detail("instance_id", instance_id)
            }
            PricingError::EmptyOrder => AppError::new(ErrorCode::OrderEmpty),
            PricingError::AmountOutOfRange(item) => {
                AppError::with_message(ErrorCode::AmountOutOfRange, message)
                    .with_detail("item", item)
            }
        }
    }
}
