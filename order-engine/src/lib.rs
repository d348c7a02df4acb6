//! Order Engine - 订单定价核心
//!
//! Decides, for every line item and for the order as a whole, exactly what
//! the customer is charged.
//!
//! # 模块结构
//!
//! ```text
//! order-engine/src/
//! ├── core/          # 配置
//! ├── delivery/      # 配送区几何、区域解析、配送费
//! ├── pricing/       # 单品 / 半半定价、金额工具、半半策略
//! ├── orders/        # 合并键、订单汇总、订单草稿
//! ├── utils/         # 日志
//! └── quote.rs       # 报价请求
//! ```
//!
//! # Example
//!
//! ```
//! use order_engine::orders::{OrderDraft, PricingSettings};
//! use shared::models::Dish;
//! use shared::order::{ComposedOrderItem, DishSelection, OrderType};
//!
//! let soup = Dish {
//!     id: "d1".into(),
//!     name: "Soup".into(),
//!     category_id: "soups".into(),
//!     base_price: 8.5,
//!     sizes: vec![],
//!     ingredients: vec![],
//!     addon_groups: vec![],
//! };
//!
//! let mut draft = OrderDraft::new(OrderType::Takeaway, PricingSettings::default());
//! draft.add_item(ComposedOrderItem::simple(DishSelection::plain(soup), None, 2))?;
//! assert_eq!(draft.to_priced_order()?.total, 17.0);
//! # Ok::<(), order_engine::pricing::PricingError>(())
//! ```

pub mod core;
pub mod delivery;
pub mod orders;
pub mod pricing;
pub mod quote;
pub mod utils;

// Re-export 公共类型
pub use core::Config;
pub use delivery::{OutsideZonePolicy, resolve_zone};
pub use orders::{OrderDraft, OrderTotals, PricingSettings, calculate_order_totals};
pub use pricing::{HalfHalfPolicy, HalfHalfSizePricing, PolicyStore, PricingError, price_item};
pub use quote::{QuoteRequest, load_quote_request, price_quote};

// Re-export logger functions
pub use utils::logger::init_logger_with_file;
