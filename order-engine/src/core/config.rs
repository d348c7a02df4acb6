use crate::delivery::OutsideZonePolicy;
use crate::orders::PricingSettings;
use crate::pricing::{HalfHalfPolicy, HalfHalfSizePricing};

/// 定价引擎配置
///
/// # 环境变量
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | LOG_LEVEL | info | 日志级别 (`RUST_LOG` 优先) |
/// | LOG_JSON | false | JSON 格式日志 |
/// | LOG_DIR | - | 日志文件目录 (按天滚动) |
/// | ENVIRONMENT | development | 运行环境 |
/// | HALF_HALF_SIZE_PRICING | shared_size | `shared_size` \| `per_dish_size` |
/// | OUTSIDE_ZONE_POLICY | no_fee | `no_fee` \| `reject` |
/// | QUOTE_FILE | - | 默认报价请求文件 |
///
/// # 示例
///
/// ```ignore
/// OUTSIDE_ZONE_POLICY=reject order-quote order.json
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
    pub log_json: bool,
    pub log_dir: Option<String>,
    /// 运行环境: development | staging | production
    pub environment: String,
    /// 半半比萨的尺寸定价方式
    pub half_half_size_pricing: HalfHalfSizePricing,
    /// 配送坐标不在任何配送区时的处理方式
    pub outside_zone_policy: OutsideZonePolicy,
    pub quote_file: Option<String>,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 未设置或无法解析的变量使用默认值
    pub fn from_env() -> Self {
        Self {
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_json: std::env::var("LOG_JSON")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            log_dir: std::env::var("LOG_DIR").ok().filter(|v| !v.is_empty()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            half_half_size_pricing: std::env::var("HALF_HALF_SIZE_PRICING")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_default(),
            outside_zone_policy: std::env::var("OUTSIDE_ZONE_POLICY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_default(),
            quote_file: std::env::var("QUOTE_FILE").ok().filter(|v| !v.is_empty()),
        }
    }

    /// Engine knobs derived from this configuration
    pub fn pricing_settings(&self) -> PricingSettings {
        PricingSettings {
            half_half: HalfHalfPolicy::default().with_size_pricing(self.half_half_size_pricing),
            outside_zone: self.outside_zone_policy,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(size_pricing: HalfHalfSizePricing, outside: OutsideZonePolicy) -> Config {
        Config {
            log_level: "info".to_string(),
            log_json: false,
            log_dir: None,
            environment: "production".to_string(),
            half_half_size_pricing: size_pricing,
            outside_zone_policy: outside,
            quote_file: None,
        }
    }

    #[test]
    fn test_pricing_settings() {
        let settings =
            config(HalfHalfSizePricing::PerDishSize, OutsideZonePolicy::Reject).pricing_settings();
        assert_eq!(settings.half_half.size_pricing, HalfHalfSizePricing::PerDishSize);
        assert!(settings.half_half.combinable.is_empty());
        assert_eq!(settings.outside_zone, OutsideZonePolicy::Reject);
    }

    #[test]
    fn test_policy_names_parse() {
        assert_eq!(
            "per_dish_size".parse::<HalfHalfSizePricing>(),
            Ok(HalfHalfSizePricing::PerDishSize)
        );
        assert_eq!("REJECT".parse::<OutsideZonePolicy>(), Ok(OutsideZonePolicy::Reject));
        assert!("sometimes".parse::<OutsideZonePolicy>().is_err());
    }
}
