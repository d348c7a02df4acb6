use anyhow::Context;
use order_engine::{Config, init_logger_with_file, load_quote_request, price_quote};

fn main() -> anyhow::Result<()> {
    // 1. 环境变量 (.env 可选)
    dotenv::dotenv().ok();
    let config = Config::from_env();

    // 2. 日志
    init_logger_with_file(&config.log_level, config.log_json, config.log_dir.as_deref())?;

    // 3. 报价请求
    let path = std::env::args()
        .nth(1)
        .or_else(|| config.quote_file.clone())
        .context("Usage: order-quote <FILE> (or set QUOTE_FILE)")?;

    tracing::info!(file = %path, environment = %config.environment, "Pricing quote");

    let request = load_quote_request(&path)?;
    let order = price_quote(request, &config.pricing_settings())
        .map_err(|e| {
            anyhow::anyhow!("{} error {}: {}", e.code.category().name(), e.code, e.message)
        })?;

    println!("{}", serde_json::to_string_pretty(&order)?);
    Ok(())
}
