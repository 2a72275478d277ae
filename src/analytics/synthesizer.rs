//! 历史行情模拟
//!
//! 按品种波动率做有界随机游走，生成以今天结尾的 7 根日K线

use chrono::{Duration, NaiveDate, Utc};
use chrono_tz::Asia::Kolkata;
use rand::Rng;

use super::{ensure_positive, AnalyticsError};
use crate::models::{HistoricalPoint, Metal};

/// 序列长度（天）
pub const SERIES_LEN: usize = 7;

/// 未知品种的默认日波动率
const DEFAULT_VOLATILITY: f64 = 0.02;
/// 起始价相对当前价的折扣
const START_DISCOUNT: f64 = 0.985;
/// 日内振幅相对日波动率的比例
const INTRADAY_RATIO: f64 = 0.3;
/// 模拟成交量区间 [min, max)
const VOLUME_RANGE: std::ops::Range<u64> = 5_000..15_000;

/// 品种日波动率
pub fn daily_volatility(symbol: &str) -> f64 {
    match symbol.parse::<Metal>() {
        Ok(Metal::Gold) => 0.015,
        Ok(Metal::Silver) => 0.025,
        Ok(Metal::Platinum) => 0.02,
        Ok(Metal::Palladium) => 0.03,
        Err(_) => DEFAULT_VOLATILITY,
    }
}

/// 使用线程本地随机源，以印度时区的今天作为最后一天
pub fn synthesize(current_price: f64, symbol: &str) -> Result<Vec<HistoricalPoint>, AnalyticsError> {
    let today = Utc::now().with_timezone(&Kolkata).date_naive();
    synthesize_with(current_price, symbol, today, &mut rand::rng())
}

/// 以 `end_date` 结尾生成 [`SERIES_LEN`] 根日K线，随机源由调用方注入
///
/// 最后一根的收盘价强制等于 `current_price`
pub fn synthesize_with<R: Rng + ?Sized>(
    current_price: f64,
    symbol: &str,
    end_date: NaiveDate,
    rng: &mut R,
) -> Result<Vec<HistoricalPoint>, AnalyticsError> {
    let current_price = ensure_positive("current price", current_price)?;
    let volatility = daily_volatility(symbol);
    let intraday_vol = volatility * INTRADAY_RATIO;

    let mut running_price = current_price * START_DISCOUNT;
    let mut series = Vec::with_capacity(SERIES_LEN);

    for days_ago in (0..SERIES_LEN as i64).rev() {
        let open = running_price;
        let drift = rng.random_range(-volatility..=volatility);
        let close = open * (1.0 + drift);

        let high = open * (1.0 + rng.random::<f64>() * intraday_vol);
        let low = open * (1.0 - rng.random::<f64>() * intraday_vol);

        series.push(HistoricalPoint {
            date: end_date - Duration::days(days_ago),
            open,
            high: high.max(close),
            low: low.min(close),
            close,
            volume: rng.random_range(VOLUME_RANGE),
        });

        running_price = close;
    }

    if let Some(last) = series.last_mut() {
        last.close = current_price;
        last.high = last.high.max(current_price);
        last.low = last.low.min(current_price);
    }

    Ok(series)
}
