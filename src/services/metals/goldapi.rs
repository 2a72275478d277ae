//! GoldAPI 行情接口实现
//!
//! 对接 https://www.goldapi.io/api/{XAU|XAG|XPT|XPD}/USD
//! 原始报价为 美元/盎司，统一换算为 卢比/克；请求失败时回退到内置模拟行情

use anyhow::{anyhow, Result};
use futures::future::join_all;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use super::common::{india_now, usd_per_oz_to_inr_per_gram, MetalQuote};
use super::mock::mock_quote;
use crate::config::{ApiConfig, GoldApiConfig};
use crate::models::{Metal, PriceSnapshot};

/// GoldAPI 返回的报价（美元/盎司）
#[derive(Debug, Deserialize)]
struct GoldApiQuote {
    price: f64,
    #[serde(default)]
    ch: f64,
    #[serde(default)]
    chp: f64,
    prev_close_price: Option<f64>,
    open_price: Option<f64>,
    high_price: Option<f64>,
    low_price: Option<f64>,
}

impl GoldApiQuote {
    /// 缺失的字段按当前价补齐
    fn to_quote(&self, usd_to_inr: f64) -> MetalQuote {
        let convert = |usd: f64| usd_per_oz_to_inr_per_gram(usd, usd_to_inr);
        MetalQuote {
            price: convert(self.price),
            prev_close: convert(self.prev_close_price.unwrap_or(self.price)),
            open: convert(self.open_price.unwrap_or(self.price)),
            high: convert(self.high_price.unwrap_or(self.price)),
            low: convert(self.low_price.unwrap_or(self.price)),
            change_24h: convert(self.ch),
            change_pct: self.chp,
        }
    }
}

/// 贵金属行情服务
pub struct MetalPriceService {
    /// HTTP 客户端
    client: Client,
    /// 行情源配置
    config: GoldApiConfig,
}

impl MetalPriceService {
    /// 按超时配置创建服务
    pub fn new(api: &ApiConfig, config: GoldApiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(api.timeout_secs))
            .connect_timeout(Duration::from_secs(api.connect_timeout_secs))
            .build()?;
        Ok(Self { client, config })
    }

    /// 是否只使用模拟行情
    pub fn is_offline(&self) -> bool {
        self.config.access_token.is_empty()
    }

    /// 获取单个品种行情，接口失败时回退到模拟数据
    pub async fn get_metal_price(&self, metal: Metal) -> PriceSnapshot {
        if self.is_offline() {
            log::debug!("未配置 GoldAPI 令牌，{} 使用模拟行情", metal);
            return mock_quote(metal).into_snapshot(metal, india_now());
        }

        match self.fetch_from_api(metal).await {
            Ok(quote) => quote.into_snapshot(metal, india_now()),
            Err(e) => {
                log::warn!("获取 {} 行情失败，使用模拟行情: {:#}", metal, e);
                mock_quote(metal).into_snapshot(metal, india_now())
            }
        }
    }

    /// 并发获取全部品种行情
    pub async fn get_all_metal_prices(&self) -> Vec<PriceSnapshot> {
        join_all(Metal::ALL.into_iter().map(|metal| self.get_metal_price(metal))).await
    }

    async fn fetch_from_api(&self, metal: Metal) -> Result<MetalQuote> {
        let url = format!("{}/{}/USD", self.config.base_url.trim_end_matches('/'), metal.code());
        log::debug!("请求 {} 行情 URL: {}", metal, url);

        let response = self
            .client
            .get(&url)
            .header("x-access-token", &self.config.access_token)
            .header("Content-Type", "application/json")
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(anyhow!("GoldAPI 返回状态 {}", response.status()));
        }

        let raw: GoldApiQuote = response.json().await?;
        if !(raw.price.is_finite() && raw.price > 0.0) {
            return Err(anyhow!("GoldAPI 返回无效价格 {}", raw.price));
        }
        Ok(raw.to_quote(self.config.usd_to_inr))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offline_service() -> MetalPriceService {
        MetalPriceService::new(&ApiConfig::default(), GoldApiConfig::default()).unwrap()
    }

    #[test]
    fn converts_upstream_quote_and_fills_missing_fields() {
        let raw: GoldApiQuote =
            serde_json::from_str(r#"{"price": 2650.0, "ch": 15.5, "chp": 0.58, "open_price": 2640.0}"#)
                .unwrap();
        let quote = raw.to_quote(83.5);

        assert_eq!(quote.price, 7114.15);
        assert_eq!(quote.open, usd_per_oz_to_inr_per_gram(2640.0, 83.5));
        assert_eq!(quote.prev_close, quote.price);
        assert_eq!(quote.high, quote.price);
        assert_eq!(quote.change_24h, usd_per_oz_to_inr_per_gram(15.5, 83.5));
        assert_eq!(quote.change_pct, 0.58);
    }

    #[actix_web::test]
    async fn offline_service_serves_mock_prices_for_every_metal() {
        let service = offline_service();
        assert!(service.is_offline());

        let all = service.get_all_metal_prices().await;
        let symbols: Vec<&str> = all.iter().map(|s| s.symbol.as_str()).collect();
        assert_eq!(symbols, ["Gold", "Silver", "Platinum", "Palladium"]);
        assert_eq!(all[0].price, 7200.0);
        assert_eq!(all[3].price, 2855.0);
    }

    #[actix_web::test]
    async fn unreachable_upstream_falls_back_to_mock() {
        let api = ApiConfig {
            timeout_secs: 1,
            connect_timeout_secs: 1,
            ..ApiConfig::default()
        };
        let config = GoldApiConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            access_token: "token".to_string(),
            ..GoldApiConfig::default()
        };
        let service = MetalPriceService::new(&api, config).unwrap();

        let snapshot = service.get_metal_price(Metal::Silver).await;
        assert_eq!(snapshot.symbol, "Silver");
        assert_eq!(snapshot.price, 85.5);
    }
}
