//! 共享应用状态
//!
//! 启动时构造一次，通过 `web::Data` 注入各个处理器

use crate::alerts::AlertStore;
use crate::services::metals::MetalPriceService;

pub struct AppState {
    /// 行情服务
    pub prices: MetalPriceService,
    /// 价格提醒存储
    pub alerts: AlertStore,
}

impl AppState {
    pub fn new(prices: MetalPriceService, alerts: AlertStore) -> Self {
        Self { prices, alerts }
    }
}
