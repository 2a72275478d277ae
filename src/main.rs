//! 贵金属行情后端服务
//!
//! 提供金、银、铂、钯实时行情的 RESTful API 服务，并在快照之上提供：
//! - 近 7 日模拟K线和周度统计
//! - 价格提醒的创建、删除与触发判断
//!
//! 数据来源：GoldAPI（不可用时回退到内置模拟行情）

mod alerts;     // 价格提醒
mod analytics;  // 行情分析
mod config;     // 配置
mod handlers;   // HTTP 请求处理器
mod middleware; // 中间件
mod models;     // 数据模型定义
mod services;   // 业务逻辑服务
mod state;      // 共享应用状态

use actix_web::{web, App, HttpServer, middleware::Logger};
use env_logger::Env;

use crate::alerts::{AlertStore, JsonFileStore};
use crate::config::{AppConfig, ConfigOrigin};
use crate::middleware::{cors, ApiKeyMiddleware};
use crate::services::metals::MetalPriceService;
use crate::state::AppState;

/// 应用程序入口
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let (config, origin) = AppConfig::load();

    // 初始化日志系统，RUST_LOG 优先于配置文件
    env_logger::init_from_env(Env::default().default_filter_or(config.log.level.as_str()));

    match origin {
        ConfigOrigin::File(path) => log::info!("从 {} 加载配置成功", path),
        ConfigOrigin::Invalid(path, e) => log::warn!("加载配置文件 {} 失败，使用默认配置: {}", path, e),
        ConfigOrigin::Default => log::info!("使用默认配置"),
    }
    if config.api.api_key.is_empty() {
        log::warn!("未设置 API Key，接口认证已关闭");
    }

    let prices = MetalPriceService::new(&config.api, config.goldapi.clone())
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    if prices.is_offline() {
        log::warn!("未设置 GoldAPI 令牌，所有行情使用模拟数据");
    }

    let alerts = AlertStore::with_backend(Box::new(JsonFileStore::new(&config.storage.alerts_path)));
    let state = web::Data::new(AppState::new(prices, alerts));

    let bind_addr = config.bind_addr();
    log::info!("启动贵金属行情服务，监听 {}", bind_addr);

    let api_key = config.api.api_key.clone();
    let cors_enabled = config.server.cors;

    // 创建并启动 HTTP 服务器
    let mut server = HttpServer::new(move || {
        App::new()
            .wrap(ApiKeyMiddleware::new(api_key.clone()))  // API Key 认证
            .wrap(cors(cors_enabled))  // 跨域，需在认证之外处理预检请求
            .wrap(Logger::default())  // 添加请求日志中间件
            .app_data(state.clone())
            .app_data(handlers::json_config())
            .configure(handlers::config)  // 配置路由
    });
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server.bind(bind_addr)?.run().await
}
