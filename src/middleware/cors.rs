//! 跨域中间件
//!
//! 前端为独立应用，默认允许任意来源、方法和请求头

use actix_cors::Cors;
use actix_web::middleware::Condition;

/// 按配置决定是否启用宽松跨域策略
pub fn cors(enabled: bool) -> Condition<Cors> {
    Condition::new(enabled, Cors::permissive())
}
