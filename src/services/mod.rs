//! 业务逻辑服务模块
//!
//! 封装行情获取和刷新流程

pub mod market_service; // 行情刷新流程
pub mod metals;         // 贵金属行情服务
