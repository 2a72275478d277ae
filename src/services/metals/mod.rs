//! 贵金属行情服务模块
//!
//! 行情快照的唯一来源，分析模块只消费这里产出的 `PriceSnapshot`

mod common;
mod goldapi;
mod mock;

pub use goldapi::MetalPriceService;
