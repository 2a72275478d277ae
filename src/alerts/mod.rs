//! 价格提醒模块
//!
//! 维护用户设置的提醒规则，并在每轮行情刷新时判断是否触发

mod persistence;
mod store;

#[cfg(test)]
pub use persistence::MemoryStore;
pub use persistence::{JsonFileStore, KeyValueStore};
pub use store::AlertStore;
