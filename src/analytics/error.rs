use thiserror::Error;

/// 分析计算错误
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalyticsError {
    #[error("invalid {field}: {value} (must be a positive finite number)")]
    InvalidPrice { field: &'static str, value: f64 },

    #[error("price series is empty")]
    EmptySeries,
}
