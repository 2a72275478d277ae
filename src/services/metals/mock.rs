//! 内置模拟行情
//!
//! 行情源不可用或未配置令牌时使用，单位 卢比/克

use super::common::MetalQuote;
use crate::models::Metal;

pub fn mock_quote(metal: Metal) -> MetalQuote {
    match metal {
        Metal::Gold => MetalQuote {
            price: 7200.0,
            prev_close: 7184.5,
            open: 7190.0,
            high: 7220.0,
            low: 7180.0,
            change_24h: 15.5,
            change_pct: 0.58,
        },
        Metal::Silver => MetalQuote {
            price: 85.5,
            prev_close: 84.7,
            open: 85.0,
            high: 86.2,
            low: 84.5,
            change_24h: 0.8,
            change_pct: 2.63,
        },
        Metal::Platinum => MetalQuote {
            price: 2680.0,
            prev_close: 2692.3,
            open: 2685.0,
            high: 2695.0,
            low: 2675.0,
            change_24h: -12.3,
            change_pct: -0.46,
        },
        Metal::Palladium => MetalQuote {
            price: 2855.0,
            prev_close: 2832.9,
            open: 2840.0,
            high: 2860.0,
            low: 2835.0,
            change_24h: 22.1,
            change_pct: 0.78,
        },
    }
}
