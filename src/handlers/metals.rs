//! 贵金属行情接口处理器
//!
//! ## API 列表
//! - GET /metals - 获取全部品种实时行情
//! - GET /metals/weekly - 执行一轮刷新：全部品种周度数据 + 新触发的提醒
//! - GET /metals/{metal} - 获取单个品种实时行情
//! - GET /metals/{metal}/weekly - 获取单个品种周度数据

use actix_web::{web, HttpResponse, Result};
use crate::analytics;
use crate::models::{ApiResponse, Metal, PriceSnapshot, WeeklySeries};
use crate::services::market_service;
use crate::state::AppState;

/// 解析路径中的品种，未知品种返回 404 响应
pub(crate) fn parse_metal<T: serde::Serialize>(raw: &str) -> std::result::Result<Metal, HttpResponse> {
    raw.parse::<Metal>().map_err(|e| {
        HttpResponse::NotFound().json(ApiResponse::<T>::error(e.to_string()))
    })
}

/// 获取全部品种实时行情
///
/// GET /api/metals
pub async fn get_all_metal_prices(state: web::Data<AppState>) -> Result<HttpResponse> {
    let snapshots = state.prices.get_all_metal_prices().await;
    Ok(HttpResponse::Ok().json(ApiResponse::success(snapshots)))
}

/// 获取单个品种实时行情
///
/// GET /api/metals/{metal}
///
/// # 参数
/// - metal: 品种名称或代码（如 gold、XAU）
pub async fn get_metal_price(
    path: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let metal = match parse_metal::<PriceSnapshot>(&path.into_inner()) {
        Ok(metal) => metal,
        Err(response) => return Ok(response),
    };

    let snapshot = state.prices.get_metal_price(metal).await;
    Ok(HttpResponse::Ok().json(ApiResponse::success(snapshot)))
}

/// 获取单个品种周度数据
///
/// GET /api/metals/{metal}/weekly
pub async fn get_metal_weekly(
    path: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let metal = match parse_metal::<WeeklySeries>(&path.into_inner()) {
        Ok(metal) => metal,
        Err(response) => return Ok(response),
    };

    let snapshot = state.prices.get_metal_price(metal).await;
    match analytics::weekly_series(&snapshot) {
        Ok(weekly) => Ok(HttpResponse::Ok().json(ApiResponse::success(weekly))),
        Err(e) => {
            log::error!("{} 周度数据计算失败: {}", metal, e);
            let response = ApiResponse::<WeeklySeries>::error(e.to_string());
            Ok(HttpResponse::InternalServerError().json(response))
        }
    }
}

/// 执行一轮完整刷新
///
/// GET /api/metals/weekly
pub async fn get_weekly_overview(state: web::Data<AppState>) -> Result<HttpResponse> {
    let snapshots = state.prices.get_all_metal_prices().await;
    let overview = market_service::refresh(&snapshots, &state.alerts);
    Ok(HttpResponse::Ok().json(ApiResponse::success(overview)))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/metals")
            .route("", web::get().to(get_all_metal_prices))
            .route("/weekly", web::get().to(get_weekly_overview))
            .route("/{metal}", web::get().to(get_metal_price))
            .route("/{metal}/weekly", web::get().to(get_metal_weekly))
    );
}
