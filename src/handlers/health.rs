use actix_web::{web, HttpResponse, Result};
use crate::models::ApiResponse;

/// 服务名称，客户端以此识别后端
const BANNER: &str = "Simplify Money - Metal Prices API";

pub async fn root() -> Result<HttpResponse> {
    let response = ApiResponse::with_message(BANNER, BANNER);
    Ok(HttpResponse::Ok().json(response))
}

pub async fn health_check() -> Result<HttpResponse> {
    let response = ApiResponse::success("Service is healthy");
    Ok(HttpResponse::Ok().json(response))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(root))
        .route("/health", web::get().to(health_check));
}
