pub mod alerts;
pub mod health;
pub mod metals;

use actix_web::{error, web, HttpResponse};
use crate::models::ApiResponse;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .configure(health::config)
            .configure(metals::config)
            .configure(alerts::config)
    );
}

/// 请求体解析失败时同样返回统一响应格式
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let response = HttpResponse::BadRequest().json(ApiResponse::<()>::error(err.to_string()));
        error::InternalError::from_response(err, response).into()
    })
}
