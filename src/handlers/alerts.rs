//! 价格提醒接口处理器
//!
//! ## API 列表
//! - GET /alerts - 获取激活中的提醒（?all=true 返回全部）
//! - POST /alerts - 新建提醒
//! - GET /alerts/{id} - 获取单个提醒
//! - DELETE /alerts/{id} - 删除提醒
//! - POST /alerts/evaluate - 拉取最新行情并判断提醒

use actix_web::{web, HttpResponse, Result};
use crate::models::{AlertDirection, AlertQuery, AlertRule, ApiResponse, CreateAlertRequest};
use crate::state::AppState;

use super::metals::parse_metal;

/// 获取提醒列表
///
/// GET /api/alerts
pub async fn list_alerts(
    query: web::Query<AlertQuery>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let alerts = if query.all {
        state.alerts.list_all()
    } else {
        state.alerts.list_active()
    };
    Ok(HttpResponse::Ok().json(ApiResponse::success(alerts)))
}

/// 新建提醒
///
/// POST /api/alerts
///
/// 未指定方向时按当前价格推断：目标价不低于当前价为 above，否则为 below
pub async fn create_alert(
    body: web::Json<CreateAlertRequest>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let request = body.into_inner();
    let metal = match parse_metal::<AlertRule>(&request.symbol) {
        Ok(metal) => metal,
        Err(response) => return Ok(response),
    };

    let direction = match request.direction {
        Some(direction) => direction,
        None => {
            let current = state.prices.get_metal_price(metal).await;
            AlertDirection::infer(request.target_price, current.price)
        }
    };

    match state.alerts.add_alert(
        metal.key(),
        request.target_price,
        direction,
        request.active.unwrap_or(true),
    ) {
        Ok(rule) => Ok(HttpResponse::Created().json(ApiResponse::success(rule))),
        Err(e) => {
            let response = ApiResponse::<AlertRule>::error(e.to_string());
            Ok(HttpResponse::BadRequest().json(response))
        }
    }
}

/// 获取单个提醒
///
/// GET /api/alerts/{id}
pub async fn get_alert(
    path: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let id = path.into_inner();
    match state.alerts.get(&id) {
        Some(rule) => Ok(HttpResponse::Ok().json(ApiResponse::success(rule))),
        None => {
            let response = ApiResponse::<AlertRule>::error(format!("Alert {} not found", id));
            Ok(HttpResponse::NotFound().json(response))
        }
    }
}

/// 删除提醒，不存在的 id 同样返回成功
///
/// DELETE /api/alerts/{id}
pub async fn delete_alert(
    path: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let id = path.into_inner();
    let message = if state.alerts.remove_alert(&id) {
        "Alert removed"
    } else {
        "Alert not found, nothing removed"
    };
    Ok(HttpResponse::Ok().json(ApiResponse::with_message(id, message)))
}

/// 拉取最新行情并判断提醒，返回本次触发的提醒
///
/// POST /api/alerts/evaluate
pub async fn evaluate_alerts(state: web::Data<AppState>) -> Result<HttpResponse> {
    let snapshots = state.prices.get_all_metal_prices().await;
    let fired = state.alerts.evaluate(&snapshots);
    Ok(HttpResponse::Ok().json(ApiResponse::success(fired)))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/alerts")
            .route("", web::get().to(list_alerts))
            .route("", web::post().to(create_alert))
            .route("/evaluate", web::post().to(evaluate_alerts))
            .route("/{id}", web::get().to(get_alert))
            .route("/{id}", web::delete().to(delete_alert))
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers;
    use crate::models::AlertState;
    use crate::state::testing::offline_state;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::json;

    macro_rules! app {
        ($state:expr) => {
            test::init_service(
                App::new()
                    .app_data($state.clone())
                    .app_data(handlers::json_config())
                    .configure(handlers::config),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn create_infers_direction_from_mock_price() {
        let state = offline_state();
        let app = app!(state);

        // 模拟金价 7200
        let req = test::TestRequest::post()
            .uri("/api/alerts")
            .set_json(json!({"symbol": "Gold", "target_price": 7500.0}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: ApiResponse<AlertRule> = test::read_body_json(resp).await;
        let rule = body.data.unwrap();
        assert_eq!(rule.symbol, "gold");
        assert_eq!(rule.direction, AlertDirection::Above);
        assert_eq!(rule.state, AlertState::Active);

        let req = test::TestRequest::post()
            .uri("/api/alerts")
            .set_json(json!({"symbol": "gold", "target_price": 7000.0}))
            .to_request();
        let body: ApiResponse<AlertRule> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body.data.unwrap().direction, AlertDirection::Below);
    }

    #[actix_web::test]
    async fn explicit_direction_is_kept() {
        let state = offline_state();
        let app = app!(state);

        let req = test::TestRequest::post()
            .uri("/api/alerts")
            .set_json(json!({"symbol": "silver", "target_price": 100.0, "direction": "below"}))
            .to_request();
        let body: ApiResponse<AlertRule> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body.data.unwrap().direction, AlertDirection::Below);
    }

    #[actix_web::test]
    async fn create_rejects_bad_input() {
        let state = offline_state();
        let app = app!(state);

        let req = test::TestRequest::post()
            .uri("/api/alerts")
            .set_json(json!({"symbol": "gold", "target_price": -5.0, "direction": "above"}))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::post()
            .uri("/api/alerts")
            .set_json(json!({"symbol": "copper", "target_price": 5.0}))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

        let req = test::TestRequest::post()
            .uri("/api/alerts")
            .set_json(json!({"symbol": "gold"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: ApiResponse<AlertRule> = test::read_body_json(resp).await;
        assert!(!body.success);

        assert!(state.alerts.list_all().is_empty());
    }

    #[actix_web::test]
    async fn evaluate_fires_and_list_reflects_state() {
        let state = offline_state();
        let fired = state.alerts.add_alert("gold", 7100.0, AlertDirection::Above, true).unwrap();
        let waiting = state.alerts.add_alert("silver", 20.0, AlertDirection::Below, true).unwrap();
        let app = app!(state);

        let req = test::TestRequest::post().uri("/api/alerts/evaluate").to_request();
        let body: ApiResponse<Vec<AlertRule>> = test::call_and_read_body_json(&app, req).await;
        let ids: Vec<String> = body.data.unwrap().into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![fired.id.clone()]);

        let req = test::TestRequest::get().uri("/api/alerts").to_request();
        let body: ApiResponse<Vec<AlertRule>> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body.data.unwrap(), vec![waiting]);

        let req = test::TestRequest::get().uri("/api/alerts?all=true").to_request();
        let body: ApiResponse<Vec<AlertRule>> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body.data.unwrap().len(), 2);

        // 已触发的提醒不会再次触发
        let req = test::TestRequest::post().uri("/api/alerts/evaluate").to_request();
        let body: ApiResponse<Vec<AlertRule>> = test::call_and_read_body_json(&app, req).await;
        assert!(body.data.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn delete_is_idempotent() {
        let state = offline_state();
        let rule = state.alerts.add_alert("gold", 7100.0, AlertDirection::Above, true).unwrap();
        let app = app!(state);

        for expected in ["Alert removed", "Alert not found, nothing removed"] {
            let req = test::TestRequest::delete()
                .uri(&format!("/api/alerts/{}", rule.id))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::OK);
            let body: ApiResponse<String> = test::read_body_json(resp).await;
            assert_eq!(body.message, expected);
        }
        assert!(state.alerts.list_all().is_empty());

        let req = test::TestRequest::get()
            .uri(&format!("/api/alerts/{}", rule.id))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
    }
}
