use crate::{
    api::{account, employee, leave, notification},
    auth::{handlers, middleware::auth_middleware},
    config::Config,
};
use actix_governor::{
    Governor, GovernorConfigBuilder, PeerIpKeyExtractor, governor::middleware::NoOpMiddleware,
};
use actix_web::{middleware::from_fn, web};

pub fn configure(cfg: &mut web::ServiceConfig, config: Config) {
    // Helper to build per-route limiter
    fn build_limiter(requests_per_min: u32) -> Governor<PeerIpKeyExtractor, NoOpMiddleware> {
        let per_ms = if requests_per_min == 0 {
            1
        } else {
            60_000 / requests_per_min as u64
        };
        let cfg = GovernorConfigBuilder::default()
            .per_millisecond(per_ms)
            .burst_size(requests_per_min)
            .key_extractor(PeerIpKeyExtractor)
            .finish()
            .unwrap();
        Governor::new(&cfg)
    }

    let login_limiter = build_limiter(config.rate_login_per_min);
    let protected_limiter = build_limiter(config.rate_protected_per_min);

    // Public routes
    cfg.service(
        web::scope("/auth").service(
            web::resource("/login")
                .wrap(login_limiter)
                .route(web::post().to(handlers::login)),
        ),
    );

    // Protected routes
    cfg.service(
        web::scope(&config.api_prefix)
            .wrap(from_fn(auth_middleware))
            // authentication
            .wrap(protected_limiter) // rate limiting
            .service(web::resource("/me").route(web::get().to(account::me)))
            .service(
                web::scope("/leave")
                    // /leave
                    .service(
                        web::resource("")
                            .route(web::get().to(leave::leave_list))
                            .route(web::post().to(leave::submit_leave)),
                    )
                    // /leave/types
                    .service(web::resource("/types").route(web::get().to(leave::leave_types)))
                    // /leave/mine
                    .service(web::resource("/mine").route(web::get().to(leave::my_leave_list)))
                    // /leave/{id}/approve
                    .service(
                        web::resource("/{id}/approve").route(web::put().to(leave::approve_leave)),
                    )
                    // /leave/{id}/reject
                    .service(
                        web::resource("/{id}/reject").route(web::put().to(leave::reject_leave)),
                    ),
            )
            .service(
                web::scope("/notifications")
                    // /notifications
                    .service(
                        web::resource("").route(web::get().to(notification::notification_list)),
                    )
                    // /notifications/unread-count
                    .service(
                        web::resource("/unread-count")
                            .route(web::get().to(notification::unread_count)),
                    )
                    // /notifications/read-all
                    .service(
                        web::resource("/read-all").route(web::put().to(notification::mark_all_read)),
                    )
                    // /notifications/{id}/read
                    .service(
                        web::resource("/{id}/read").route(web::put().to(notification::mark_read)),
                    ),
            )
            .service(
                web::scope("/employees")
                    // /employees
                    .service(
                        web::resource("")
                            .route(web::post().to(employee::create_employee))
                            .route(web::get().to(employee::list_employees)),
                    ),
            ),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use actix_web::{App, test, web::Data};
    use serde_json::{Value, json};

    use crate::auth::service::AuthService;
    use crate::ledger::LeaveLedger;
    use crate::store::SystemClock;
    use crate::store::testing::MemStore;

    fn test_config() -> Config {
        Config {
            server_addr: "127.0.0.1:0".into(),
            jwt_secret: "test-secret".into(),
            data_dir: "unused".into(),
            access_token_ttl: 900,
            rate_login_per_min: 60,
            rate_protected_per_min: 1000,
            api_prefix: "/api".into(),
        }
    }

    fn with_peer(req: test::TestRequest) -> test::TestRequest {
        req.peer_addr("127.0.0.1:34567".parse().unwrap())
    }

    macro_rules! login {
        ($app:expr, $employee_id:expr, $password:expr) => {{
            let req = with_peer(test::TestRequest::post().uri("/auth/login"))
                .set_json(json!({"employee_id": $employee_id, "password": $password}))
                .to_request();
            let resp = test::call_service($app, req).await;
            assert!(resp.status().is_success(), "login failed for {}", $employee_id);
            let body: Value = test::read_body_json(resp).await;
            body["access_token"].as_str().unwrap().to_string()
        }};
    }

    #[actix_web::test]
    async fn login_submit_and_approve_flow() {
        let store = Arc::new(MemStore::default());
        let auth = Arc::new(AuthService::open(store.clone()).unwrap());
        let ledger = Arc::new(
            LeaveLedger::open(store, Arc::new(SystemClock), auth.clone()).unwrap(),
        );
        let config = test_config();
        let config_for_routes = config.clone();

        let app = test::init_service(
            App::new()
                .app_data(Data::new(config))
                .app_data(Data::from(auth))
                .app_data(Data::from(ledger))
                .configure(|cfg| configure(cfg, config_for_routes.clone())),
        )
        .await;

        // No token at all is rejected by the middleware.
        let resp = test::call_service(
            &app,
            with_peer(test::TestRequest::get().uri("/api/leave/mine")).to_request(),
        )
        .await;
        assert_eq!(resp.status(), 401);

        // Wrong password is rejected.
        let resp = test::call_service(
            &app,
            with_peer(test::TestRequest::post().uri("/auth/login"))
                .set_json(json!({"employee_id": "EMP001", "password": "nope"}))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), 401);

        let alice_token = login!(&app, "EMP001", "password1");

        // Alice submits a two-day casual leave.
        let resp = test::call_service(
            &app,
            with_peer(test::TestRequest::post().uri("/api/leave"))
                .insert_header(("Authorization", format!("Bearer {alice_token}")))
                .set_json(json!({
                    "leave_type_id": "lt1",
                    "start_date": "2026-04-01",
                    "end_date": "2026-04-02",
                    "reason": "Family event"
                }))
                .to_request(),
        )
        .await;
        assert!(resp.status().is_success());
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Leave request submitted successfully.");
        let request_id = body["request_id"].as_str().unwrap().to_string();

        // A non-admin cannot decide it.
        let resp = test::call_service(
            &app,
            with_peer(test::TestRequest::put().uri(&format!("/api/leave/{request_id}/approve")))
                .insert_header(("Authorization", format!("Bearer {alice_token}")))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), 403);

        // The admin sees it in the pending view and approves it.
        let admin_token = login!(&app, "ADMIN001", "adminpassword123");
        let resp = test::call_service(
            &app,
            with_peer(test::TestRequest::get().uri("/api/leave?status=Pending"))
                .insert_header(("Authorization", format!("Bearer {admin_token}")))
                .to_request(),
        )
        .await;
        assert!(resp.status().is_success());
        let body: Value = test::read_body_json(resp).await;
        assert!(
            body["data"]
                .as_array()
                .unwrap()
                .iter()
                .any(|r| r["id"] == request_id.as_str())
        );

        let resp = test::call_service(
            &app,
            with_peer(test::TestRequest::put().uri(&format!("/api/leave/{request_id}/approve")))
                .insert_header(("Authorization", format!("Bearer {admin_token}")))
                .set_json(json!({"remarks": "Enjoy"}))
                .to_request(),
        )
        .await;
        assert!(resp.status().is_success());
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Leave request approved.");

        // Deciding it again conflicts.
        let resp = test::call_service(
            &app,
            with_peer(test::TestRequest::put().uri(&format!("/api/leave/{request_id}/reject")))
                .insert_header(("Authorization", format!("Bearer {admin_token}")))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), 409);

        // Alice got the decision notification.
        let resp = test::call_service(
            &app,
            with_peer(test::TestRequest::get().uri("/api/notifications"))
                .insert_header(("Authorization", format!("Bearer {alice_token}")))
                .to_request(),
        )
        .await;
        assert!(resp.status().is_success());
        let body: Value = test::read_body_json(resp).await;
        let message = body["data"]
            .as_array()
            .unwrap()
            .iter()
            .find(|n| n["related_request_id"] == request_id.as_str())
            .map(|n| n["message"].as_str().unwrap().to_string())
            .unwrap();
        assert!(message.contains("Approved"));
        assert!(message.contains("Enjoy"));
    }

    #[actix_web::test]
    async fn employee_routes_require_admin() {
        let store = Arc::new(MemStore::default());
        let auth = Arc::new(AuthService::open(store.clone()).unwrap());
        let ledger = Arc::new(
            LeaveLedger::open(store, Arc::new(SystemClock), auth.clone()).unwrap(),
        );
        let config = test_config();
        let config_for_routes = config.clone();

        let app = test::init_service(
            App::new()
                .app_data(Data::new(config))
                .app_data(Data::from(auth))
                .app_data(Data::from(ledger))
                .configure(|cfg| configure(cfg, config_for_routes.clone())),
        )
        .await;

        let alice_token = login!(&app, "EMP001", "password1");
        let resp = test::call_service(
            &app,
            with_peer(test::TestRequest::get().uri("/api/employees"))
                .insert_header(("Authorization", format!("Bearer {alice_token}")))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), 403);

        let admin_token = login!(&app, "ADMIN001", "adminpassword123");
        let resp = test::call_service(
            &app,
            with_peer(test::TestRequest::post().uri("/api/employees"))
                .insert_header(("Authorization", format!("Bearer {admin_token}")))
                .set_json(json!({
                    "employee_id": "EMP003",
                    "name": "Charlie Chaplin",
                    "password": "password3"
                }))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), 201);

        // Duplicate employee id conflicts.
        let resp = test::call_service(
            &app,
            with_peer(test::TestRequest::post().uri("/api/employees"))
                .insert_header(("Authorization", format!("Bearer {admin_token}")))
                .set_json(json!({
                    "employee_id": "EMP003",
                    "name": "Charlie Again",
                    "password": "password3"
                }))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), 409);
    }
}
