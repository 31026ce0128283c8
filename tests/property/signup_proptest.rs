//! Property-based tests for the signup and login flow

use axum::http::StatusCode;
use proptest::prelude::*;
use serde_json::Value;
use ticketdesk::backend::auth::cookies::SESSION_COOKIE;

use crate::common::{credentials, TestApp};
use crate::runtime;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn test_signup_then_login_succeeds(
        email in "[a-z0-9._+-]{1,16}@[a-z0-9-]{1,12}\\.[a-z]{2,6}",
        password in "[ -~]{1,32}",
    ) {
        runtime().block_on(async {
            let app = TestApp::new().await;

            let signup = app.server.post("/signup").json(&credentials(&email, &password)).await;
            prop_assert_eq!(signup.status_code(), StatusCode::CREATED);

            let login = app.server.post("/login").json(&credentials(&email, &password)).await;
            prop_assert_eq!(login.status_code(), StatusCode::OK);
            let body: Value = login.json();
            prop_assert_eq!(&body["user"]["email"], &Value::from(email.clone()));

            let profile = app
                .server
                .get("/profile")
                .add_cookie(login.cookie(SESSION_COOKIE))
                .await;
            prop_assert_eq!(&profile.json::<Value>()["email"], &Value::from(email.clone()));

            prop_assert_eq!(app.db.count_users(&email).await, 1);
            Ok::<(), TestCaseError>(())
        })?;
    }
}
