//! Integration tests for the access guard
//!
//! Guarded routes must redirect anonymous visitors to /login exactly once
//! per request, and pass authorized requests through unchanged.

mod common;

#[cfg(test)]
mod guard_tests {
    use super::common::*;
    use axum::http::StatusCode;
    use rookery::core::IDENTITY_KEY;
    use rookery::stores::IdentityStore;
    use serde_json::{Value, json};

    #[tokio::test]
    async fn test_empty_store_redirects_to_login() {
        let app = create_test_app(MockOutcome::Succeed);

        let response = app.server.get("/communities").await;

        response.assert_status(StatusCode::SEE_OTHER);
        let location = response
            .headers()
            .get("location")
            .expect("Location header should be present")
            .to_str()
            .unwrap()
            .to_string();
        assert_eq!(location, "/login");

        assert_eq!(app.navigator.calls(), 1);
        assert_eq!(app.navigator.last_destination().as_deref(), Some("/login"));
    }

    #[tokio::test]
    async fn test_present_token_passes_through_unchanged() {
        let app = create_test_app(MockOutcome::Succeed);
        authorize(&app);

        let response = app.server.get("/communities").await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body, json!([]));
        assert_eq!(app.navigator.calls(), 0);
    }

    #[tokio::test]
    async fn test_empty_string_token_is_treated_as_absent() {
        let app = create_test_app(MockOutcome::Succeed);
        app.identity.set(IDENTITY_KEY, String::new());

        let response = app.server.get("/communities").await;

        response.assert_status(StatusCode::SEE_OTHER);
        assert_eq!(app.navigator.calls(), 1);
    }

    #[tokio::test]
    async fn test_redirect_blocks_protected_mutation() {
        let app = create_test_app(MockOutcome::Succeed);

        let response = app
            .server
            .post("/threads/t1/replies")
            .json(&json!({ "sender_id": "u1", "content": "should not land" }))
            .await;
        response.assert_status(StatusCode::SEE_OTHER);

        // The handler never ran: once authorized, the thread is still empty
        authorize(&app);
        let replies = app.server.get("/threads/t1/replies").await;
        replies.assert_status_ok();
        let body: Value = replies.json();
        assert_eq!(body["count"], json!(0));
    }

    #[tokio::test]
    async fn test_decision_is_stable_across_requests() {
        let app = create_test_app(MockOutcome::Succeed);

        for _ in 0..3 {
            let response = app.server.get("/communities").await;
            response.assert_status(StatusCode::SEE_OTHER);
        }
        assert_eq!(app.navigator.calls(), 3);

        authorize(&app);
        for _ in 0..3 {
            let response = app.server.get("/communities").await;
            response.assert_status_ok();
        }
        assert_eq!(app.navigator.calls(), 3);
    }

    #[tokio::test]
    async fn test_guard_reevaluates_after_token_removal() {
        let app = create_test_app(MockOutcome::Succeed);
        authorize(&app);

        app.server.get("/communities").await.assert_status_ok();

        app.identity.remove(IDENTITY_KEY);
        let response = app.server.get("/communities").await;
        response.assert_status(StatusCode::SEE_OTHER);
        assert_eq!(app.navigator.calls(), 1);
    }

    #[tokio::test]
    async fn test_root_and_login_are_not_guarded() {
        let app = create_test_app(MockOutcome::Succeed);

        app.server.get("/").await.assert_status_ok();

        let login = app.server.get("/login").await;
        login.assert_status_ok();
        let body: Value = login.json();
        assert_eq!(body["message"], json!("Sign in to continue"));

        assert_eq!(app.navigator.calls(), 0);
    }
}
