//! Integration tests for reply threads and typing presence

mod common;

#[cfg(test)]
mod thread_tests {
    use super::common::*;
    use axum::http::StatusCode;
    use serde_json::{Value, json};

    #[tokio::test]
    async fn test_post_and_list_replies_in_order() {
        let app = create_test_app(MockOutcome::Succeed);
        authorize(&app);

        let first = app
            .server
            .post("/threads/t1/replies")
            .json(&json!({ "sender_id": "u1", "content": "first!" }))
            .await;
        first.assert_status(StatusCode::CREATED);

        app.server
            .post("/threads/t1/replies")
            .json(&json!({ "sender_id": "u2", "content": "second" }))
            .await
            .assert_status(StatusCode::CREATED);

        let response = app.server.get("/threads/t1/replies").await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["thread_id"], json!("t1"));
        assert_eq!(body["count"], json!(2));
        assert_eq!(body["replies"][0]["content"], json!("first!"));
        assert_eq!(body["replies"][1]["content"], json!("second"));
        assert_eq!(body["replies"][0]["sender_id"], json!("u1"));
    }

    #[tokio::test]
    async fn test_threads_are_isolated() {
        let app = create_test_app(MockOutcome::Succeed);
        authorize(&app);

        app.server
            .post("/threads/t1/replies")
            .json(&json!({ "sender_id": "u1", "content": "only here" }))
            .await
            .assert_status(StatusCode::CREATED);

        let response = app.server.get("/threads/t2/replies").await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["count"], json!(0));
    }

    #[tokio::test]
    async fn test_empty_reply_is_rejected() {
        let app = create_test_app(MockOutcome::Succeed);
        authorize(&app);

        let response = app
            .server
            .post("/threads/t1/replies")
            .json(&json!({ "sender_id": "u1", "content": "" }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_typing_indicator_labels() {
        let app = create_test_app(MockOutcome::Succeed);
        authorize(&app);

        let idle = app.server.get("/threads/t1/typing").await;
        idle.assert_status_ok();
        let body: Value = idle.json();
        assert_eq!(body["active"], json!(false));

        app.server
            .post("/threads/t1/typing")
            .json(&json!({ "username": "alice", "typing": true }))
            .await
            .assert_status(StatusCode::NO_CONTENT);

        let one: Value = app.server.get("/threads/t1/typing").await.json();
        assert_eq!(one["label"], json!("alice is typing..."));

        app.server
            .post("/threads/t1/typing")
            .json(&json!({ "username": "bob", "typing": true }))
            .await
            .assert_status(StatusCode::NO_CONTENT);

        let two: Value = app.server.get("/threads/t1/typing").await.json();
        assert_eq!(two["label"], json!("alice and bob are typing..."));

        app.server
            .post("/threads/t1/typing")
            .json(&json!({ "username": "alice", "typing": false }))
            .await
            .assert_status(StatusCode::NO_CONTENT);

        let remaining: Value = app.server.get("/threads/t1/typing").await.json();
        assert_eq!(remaining["label"], json!("bob is typing..."));
    }

    #[tokio::test]
    async fn test_posting_a_reply_clears_typing() {
        let app = create_test_app(MockOutcome::Succeed);
        authorize(&app);

        app.server
            .post("/threads/t1/typing")
            .json(&json!({ "username": "u1", "typing": true }))
            .await
            .assert_status(StatusCode::NO_CONTENT);

        app.server
            .post("/threads/t1/replies")
            .json(&json!({ "sender_id": "u1", "content": "done typing" }))
            .await
            .assert_status(StatusCode::CREATED);

        let body: Value = app.server.get("/threads/t1/typing").await.json();
        assert_eq!(body["active"], json!(false));
    }
}
