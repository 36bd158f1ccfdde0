//! Integration tests for the chat API endpoints

mod test_utils;

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use anyhow::Error;
    use async_trait::async_trait;
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
    };
    use mockito::Matcher;
    use tokio::sync::Notify;
    use tower::util::ServiceExt;

    use surefit::ai::fallback::{DEFAULT_RESPONSE, NUTRITION_RESPONSE, WEIGHT_LOSS_RESPONSE};
    use surefit::ai::advisor::BoxedTextGenerator;
    use surefit::ai::{AdviceSource, FallbackTable, FitnessAdvisor, TextGenerator};
    use surefit::api::app;
    use surefit::api::public::chat::{ChatMessageResponse, ChatSessionResponse};
    use surefit::chat::{GREETING, Role};

    use crate::test_utils::{
        body_to_string, test_app, test_app_with_advisor, test_app_with_config, test_config,
        test_state,
    };

    async fn create_session(app: &Router) -> ChatSessionResponse {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/api/chat/sessions")
                    .method("POST")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let body = body_to_string(response.into_body()).await;
        serde_json::from_str(&body).unwrap()
    }

    fn message_request(session_id: &str, message: &str) -> Request<Body> {
        Request::builder()
            .uri(format!("/api/chat/sessions/{}/messages", session_id))
            .method("POST")
            .header("content-type", "application/json")
            .body(Body::from(
                serde_json::json!({ "message": message }).to_string(),
            ))
            .unwrap()
    }

    async fn get_session(app: &Router, session_id: &str) -> ChatSessionResponse {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri(format!("/api/chat/sessions/{}", session_id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_to_string(response.into_body()).await;
        serde_json::from_str(&body).unwrap()
    }

    /// Tests a new session starts with only the greeting
    #[tokio::test]
    async fn it_creates_session_with_greeting() {
        let app = test_app();
        let session = create_session(&app).await;

        assert!(!session.session_id.is_empty());
        assert!(!session.in_flight);
        assert_eq!(session.transcript.len(), 1);
        assert_eq!(session.transcript[0].role, Role::Assistant);
        assert_eq!(session.transcript[0].text, GREETING);
    }

    /// Tests getting a chat session that doesn't exist
    #[tokio::test]
    async fn it_returns_404_for_nonexistent_session() {
        let app = test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/chat/sessions/nonexistent-session-id")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    /// Tests posting a message to a session that doesn't exist
    #[tokio::test]
    async fn it_returns_404_when_messaging_nonexistent_session() {
        let app = test_app();

        let response = app
            .oneshot(message_request("nonexistent-session-id", "hello"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    /// Tests the fallback answer comes back when no key is configured
    #[tokio::test]
    async fn it_answers_from_fallback_without_credential() {
        let app = test_app();
        let session = create_session(&app).await;

        let response = app
            .clone()
            .oneshot(message_request(
                &session.session_id,
                "Can you help me lose weight fast?",
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_to_string(response.into_body()).await;
        let resp: ChatMessageResponse = serde_json::from_str(&body).unwrap();
        assert_eq!(resp.reply, WEIGHT_LOSS_RESPONSE);
        assert_eq!(resp.source, AdviceSource::Fallback);
        assert_eq!(resp.transcript.len(), 3);
    }

    /// Tests the transcript keeps submission order across turns
    #[tokio::test]
    async fn it_appends_in_submission_order() {
        let app = test_app();
        let session = create_session(&app).await;

        for message in ["hello", "diet tips"] {
            let response = app
                .clone()
                .oneshot(message_request(&session.session_id, message))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
        }

        let session = get_session(&app, &session.session_id).await;
        let transcript: Vec<(Role, &str)> = session
            .transcript
            .iter()
            .map(|m| (m.role, m.text.as_str()))
            .collect();
        assert_eq!(
            transcript,
            vec![
                (Role::Assistant, GREETING),
                (Role::User, "hello"),
                (Role::Assistant, DEFAULT_RESPONSE),
                (Role::User, "diet tips"),
                (Role::Assistant, NUTRITION_RESPONSE),
            ]
        );
    }

    /// Tests a blank message is rejected and not recorded
    #[tokio::test]
    async fn it_rejects_blank_message() {
        let app = test_app();
        let session = create_session(&app).await;

        let response = app
            .clone()
            .oneshot(message_request(&session.session_id, "   "))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let session = get_session(&app, &session.session_id).await;
        assert_eq!(session.transcript.len(), 1);
    }

    /// Tests a malformed request body is rejected by the extractor
    #[tokio::test]
    async fn it_rejects_missing_message_field() {
        let app = test_app();
        let session = create_session(&app).await;

        let response = app
            .oneshot(
                Request::builder()
                    .uri(format!("/api/chat/sessions/{}/messages", session.session_id))
                    .method("POST")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"text": "hello"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    /// Generator that blocks until released so a turn stays in flight
    struct GatedGenerator {
        gate: Arc<Notify>,
    }

    #[async_trait]
    impl TextGenerator for GatedGenerator {
        async fn generate(&self, _prompt: &str) -> Result<String, Error> {
            self.gate.notified().await;
            Ok(String::from("Live answer"))
        }
    }

    /// Tests a second message is rejected while the first is pending
    #[tokio::test]
    async fn it_rejects_overlapping_messages() {
        let gate = Arc::new(Notify::new());
        let generator: BoxedTextGenerator = Arc::new(GatedGenerator {
            gate: Arc::clone(&gate),
        });
        let advisor = FitnessAdvisor::new(Some(generator), FallbackTable::default());
        let app = test_app_with_advisor(advisor);
        let session = create_session(&app).await;

        let first_app = app.clone();
        let first_request = message_request(&session.session_id, "first");
        let first = tokio::spawn(async move { first_app.oneshot(first_request).await.unwrap() });

        // Wait for the first turn to be registered as in flight
        let mut in_flight = false;
        for _ in 0..100 {
            if get_session(&app, &session.session_id).await.in_flight {
                in_flight = true;
                break;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        assert!(in_flight);

        let second = app
            .clone()
            .oneshot(message_request(&session.session_id, "second"))
            .await
            .unwrap();
        assert_eq!(second.status(), StatusCode::CONFLICT);

        gate.notify_one();
        let first = first.await.unwrap();
        assert_eq!(first.status(), StatusCode::OK);
        let body = body_to_string(first.into_body()).await;
        let resp: ChatMessageResponse = serde_json::from_str(&body).unwrap();
        assert_eq!(resp.reply, "Live answer");
        assert_eq!(resp.source, AdviceSource::Live);

        let texts: Vec<String> = resp.transcript.iter().map(|m| m.text.clone()).collect();
        assert_eq!(texts, vec![GREETING, "first", "Live answer"]);

        let session = get_session(&app, &session.session_id).await;
        assert!(!session.in_flight);
    }

    /// Tests an upstream error is replaced with the fallback answer
    #[tokio::test]
    async fn it_falls_back_when_upstream_fails() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/v1beta/models/gemini-pro:generateContent")
            .match_query(Matcher::UrlEncoded("key".into(), "test-key".into()))
            .with_status(503)
            .with_body("unavailable")
            .expect(1)
            .create_async()
            .await;

        let mut config = test_config();
        config.gemini_api_key = Some(String::from("test-key"));
        config.gemini_api_hostname = server.url();
        let app = test_app_with_config(config);
        let session = create_session(&app).await;

        let response = app
            .clone()
            .oneshot(message_request(&session.session_id, "diet tips"))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_to_string(response.into_body()).await;
        let resp: ChatMessageResponse = serde_json::from_str(&body).unwrap();
        assert_eq!(resp.reply, NUTRITION_RESPONSE);
        assert_eq!(resp.source, AdviceSource::Fallback);
    }

    /// Tests the live answer is used when the upstream call succeeds
    #[tokio::test]
    async fn it_uses_live_answer_from_upstream() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/v1beta/models/gemini-pro:generateContent")
            .match_query(Matcher::Any)
            .match_body(Matcher::Regex(String::from("User asks: legs\\?")))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"candidates": [{"content": {"parts": [{"text": "Squat."}]}}]}"#)
            .create_async()
            .await;

        let mut config = test_config();
        config.gemini_api_key = Some(String::from("test-key"));
        config.gemini_api_hostname = server.url();
        let app = test_app_with_config(config);
        let session = create_session(&app).await;

        let response = app
            .clone()
            .oneshot(message_request(&session.session_id, "legs?"))
            .await
            .unwrap();

        let body = body_to_string(response.into_body()).await;
        let resp: ChatMessageResponse = serde_json::from_str(&body).unwrap();
        assert_eq!(resp.reply, "Squat.");
        assert_eq!(resp.source, AdviceSource::Live);
    }

    /// Tests an idle session is forgotten and then returns 404
    #[tokio::test]
    async fn it_expires_idle_sessions() {
        let mut config = test_config();
        config.session_idle_secs = 1;
        let app = test_app_with_config(config);
        let session = create_session(&app).await;

        get_session(&app, &session.session_id).await;
        tokio::time::sleep(Duration::from_millis(1100)).await;

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri(format!("/api/chat/sessions/{}", session.session_id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = app
            .oneshot(message_request(&session.session_id, "diet tips"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    /// Tests repeated anonymous session creation can't grow the store
    /// past its limit
    #[tokio::test]
    async fn it_caps_number_of_sessions() {
        let mut config = test_config();
        config.max_sessions = 50;
        let state = test_state(config);
        let app = app(Arc::clone(&state));

        let mut last = None;
        for _ in 0..200 {
            last = Some(create_session(&app).await);
        }

        assert_eq!(state.read().unwrap().sessions.len(), 50);
        // The newest session is still usable
        let last = last.unwrap();
        let response = app
            .oneshot(message_request(&last.session_id, "where are you?"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
