use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use pathshala_api::{config::Environment, router, state::ApiState};
use pathshala_content::{
    ContentLoader, Registry,
    models::{Problem, ProblemKind},
};
use serde::Deserialize;
use serde_json::{Value, json};
use tower::ServiceExt;

/// State over the bundled curriculum, without the start-up logging
pub fn test_state() -> ApiState {
    let registry = Registry::load().expect("bundled content should load");
    ApiState::from_loader(ContentLoader::new(registry), Environment::Development)
}

/// The answer a learner would submit to get `problem` right
pub fn correct_answer(problem: &Problem) -> Value {
    match &problem.kind {
        ProblemKind::Mcq(mcq) => {
            json!(mcq.correct_option().expect("mcq has a correct option").id)
        }
        ProblemKind::NumberInput(number) => json!(number.correct_answer),
        ProblemKind::DragDrop(drag_drop) => json!(drag_drop.solution),
        ProblemKind::Unsupported => panic!("problem {} has no gradable type", problem.id),
    }
}

/// Helper to make requests to the test app
pub struct TestClient {
    router: Router,
}

impl TestClient {
    pub fn new(router: Router) -> Self {
        Self { router }
    }

    /// Client for the full API router over the bundled curriculum
    pub fn bundled() -> Self {
        Self::new(router::router().with_state(test_state()))
    }

    /// Send a request and get the response
    pub async fn request(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to execute request");

        let status = response.status();
        let headers = response.headers().clone();
        let body_bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to read response body")
            .to_bytes();

        TestResponse {
            status,
            body: body_bytes.to_vec(),
            headers,
        }
    }

    /// Send a GET request
    pub async fn get(&self, uri: &str) -> TestResponse {
        let request = Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .expect("Failed to build request");

        self.request(request).await
    }

    /// Send a POST request with JSON body
    pub async fn post_json<T: serde::Serialize>(&self, uri: &str, body: &T) -> TestResponse {
        let json_body = serde_json::to_string(body).expect("Failed to serialize body");

        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(json_body))
            .expect("Failed to build request");

        self.request(request).await
    }

    /// Submit an answer to a problem
    pub async fn submit(&self, problem_id: &str, answer: Value) -> TestResponse {
        self.post_json(
            &format!("/v1/problems/{problem_id}/submit"),
            &json!({ "answer": answer }),
        )
        .await
    }
}

/// Test response wrapper
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
    #[allow(dead_code)]
    pub headers: axum::http::HeaderMap,
}

impl TestResponse {
    /// Get response body as string
    pub fn text(&self) -> String {
        String::from_utf8(self.body.clone()).expect("Response body is not valid UTF-8")
    }

    /// Parse response body as JSON
    pub fn json<T: for<'de> Deserialize<'de>>(&self) -> T {
        serde_json::from_slice(&self.body).expect("Failed to parse JSON response")
    }

    /// Assert status code
    pub fn assert_status(&self, expected: StatusCode) {
        assert_eq!(
            self.status,
            expected,
            "Expected status {}, got {}. Body: {}",
            expected,
            self.status,
            self.text()
        );
    }
}
