//! In-memory `Transport` for unit tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse, Transport};

#[derive(Debug, Clone)]
enum Route {
    Respond { response: HttpResponse, delay: Duration },
    Fail(ApiError),
}

/// Answers by URL. Unrouted URLs fail with `ApiError::Transport`.
#[derive(Debug, Default)]
pub struct StubTransport {
    routes: Mutex<HashMap<String, Route>>,
    calls: AtomicUsize,
}

impl StubTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, url: &str, status: u16, body: &str) {
        self.respond_after(url, status, body, Duration::ZERO);
    }

    pub fn respond_after(&self, url: &str, status: u16, body: &str, delay: Duration) {
        let route = Route::Respond {
            response: HttpResponse::new(status, body),
            delay,
        };
        self.routes.lock().unwrap().insert(url.to_string(), route);
    }

    pub fn fail(&self, url: &str, error: ApiError) {
        self.routes
            .lock()
            .unwrap()
            .insert(url.to_string(), Route::Fail(error));
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Transport for StubTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let route = self.routes.lock().unwrap().get(&request.url).cloned();
        match route {
            Some(Route::Respond { response, delay }) => {
                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
                Ok(response)
            }
            Some(Route::Fail(error)) => Err(error),
            None => Err(ApiError::Transport(format!("connection refused: {}", request.url))),
        }
    }
}
