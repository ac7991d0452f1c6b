#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use rookery::core::{AppState, IDENTITY_KEY, Navigator};
use rookery::dtos::{CreateReportDTO, ReportEnvelope};
use rookery::stores::{IdentityStore, MemoryIdentityStore};
use rookery::upstream::{ReportTransport, TransportError};
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

pub const TEST_SECRET: &str = "test-secret-change-me";

/// Navigator that records every navigation so tests can count them.
#[derive(Default)]
pub struct CountingNavigator {
    calls: AtomicUsize,
    last_destination: Mutex<Option<String>>,
}

impl CountingNavigator {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_destination(&self) -> Option<String> {
        self.last_destination.lock().unwrap().clone()
    }
}

impl Navigator for CountingNavigator {
    fn navigate(&self, destination: &str) {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_destination.lock().unwrap() = Some(destination.to_string());
    }
}

/// How the mock upstream answers.
pub enum MockOutcome {
    Succeed,
    Reject,
}

/// Mock report transport, counting submissions.
pub struct MockReportTransport {
    outcome: MockOutcome,
    calls: AtomicUsize,
}

impl MockReportTransport {
    pub fn new(outcome: MockOutcome) -> Self {
        Self {
            outcome,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ReportTransport for MockReportTransport {
    async fn submit(&self, _report: &CreateReportDTO) -> Result<ReportEnvelope, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.outcome {
            MockOutcome::Succeed => Ok(ReportEnvelope {
                success: true,
                report_id: Some("r-1".to_string()),
                message: None,
            }),
            MockOutcome::Reject => Err(TransportError::Rejected {
                status: 503,
                body: "moderation queue unavailable".to_string(),
            }),
        }
    }
}

/// Everything a test needs: the server plus handles on the injected
/// capabilities to drive and observe the guard.
pub struct TestApp {
    pub server: TestServer,
    pub identity: Arc<MemoryIdentityStore>,
    pub navigator: Arc<CountingNavigator>,
    pub transport: Arc<MockReportTransport>,
}

/// Build a test app around a mock transport with the given outcome.
pub fn create_test_app(outcome: MockOutcome) -> TestApp {
    let identity = Arc::new(MemoryIdentityStore::new());
    let navigator = Arc::new(CountingNavigator::default());
    let transport = Arc::new(MockReportTransport::new(outcome));

    let state = Arc::new(AppState::with_capabilities(
        identity.clone(),
        navigator.clone(),
        transport.clone(),
        TEST_SECRET.to_string(),
    ));

    let app = rookery::create_router(state);
    let server = TestServer::new(app).expect("Failed to create test server");

    TestApp {
        server,
        identity,
        navigator,
        transport,
    }
}

/// Store a session token so guarded routes pass.
pub fn authorize(app: &TestApp) {
    app.identity.set(IDENTITY_KEY, "abc123".to_string());
}
