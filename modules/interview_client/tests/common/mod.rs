//! Common test utilities: clients wired to a mock gateway and a listener
//! that records session events

#![allow(dead_code)]

use httpmock::MockServer;
use interview_client::{
    ClientConfig, GatewayClient, InMemoryTokenStore, InterviewClient, SessionListener,
};
use parking_lot::Mutex;
use std::sync::Arc;

/// Session events observed by [`RecordingListener`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    Unauthorized(String),
    TokenChanged(bool),
}

/// Listener that remembers every callback it received
#[derive(Default)]
pub struct RecordingListener {
    events: Mutex<Vec<SessionEvent>>,
}

impl RecordingListener {
    pub fn events(&self) -> Vec<SessionEvent> {
        self.events.lock().clone()
    }

    pub fn unauthorized_routes(&self) -> Vec<String> {
        self.events
            .lock()
            .iter()
            .filter_map(|e| match e {
                SessionEvent::Unauthorized(route) => Some(route.clone()),
                SessionEvent::TokenChanged(_) => None,
            })
            .collect()
    }
}

impl SessionListener for RecordingListener {
    fn on_unauthorized(&self, route: &str) {
        self.events
            .lock()
            .push(SessionEvent::Unauthorized(route.to_owned()));
    }

    fn on_token_changed(&self, authenticated: bool) {
        self.events
            .lock()
            .push(SessionEvent::TokenChanged(authenticated));
    }
}

/// Everything a test needs to drive the client against a mock gateway
pub struct TestHarness {
    pub server: MockServer,
    pub client: InterviewClient,
    pub store: Arc<InMemoryTokenStore>,
    pub listener: Arc<RecordingListener>,
}

impl TestHarness {
    pub async fn start() -> Self {
        Self::start_with(|config| config).await
    }

    pub async fn start_with(customize: impl FnOnce(ClientConfig) -> ClientConfig) -> Self {
        init_tracing();
        let server = MockServer::start_async().await;
        let config = customize(ClientConfig::new(server.base_url()));

        let store = Arc::new(InMemoryTokenStore::new());
        let listener = Arc::new(RecordingListener::default());
        let gateway = GatewayClient::builder(config)
            .token_store(store.clone())
            .session_listener(listener.clone())
            .build()
            .expect("gateway client should build");

        Self {
            server,
            client: InterviewClient::from_gateway(gateway),
            store,
            listener,
        }
    }

    pub fn gateway(&self) -> &GatewayClient {
        self.client.gateway()
    }
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("interview_client=debug")
        .with_test_writer()
        .try_init();
}
