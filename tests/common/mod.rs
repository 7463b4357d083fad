// std
use std::sync::{
	Arc, Mutex,
	atomic::{AtomicUsize, Ordering},
};
// self
use pubapi_sdk::{
	Client,
	http::{HttpRequest, HttpResponse, HttpTransport, TransportFuture},
	request::ApiEndpoint,
};

/// What the transport saw of one outbound request.
#[derive(Clone, Debug)]
pub struct SentRequest {
	pub method: String,
	pub uri: String,
	pub authorization: Option<String>,
	pub content_type: Option<String>,
	pub body: Vec<u8>,
}
impl SentRequest {
	pub fn json(&self) -> serde_json::Value {
		serde_json::from_slice(&self.body).expect("Request body should be JSON.")
	}
}

/// Transport that records every request and answers with one canned response.
pub struct RecordingTransport {
	status: u16,
	body: Vec<u8>,
	sent: Mutex<Vec<SentRequest>>,
	calls: AtomicUsize,
}
impl RecordingTransport {
	pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
		Self { status, body: body.into(), sent: Mutex::new(Vec::new()), calls: AtomicUsize::new(0) }
	}

	pub fn calls(&self) -> usize {
		self.calls.load(Ordering::SeqCst)
	}

	pub fn last_request(&self) -> SentRequest {
		self.sent
			.lock()
			.expect("Request log should not be poisoned.")
			.last()
			.cloned()
			.expect("At least one request should have been sent.")
	}
}
impl HttpTransport for RecordingTransport {
	type TransportError = std::io::Error;

	fn execute(&self, request: HttpRequest) -> TransportFuture<'_, Self::TransportError> {
		let header = |name: &str| {
			request.headers().get(name).and_then(|value| value.to_str().ok()).map(str::to_owned)
		};
		let sent = SentRequest {
			method: request.method().to_string(),
			uri: request.uri().to_string(),
			authorization: header("authorization"),
			content_type: header("content-type"),
			body: request.body().clone(),
		};

		self.calls.fetch_add(1, Ordering::SeqCst);
		self.sent.lock().expect("Request log should not be poisoned.").push(sent);

		Box::pin(async move {
			let mut response = HttpResponse::new(self.body.clone());

			*response.status_mut() = self.status.try_into().expect("Canned status should be valid.");

			Ok(response)
		})
	}
}

/// Client for the `acme` tenant over a fresh recording transport.
pub fn recording_client(
	status: u16,
	body: &str,
) -> (Client<RecordingTransport>, Arc<RecordingTransport>) {
	let transport = Arc::new(RecordingTransport::new(status, body));
	let endpoint = ApiEndpoint::for_domain("acme").expect("Endpoint should build.");

	(Client::with_transport(endpoint, "token-it", Arc::clone(&transport)), transport)
}

/// Transport whose every call fails with a connection error.
pub struct FailingTransport;
impl HttpTransport for FailingTransport {
	type TransportError = std::io::Error;

	fn execute(&self, _request: HttpRequest) -> TransportFuture<'_, Self::TransportError> {
		Box::pin(async {
			Err(std::io::Error::new(std::io::ErrorKind::ConnectionReset, "connection reset by peer"))
		})
	}
}
