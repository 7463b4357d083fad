//! Transport primitives for provider API calls.
//!
//! [`HttpTransport`] is the SDK's only dependency on an HTTP stack. The service handler hands
//! it a fully built [`HttpRequest`] and receives the raw [`HttpResponse`] back, whatever its
//! status code; classification happens above this layer. Downstream crates can plug in their
//! own client (or a test double) without touching the rest of the SDK.

pub use oauth2::{HttpRequest, HttpResponse, http::Method};

// std
#[cfg(feature = "reqwest")] use std::ops::Deref;
// self
use crate::_prelude::*;

/// Boxed future returned by [`HttpTransport::execute`].
pub type TransportFuture<'a, E> = Pin<Box<dyn Future<Output = Result<HttpResponse, E>> + 'a + Send>>;

/// Abstraction over HTTP transports capable of executing a single provider request.
///
/// Implementations must be `Send + Sync + 'static` so one instance can be shared (behind an
/// `Arc`) by every client and issue concurrent calls. The returned future must be `Send`.
///
/// # Contract
///
/// - Issue exactly one request per call; never retry.
/// - Resolve with `Ok` whenever a response was received, regardless of its status code, with
///   the full body buffered.
/// - Report network failures through [`HttpTransport::TransportError`]; the SDK propagates
///   them unchanged.
/// - Cancellation is the caller dropping the future.
pub trait HttpTransport
where
	Self: 'static + Send + Sync,
{
	/// Concrete error emitted by the underlying transport.
	type TransportError: 'static + Send + Sync + StdError;

	/// Sends `request` and resolves once the response body has been read.
	fn execute(&self, request: HttpRequest) -> TransportFuture<'_, Self::TransportError>;
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
///
/// API endpoints answer directly, so [`ReqwestTransport::new`] disables redirect following;
/// configure any custom [`ReqwestClient`] the same way.
#[cfg(feature = "reqwest")]
#[derive(Clone, Debug)]
pub struct ReqwestTransport(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestTransport {
	/// Builds the default transport (no redirects, rustls).
	pub fn new() -> Result<Self> {
		let client = ReqwestClient::builder()
			.redirect(reqwest::redirect::Policy::none())
			.build()
			.map_err(crate::error::ConfigError::from)?;

		Ok(Self(client))
	}

	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestTransport {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl Deref for ReqwestTransport {
	type Target = ReqwestClient;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl HttpTransport for ReqwestTransport {
	type TransportError = ReqwestError;

	fn execute(&self, request: HttpRequest) -> TransportFuture<'_, Self::TransportError> {
		Box::pin(async move {
			let response = self.0.execute(request.try_into()?).await?;
			let status = response.status();
			let headers = response.headers().to_owned();
			let mut response_new = HttpResponse::new(response.bytes().await?.to_vec());

			*response_new.status_mut() = status;
			*response_new.headers_mut() = headers;

			Ok(response_new)
		})
	}
}

#[cfg(all(test, feature = "reqwest"))]
mod tests {
	// self
	use super::*;

	#[test]
	fn default_transport_builds() {
		assert!(ReqwestTransport::new().is_ok());
	}
}
