//! The API client shared by every resource method.

// crates.io
use serde::de::{DeserializeOwned, IgnoredAny};
// self
use crate::{
	_prelude::*,
	http::HttpTransport,
	oauth::AccessToken,
	obs::{CallSpan, Resource},
	request::{ApiEndpoint, ApiRequest},
	resources::common::require_non_empty,
	service::{ServiceHandler, ServiceResponse},
};
#[cfg(feature = "reqwest")] use crate::http::ReqwestTransport;

#[cfg(feature = "reqwest")]
/// Client specialized for the crate's default reqwest transport.
pub type ReqwestApiClient = Client<ReqwestTransport>;

/// Authenticated client for one tenant.
///
/// Resource methods live in [`crate::resources`]; each validates its arguments, composes a
/// request, and hands it to a [`ServiceHandler`] over the shared transport. The client holds no
/// per-call state, so clones (or a shared reference) can issue calls concurrently.
pub struct Client<C>
where
	C: ?Sized + HttpTransport,
{
	/// Transport used for every outbound provider request.
	pub transport: Arc<C>,
	/// Tenant endpoint every URL is composed against.
	pub endpoint: ApiEndpoint,
	access_token: AccessToken,
}
impl<C> Client<C>
where
	C: ?Sized + HttpTransport,
{
	/// Creates a client that reuses the caller-provided transport.
	pub fn with_transport(
		endpoint: ApiEndpoint,
		access_token: impl Into<AccessToken>,
		transport: impl Into<Arc<C>>,
	) -> Self {
		Self { transport: transport.into(), endpoint, access_token: access_token.into() }
	}

	/// Returns the bearer token attached to every request.
	pub fn access_token(&self) -> &AccessToken {
		&self.access_token
	}

	/// Returns a handler decoding `T` over this client's transport.
	pub fn handler<T>(&self) -> ServiceHandler<T, C> {
		ServiceHandler::new(Arc::clone(&self.transport))
	}

	/// Sends `request` with the bearer token and decodes the response as `T`.
	pub(crate) async fn call<T>(
		&self,
		resource: Resource,
		operation: &'static str,
		request: ApiRequest,
	) -> Result<ServiceResponse<T>>
	where
		T: Default + DeserializeOwned,
	{
		CallSpan::new(resource, operation)
			.record(async move {
				let request = request.into_http(Some(&self.access_token))?;

				self.handler::<T>().send_request(request).await
			})
			.await
	}

	/// Sends a mutation whose success body, if any, carries nothing the caller needs.
	///
	/// Any 2xx body is accepted and discarded, whether empty or a JSON acknowledgement.
	pub(crate) async fn call_ack(
		&self,
		resource: Resource,
		operation: &'static str,
		request: ApiRequest,
	) -> Result<()> {
		self.call::<IgnoredAny>(resource, operation, request).await?;

		Ok(())
	}

	/// Sends `request` with the bearer token and returns the raw response body.
	pub(crate) async fn call_bytes(
		&self,
		resource: Resource,
		operation: &'static str,
		request: ApiRequest,
	) -> Result<ServiceResponse<Vec<u8>>> {
		CallSpan::new(resource, operation)
			.record(async move {
				let request = request.into_http(Some(&self.access_token))?;

				self.handler::<Vec<u8>>().send_bytes_request(request).await
			})
			.await
	}
}
#[cfg(feature = "reqwest")]
impl Client<ReqwestTransport> {
	/// Creates a client for `domain` backed by its own reqwest transport.
	pub fn new(domain: &str, access_token: impl Into<AccessToken>) -> Result<Self> {
		require_non_empty("domain", domain)?;

		let access_token = access_token.into();

		require_non_empty("access_token", access_token.expose())?;

		Ok(Self::with_transport(ApiEndpoint::for_domain(domain)?, access_token, ReqwestTransport::new()?))
	}
}
impl<C> Clone for Client<C>
where
	C: ?Sized + HttpTransport,
{
	fn clone(&self) -> Self {
		Self {
			transport: Arc::clone(&self.transport),
			endpoint: self.endpoint.clone(),
			access_token: self.access_token.clone(),
		}
	}
}
impl<C> Debug for Client<C>
where
	C: ?Sized + HttpTransport,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Client")
			.field("endpoint", &self.endpoint)
			.field("access_token", &self.access_token)
			.finish()
	}
}
