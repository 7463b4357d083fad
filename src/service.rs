//! The service handler: the single chokepoint between resource methods and the transport.
//!
//! A call moves `Idle → Sent → {Succeeded | QpsExceeded | RateExceeded | Failed}` and never
//! back. [`ResponseClass::classify`] decides the terminal state from the HTTP status and the
//! provider's error-code header; [`ServiceHandler::send_request`] then either decodes the body
//! into `T` or builds the matching [`Error`]. Transport faults are passed through untouched and
//! nothing is retried here; callers decide using [`UsageLimit::retry_after`].

// crates.io
use oauth2::http::{HeaderMap, StatusCode};
use serde::de::DeserializeOwned;
// self
use crate::{
	_prelude::*,
	error::{TransportError, UsageLimit},
	http::{HttpRequest, HttpTransport},
};

/// `Retry-After`, shared by both throttling kinds.
pub const RETRY_AFTER_HEADER: &str = "retry-after";
/// Provider header carrying the throttling error code.
pub const ERROR_CODE_HEADER: &str = "x-mashery-error-code";
/// Error code sent when the short-window QPS limit was hit.
pub const OVER_QPS_ERROR_CODE: &str = "ERR_403_DEVELOPER_OVER_QPS";
/// Error code sent when the longer-window quota was exhausted.
pub const OVER_RATE_ERROR_CODE: &str = "ERR_403_DEVELOPER_OVER_RATE";
/// Current request count for the QPS window.
pub const QPS_CURRENT_HEADER: &str = "x-qps-current";
/// Allotted requests for the QPS window.
pub const QPS_ALLOTTED_HEADER: &str = "x-qps-allotted";
/// Current usage for the quota window.
pub const QUOTA_CURRENT_HEADER: &str = "x-quota-current";
/// Allotted usage for the quota window.
pub const QUOTA_ALLOTTED_HEADER: &str = "x-quota-allotted";

/// Successfully decoded payload plus every response header.
#[derive(Clone, Debug)]
pub struct ServiceResponse<T> {
	/// Decoded response body.
	pub data: T,
	/// Response headers, case-insensitive and repeatable.
	pub headers: HeaderMap,
}
impl<T> ServiceResponse<T> {
	/// Returns the decoded payload, dropping the headers.
	pub fn into_data(self) -> T {
		self.data
	}

	/// Returns the first value of `name` as text, if present and valid UTF-8.
	pub fn header(&self, name: &str) -> Option<&str> {
		self.headers.get(name).and_then(|value| value.to_str().ok())
	}
}

/// Terminal classification of a received response.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResponseClass {
	/// 2xx status.
	Success,
	/// 403 with [`OVER_QPS_ERROR_CODE`].
	QpsLimitExceeded,
	/// 403 with [`OVER_RATE_ERROR_CODE`].
	RateLimitExceeded,
	/// Any other status.
	Failed,
}
impl ResponseClass {
	/// Classifies a status code and the (optional) provider error-code header value.
	pub fn classify(status: StatusCode, error_code: Option<&str>) -> Self {
		match (status, error_code) {
			(status, _) if status.is_success() => Self::Success,
			(StatusCode::FORBIDDEN, Some(OVER_QPS_ERROR_CODE)) => Self::QpsLimitExceeded,
			(StatusCode::FORBIDDEN, Some(OVER_RATE_ERROR_CODE)) => Self::RateLimitExceeded,
			_ => Self::Failed,
		}
	}

	/// Classifies a response from its status and headers.
	pub fn of(status: StatusCode, headers: &HeaderMap) -> Self {
		Self::classify(status, header_text(headers, ERROR_CODE_HEADER).as_deref())
	}
}

/// Sends requests over a shared transport and returns typed `T` payloads.
///
/// The handler holds nothing but the transport handle, so one instance can serve any number
/// of concurrent calls.
pub struct ServiceHandler<T, C>
where
	C: ?Sized + HttpTransport,
{
	transport: Arc<C>,
	_payload: PhantomData<fn() -> T>,
}
impl<T, C> ServiceHandler<T, C>
where
	C: ?Sized + HttpTransport,
{
	/// Creates a handler over `transport`.
	pub fn new(transport: impl Into<Arc<C>>) -> Self {
		Self { transport: transport.into(), _payload: PhantomData }
	}

	/// Issues exactly one call and classifies the outcome, returning the raw body on success.
	pub async fn send_bytes_request(&self, request: HttpRequest) -> Result<ServiceResponse<Vec<u8>>> {
		let (_, headers, body) = self.exchange(request).await?;

		Ok(ServiceResponse { data: body, headers })
	}

	async fn exchange(&self, request: HttpRequest) -> Result<(StatusCode, HeaderMap, Vec<u8>)> {
		let response = self.transport.execute(request).await.map_err(TransportError::network)?;
		let (parts, body) = response.into_parts();

		match ResponseClass::of(parts.status, &parts.headers) {
			ResponseClass::Success => Ok((parts.status, parts.headers, body)),
			ResponseClass::QpsLimitExceeded => {
				let limit = usage_limit(&parts.headers, QPS_CURRENT_HEADER, QPS_ALLOTTED_HEADER);

				#[cfg(feature = "tracing")]
				tracing::warn!(
					retry_after = ?limit.retry_after,
					current = ?limit.current,
					allotted = ?limit.allotted,
					"provider QPS limit exceeded"
				);

				Err(Error::QpsLimitExceeded(limit))
			},
			ResponseClass::RateLimitExceeded => {
				let limit = usage_limit(&parts.headers, QUOTA_CURRENT_HEADER, QUOTA_ALLOTTED_HEADER);

				#[cfg(feature = "tracing")]
				tracing::warn!(
					retry_after = ?limit.retry_after,
					current = ?limit.current,
					allotted = ?limit.allotted,
					"provider rate limit exceeded"
				);

				Err(Error::RateLimitExceeded(limit))
			},
			ResponseClass::Failed => {
				let body = String::from_utf8_lossy(&body).into_owned();

				#[cfg(feature = "tracing")]
				tracing::debug!(status = parts.status.as_u16(), "service call failed");

				Err(Error::ServiceCall { status: parts.status.as_u16(), body })
			},
		}
	}
}
impl<T, C> ServiceHandler<T, C>
where
	T: Default + DeserializeOwned,
	C: ?Sized + HttpTransport,
{
	/// Issues exactly one call, classifies the outcome, and decodes a success body as `T`.
	///
	/// An empty (or whitespace-only) success body yields `T::default()`; a non-empty body that
	/// does not parse fails with [`Error::Decode`].
	pub async fn send_request(&self, request: HttpRequest) -> Result<ServiceResponse<T>> {
		let (status, headers, body) = self.exchange(request).await?;
		let data = decode::<T>(status, &body)?;

		Ok(ServiceResponse { data, headers })
	}
}
impl<T, C> Clone for ServiceHandler<T, C>
where
	C: ?Sized + HttpTransport,
{
	fn clone(&self) -> Self {
		Self { transport: Arc::clone(&self.transport), _payload: PhantomData }
	}
}
impl<T, C> Debug for ServiceHandler<T, C>
where
	C: ?Sized + HttpTransport,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("ServiceHandler(..)")
	}
}

fn decode<T>(status: StatusCode, body: &[u8]) -> Result<T>
where
	T: Default + DeserializeOwned,
{
	if body.iter().all(u8::is_ascii_whitespace) {
		return Ok(T::default());
	}

	let mut deserializer = serde_json::Deserializer::from_slice(body);

	serde_path_to_error::deserialize(&mut deserializer)
		.map_err(|source| Error::Decode { status: status.as_u16(), source })
}

fn usage_limit(headers: &HeaderMap, current: &str, allotted: &str) -> UsageLimit {
	UsageLimit {
		retry_after: header_text(headers, RETRY_AFTER_HEADER),
		current: header_text(headers, current),
		allotted: header_text(headers, allotted),
	}
}

fn header_text(headers: &HeaderMap, name: &str) -> Option<String> {
	headers.get(name).and_then(|value| value.to_str().ok()).map(|value| value.trim().to_owned())
}
