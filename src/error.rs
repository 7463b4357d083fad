//! SDK-level error types shared by the service handler, resource clients, and OAuth helpers.

// self
use crate::{_prelude::*, service::ResponseClass};

/// SDK-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical SDK error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Caller-supplied input was rejected before any network call.
	#[error(transparent)]
	Argument(#[from] ArgumentError),
	/// Local configuration problem (URL templates, request construction).
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Transport failure (DNS, TCP, TLS, timeout), propagated from the transport unchanged.
	#[error(transparent)]
	Transport(#[from] TransportError),

	/// Provider signaled short-window (queries-per-second) throttling.
	#[error("Provider QPS limit exceeded{}.", .0.retry_hint())]
	QpsLimitExceeded(UsageLimit),
	/// Provider signaled longer-window quota exhaustion.
	#[error("Provider rate limit exceeded{}.", .0.retry_hint())]
	RateLimitExceeded(UsageLimit),
	/// Any other non-success HTTP outcome.
	#[error("Service call failed with status {status}: {body}")]
	ServiceCall {
		/// HTTP status code returned by the provider.
		status: u16,
		/// Raw response body text.
		body: String,
	},
	/// Success status whose body could not be parsed into the expected payload.
	#[error("Response body with status {status} could not be decoded.")]
	Decode {
		/// HTTP status code returned by the provider.
		status: u16,
		/// Structured parsing failure.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
}
impl Error {
	/// Returns true for either of the provider throttling kinds.
	pub fn is_rate_limited(&self) -> bool {
		matches!(self, Self::QpsLimitExceeded(_) | Self::RateLimitExceeded(_))
	}

	/// Returns the throttling diagnostics, if this error carries any.
	pub fn usage_limit(&self) -> Option<&UsageLimit> {
		match self {
			Self::QpsLimitExceeded(limit) | Self::RateLimitExceeded(limit) => Some(limit),
			_ => None,
		}
	}

	/// Returns the response class behind this error, if it came from a provider response.
	///
	/// Decode failures arrive on a success status but are not a successful call, so they map
	/// to `None` along with local and transport faults.
	pub fn response_class(&self) -> Option<ResponseClass> {
		match self {
			Self::QpsLimitExceeded(_) => Some(ResponseClass::QpsLimitExceeded),
			Self::RateLimitExceeded(_) => Some(ResponseClass::RateLimitExceeded),
			Self::ServiceCall { .. } => Some(ResponseClass::Failed),
			Self::Argument(_) | Self::Config(_) | Self::Transport(_) | Self::Decode { .. } => None,
		}
	}

	/// Returns the provider's retry hint as a duration, if one was supplied and parses.
	pub fn retry_after(&self) -> Option<Duration> {
		self.usage_limit().and_then(UsageLimit::retry_after_duration)
	}
}

/// Diagnostics copied verbatim from the provider's throttling headers.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UsageLimit {
	/// Seconds until the caller may retry (`Retry-After`).
	pub retry_after: Option<String>,
	/// Current request count reported by the provider.
	pub current: Option<String>,
	/// Allotted quota reported by the provider.
	pub allotted: Option<String>,
}
impl UsageLimit {
	/// Parses [`retry_after`](Self::retry_after) as whole seconds.
	pub fn retry_after_duration(&self) -> Option<Duration> {
		let raw = self.retry_after.as_deref()?.trim();

		raw.parse::<u32>().ok().map(|secs| Duration::seconds(i64::from(secs)))
	}

	fn retry_hint(&self) -> String {
		match &self.retry_after {
			Some(value) => format!("; retry after {value} seconds"),
			None => String::new(),
		}
	}
}

/// Argument validation failures raised by resource methods before any network call.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum ArgumentError {
	/// A required value was missing or empty.
	#[error("Argument `{name}` cannot be empty.")]
	Empty {
		/// Argument name.
		name: &'static str,
	},
	/// A numeric value fell outside the accepted range.
	#[error("Argument `{name}` must be between {min} and {max}, got {value}.")]
	OutOfRange {
		/// Argument name.
		name: &'static str,
		/// Supplied value.
		value: i64,
		/// Inclusive lower bound.
		min: i64,
		/// Inclusive upper bound.
		max: i64,
	},
	/// None of a set of mutually-required arguments was supplied.
	#[error("At least one of {names} must be provided.")]
	MissingOneOf {
		/// Human-readable list of the argument names.
		names: &'static str,
	},
	/// A value was present but not acceptable.
	#[error("Argument `{name}` is invalid: {reason}.")]
	Invalid {
		/// Argument name.
		name: &'static str,
		/// Why the value was rejected.
		reason: String,
	},
}

/// Configuration and request construction failures.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// HTTP request construction failed.
	#[error(transparent)]
	HttpRequest(#[from] oauth2::http::Error),
	/// A composed or configured URL could not be parsed.
	#[error("URL `{url}` is invalid.")]
	InvalidUrl {
		/// The offending URL text.
		url: String,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// The endpoint template lacks the `{domain}` placeholder.
	#[error("Endpoint template `{template}` does not contain the {{domain}} placeholder.")]
	MissingDomainPlaceholder {
		/// The offending template.
		template: String,
	},
	/// The request body could not be serialized.
	#[error("Request body could not be serialized.")]
	RequestBody(#[source] serde_json::Error),
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}

	pub(crate) fn invalid_url(url: impl Into<String>, source: url::ParseError) -> Self {
		Self::InvalidUrl { url: url.into(), source }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::http_client_build(e)
	}
}

/// Transport-level failures (network, IO, cancellation reported by the transport).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a failure; the original error is kept as the source.
	#[error("Network error occurred while calling the provider.")]
	Network {
		/// Transport-specific error.
		#[source]
		source: BoxError,
	},
	/// Underlying IO failure surfaced during transport.
	#[error("I/O error occurred while calling the provider.")]
	Io(#[from] std::io::Error),
}
impl TransportError {
	/// Wraps a transport-specific error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}

	/// Attempts to view the original transport error as `E`.
	pub fn downcast_ref<E>(&self) -> Option<&E>
	where
		E: 'static + StdError,
	{
		match self {
			Self::Network { source } => source.downcast_ref::<E>(),
			Self::Io(_) => None,
		}
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		Self::network(e)
	}
}
