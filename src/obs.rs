//! Optional observability helpers for provider calls.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to wrap every call in a span named `pubapi.call` with the `resource` and
//!   `operation` fields, and to log throttling classifications.
//! - Enable `metrics` to increment the `pubapi_call_total` counter for every
//!   attempt/success/failure, labeled by `resource` + `outcome`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::{_prelude::*, service::ResponseClass};

/// Provider resource families observed by the SDK.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Resource {
	/// `/userinfo`.
	UserInfo,
	/// SCIM users.
	Users,
	/// SCIM groups.
	Groups,
	/// Folder permissions.
	Permissions,
	/// File system metadata and content.
	FileSystem,
	/// Shared links.
	Links,
	/// Search.
	Search,
	/// OAuth token exchanges.
	OAuth,
}
impl Resource {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			Resource::UserInfo => "userinfo",
			Resource::Users => "users",
			Resource::Groups => "groups",
			Resource::Permissions => "permissions",
			Resource::FileSystem => "fs",
			Resource::Links => "links",
			Resource::Search => "search",
			Resource::OAuth => "oauth",
		}
	}
}
impl Display for Resource {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CallOutcome {
	/// Entry to a resource method.
	Attempt,
	/// Successful completion.
	Success,
	/// Provider QPS throttling.
	QpsLimited,
	/// Provider quota throttling.
	RateLimited,
	/// Any other failure propagated back to the caller.
	Failure,
}
impl CallOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			CallOutcome::Attempt => "attempt",
			CallOutcome::Success => "success",
			CallOutcome::QpsLimited => "qps_limited",
			CallOutcome::RateLimited => "rate_limited",
			CallOutcome::Failure => "failure",
		}
	}

	/// Maps a finished call onto its outcome label through the response classification.
	pub fn of<T>(result: &Result<T>) -> Self {
		match result {
			Ok(_) => CallOutcome::Success,
			Err(e) => e.response_class().map_or(CallOutcome::Failure, CallOutcome::from),
		}
	}
}
impl From<ResponseClass> for CallOutcome {
	fn from(class: ResponseClass) -> Self {
		match class {
			ResponseClass::Success => CallOutcome::Success,
			ResponseClass::QpsLimitExceeded => CallOutcome::QpsLimited,
			ResponseClass::RateLimitExceeded => CallOutcome::RateLimited,
			ResponseClass::Failed => CallOutcome::Failure,
		}
	}
}
impl Display for CallOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::error::{ArgumentError, UsageLimit};

	#[test]
	fn outcome_tracks_throttling_kinds() {
		assert_eq!(CallOutcome::of(&Ok::<_, Error>(())), CallOutcome::Success);
		assert_eq!(
			CallOutcome::of::<()>(&Err(Error::QpsLimitExceeded(UsageLimit::default()))),
			CallOutcome::QpsLimited
		);
		assert_eq!(
			CallOutcome::of::<()>(&Err(Error::RateLimitExceeded(UsageLimit::default()))),
			CallOutcome::RateLimited
		);
		assert_eq!(
			CallOutcome::of::<()>(&Err(Error::ServiceCall { status: 500, body: String::new() })),
			CallOutcome::Failure
		);
		assert_eq!(
			CallOutcome::of::<()>(&Err(ArgumentError::Empty { name: "id" }.into())),
			CallOutcome::Failure
		);
	}

	#[test]
	fn every_response_class_has_a_label() {
		let labels = [
			ResponseClass::Success,
			ResponseClass::QpsLimitExceeded,
			ResponseClass::RateLimitExceeded,
			ResponseClass::Failed,
		]
		.map(|class| CallOutcome::from(class).as_str());

		assert_eq!(labels, ["success", "qps_limited", "rate_limited", "failure"]);
	}
}
