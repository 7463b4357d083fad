// self
use crate::{
	_prelude::*,
	obs::{CallOutcome, Resource},
};

/// Counter incremented once per attempt and once per finished call.
pub const CALL_COUNTER: &str = "pubapi_call_total";

/// Records a call outcome via the global metrics recorder (when enabled).
pub fn record_call_outcome(resource: Resource, outcome: CallOutcome) {
	#[cfg(feature = "metrics")]
	metrics::counter!(CALL_COUNTER, "resource" => resource.as_str(), "outcome" => outcome.as_str())
		.increment(1);

	#[cfg(not(feature = "metrics"))]
	let _ = (resource, outcome);
}

/// Classifies a finished call, counts it, and returns the outcome that was recorded.
pub fn record_call_result<T>(resource: Resource, result: &Result<T>) -> CallOutcome {
	let outcome = CallOutcome::of(result);

	record_call_outcome(resource, outcome);

	outcome
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::error::UsageLimit;

	#[test]
	fn finished_calls_are_labelled_by_classification() {
		assert_eq!(record_call_result(Resource::Users, &Ok::<_, Error>(())), CallOutcome::Success);
		assert_eq!(
			record_call_result::<()>(
				Resource::Links,
				&Err(Error::RateLimitExceeded(UsageLimit::default()))
			),
			CallOutcome::RateLimited
		);
		assert_eq!(
			record_call_result::<()>(
				Resource::Search,
				&Err(Error::ServiceCall { status: 404, body: String::new() })
			),
			CallOutcome::Failure
		);
	}
}
