// self
use crate::{
	_prelude::*,
	obs::{self, CallOutcome, Resource},
};

/// Type alias that resolves to an instrumented future when tracing is enabled.
#[cfg(feature = "tracing")]
pub type InstrumentedCall<F> = tracing::instrument::Instrumented<F>;
/// Passthrough future type when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub type InstrumentedCall<F> = F;

/// Span wrapping one resource call.
#[derive(Clone, Debug)]
pub struct CallSpan {
	resource: Resource,
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl CallSpan {
	/// Creates a new span tagged with the resource + operation.
	pub fn new(resource: Resource, operation: &'static str) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span =
				tracing::info_span!("pubapi.call", resource = resource.as_str(), operation);

			Self { resource, span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = operation;

			Self { resource }
		}
	}

	/// Instruments an async block without holding a guard across `.await` points.
	pub fn instrument<Fut>(&self, fut: Fut) -> InstrumentedCall<Fut>
	where
		Fut: Future,
	{
		#[cfg(feature = "tracing")]
		{
			use tracing::Instrument;

			fut.instrument(self.span.clone())
		}
		#[cfg(not(feature = "tracing"))]
		{
			fut
		}
	}

	/// Runs `fut` inside the span and records its attempt and outcome.
	pub async fn record<Fut, T>(&self, fut: Fut) -> Result<T>
	where
		Fut: Future<Output = Result<T>>,
	{
		obs::record_call_outcome(self.resource, CallOutcome::Attempt);

		let result = self.instrument(fut).await;

		obs::record_call_result(self.resource, &result);

		result
	}
}
