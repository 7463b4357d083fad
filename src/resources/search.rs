//! Full-text search under `/pubapi/v1/search`.

// self
use crate::{
	_prelude::*,
	client::Client,
	error::ArgumentError,
	http::HttpTransport,
	model::SearchResults,
	obs::Resource,
	request::{ApiRequest, ApiVersion, QueryParams},
	resources::common::{require_in_range, require_path},
};

/// Shortest query the provider accepts.
pub const MIN_SEARCH_QUERY_CHARS: usize = 3;
/// Largest page of search hits.
pub const MAX_SEARCH_PAGE: i64 = 100;

/// A search over file names and content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchQuery {
	/// Search text, at least three characters.
	pub query: String,
	/// Index of the first hit.
	pub offset: Option<u32>,
	/// Page size (1 to 100).
	pub count: Option<u32>,
	/// Restrict hits to this folder and its descendants.
	pub folder: Option<String>,
	/// Only files modified before this instant.
	pub modified_before: Option<OffsetDateTime>,
	/// Only files modified after this instant.
	pub modified_after: Option<OffsetDateTime>,
}
impl SearchQuery {
	/// Creates a query with no filters.
	pub fn new(query: impl Into<String>) -> Self {
		Self {
			query: query.into(),
			offset: None,
			count: None,
			folder: None,
			modified_before: None,
			modified_after: None,
		}
	}

	/// Pages through hits, `count` at a time starting at `offset`.
	pub fn with_page(mut self, offset: u32, count: u32) -> Self {
		self.offset = Some(offset);
		self.count = Some(count);

		self
	}

	/// Restricts hits to `folder`.
	pub fn in_folder(mut self, folder: impl Into<String>) -> Self {
		self.folder = Some(folder.into());

		self
	}

	/// Restricts hits to files modified within `[after, before]`; either bound may be open.
	pub fn modified_between(
		mut self,
		after: Option<OffsetDateTime>,
		before: Option<OffsetDateTime>,
	) -> Self {
		self.modified_after = after;
		self.modified_before = before;

		self
	}

	fn validate(&self) -> Result<(), ArgumentError> {
		if self.query.trim().chars().count() < MIN_SEARCH_QUERY_CHARS {
			return Err(ArgumentError::Invalid {
				name: "query",
				reason: format!("expected at least {MIN_SEARCH_QUERY_CHARS} characters"),
			});
		}

		require_in_range("count", self.count, 1..=MAX_SEARCH_PAGE)?;

		if let Some(folder) = &self.folder {
			require_path("folder", folder)?;
		}
		if matches!(
			(self.modified_after, self.modified_before),
			(Some(after), Some(before)) if after > before
		) {
			return Err(ArgumentError::Invalid {
				name: "modified_after",
				reason: "the range ends before it starts".into(),
			});
		}

		Ok(())
	}

	fn to_query(&self) -> QueryParams {
		QueryParams::new()
			.with("query", Some(self.query.as_str()))
			.with("offset", self.offset)
			.with("count", self.count)
			.with("folder", self.folder.as_deref())
			.with_date("modified_before", self.modified_before)
			.with_date("modified_after", self.modified_after)
	}
}

impl<C> Client<C>
where
	C: ?Sized + HttpTransport,
{
	/// Runs a search.
	pub async fn search(&self, query: &SearchQuery) -> Result<SearchResults> {
		query.validate()?;

		let url = self.endpoint.url(ApiVersion::V1, "search", "", &query.to_query())?;

		Ok(self.call(Resource::Search, "search", ApiRequest::get(url)).await?.data)
	}
}
