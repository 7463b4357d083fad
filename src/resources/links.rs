//! Shared link endpoints under `/pubapi/v1/links`.

// self
use crate::{
	_prelude::*,
	client::Client,
	error::ArgumentError,
	http::HttpTransport,
	model::{CreatedLinks, LinkAccessibility, LinkDetails, LinkList, LinkType, NewLink},
	obs::Resource,
	request::{ApiRequest, ApiVersion, QueryParams},
	resources::common::{require_all_non_empty, require_in_range, require_non_empty, require_path},
};

const LINKS_RESOURCE: &str = "links";

/// Filters and paging for [`Client::list_links`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LinkListQuery {
	/// Only links to this path.
	pub path: Option<String>,
	/// Only links created by this user.
	pub username: Option<String>,
	/// Only links created before this instant.
	pub created_before: Option<OffsetDateTime>,
	/// Only links created after this instant.
	pub created_after: Option<OffsetDateTime>,
	/// Only file or only folder links.
	pub link_type: Option<LinkType>,
	/// Only links with this accessibility.
	pub accessibility: Option<LinkAccessibility>,
	/// Index of the first id to return.
	pub offset: Option<u32>,
	/// Maximum number of ids to return.
	pub count: Option<u32>,
}
impl LinkListQuery {
	fn validate(&self) -> Result<(), ArgumentError> {
		if let Some(path) = &self.path {
			require_path("path", path)?;
		}
		if let Some(username) = &self.username {
			require_non_empty("username", username)?;
		}

		require_in_range("count", self.count, 1..=i64::from(u32::MAX))
	}

	fn to_query(&self) -> QueryParams {
		QueryParams::new()
			.with("path", self.path.as_deref())
			.with("username", self.username.as_deref())
			.with_date("created_before", self.created_before)
			.with_date("created_after", self.created_after)
			.with("type", self.link_type)
			.with("accessibility", self.accessibility)
			.with("offset", self.offset)
			.with("count", self.count)
	}
}

impl<C> Client<C>
where
	C: ?Sized + HttpTransport,
{
	/// Lists link ids matching `query`.
	pub async fn list_links(&self, query: &LinkListQuery) -> Result<LinkList> {
		query.validate()?;

		let url = self.endpoint.url(ApiVersion::V1, LINKS_RESOURCE, "", &query.to_query())?;

		Ok(self.call(Resource::Links, "list_links", ApiRequest::get(url)).await?.data)
	}

	/// Fetches one link.
	pub async fn get_link(&self, id: &str) -> Result<LinkDetails> {
		require_non_empty("id", id)?;

		let url = self.endpoint.url(ApiVersion::V1, LINKS_RESOURCE, id, &QueryParams::new())?;

		Ok(self.call(Resource::Links, "get_link", ApiRequest::get(url)).await?.data)
	}

	/// Creates a link; recipient links produce one link per recipient.
	pub async fn create_link(&self, link: &NewLink) -> Result<CreatedLinks> {
		validate_new_link(link)?;

		let url = self.endpoint.url(ApiVersion::V1, LINKS_RESOURCE, "", &QueryParams::new())?;
		let request = ApiRequest::post(url).json(link)?;

		Ok(self.call(Resource::Links, "create_link", request).await?.data)
	}

	/// Deletes a link.
	pub async fn delete_link(&self, id: &str) -> Result<()> {
		require_non_empty("id", id)?;

		let url = self.endpoint.url(ApiVersion::V1, LINKS_RESOURCE, id, &QueryParams::new())?;

		self.call_ack(Resource::Links, "delete_link", ApiRequest::delete(url)).await
	}
}

fn validate_new_link(link: &NewLink) -> Result<(), ArgumentError> {
	require_path("path", &link.path)?;
	require_all_non_empty("recipients", &link.recipients)?;

	let needs_recipients =
		link.accessibility == LinkAccessibility::Recipients || link.send_email == Some(true);

	if needs_recipients && link.recipients.is_empty() {
		return Err(ArgumentError::Empty { name: "recipients" });
	}

	require_in_range("expiry_clicks", link.expiry_clicks, 1..=10)?;

	if link.expiry_date.is_some() && link.expiry_clicks.is_some() {
		return Err(ArgumentError::Invalid {
			name: "expiry_clicks",
			reason: "a link expires by date or by clicks, not both".into(),
		});
	}
	if link.link_to_current.is_some() && link.link_type != LinkType::File {
		return Err(ArgumentError::Invalid {
			name: "link_to_current",
			reason: "only file links can follow the current version".into(),
		});
	}

	Ok(())
}
