//! Group endpoints under `/pubapi/v2/groups`.

// self
use crate::{
	_prelude::*,
	client::Client,
	error::ArgumentError,
	http::HttpTransport,
	model::{Group, GroupList, NewGroup},
	obs::Resource,
	request::{ApiRequest, ApiVersion, QueryParams},
	resources::{
		common::{require_id, require_non_empty},
		users::{directory_page, directory_query},
	},
};

/// Paging and filtering for [`Client::list_groups`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GroupListQuery {
	/// 1-based index of the first group.
	pub start_index: Option<u32>,
	/// Page size (1 to 100).
	pub count: Option<u32>,
	/// SCIM filter expression, e.g. `displayName eq "Finance"`.
	pub filter: Option<String>,
}
impl GroupListQuery {
	/// Sets the 1-based start index.
	pub fn with_start_index(mut self, start_index: u32) -> Self {
		self.start_index = Some(start_index);

		self
	}

	/// Sets the page size.
	pub fn with_count(mut self, count: u32) -> Self {
		self.count = Some(count);

		self
	}

	/// Sets the SCIM filter expression.
	pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
		self.filter = Some(filter.into());

		self
	}
}

impl<C> Client<C>
where
	C: ?Sized + HttpTransport,
{
	/// Lists groups, one page at a time.
	pub async fn list_groups(&self, query: &GroupListQuery) -> Result<GroupList> {
		directory_page(query.start_index, query.count, query.filter.as_deref())?;

		let query = directory_query(query.start_index, query.count, query.filter.as_deref());
		let url = self.endpoint.url(ApiVersion::V2, "groups", "", &query)?;

		Ok(self.call(Resource::Groups, "list_groups", ApiRequest::get(url)).await?.data)
	}

	/// Fetches one group with its members.
	pub async fn get_group(&self, id: &str) -> Result<Group> {
		require_non_empty("id", id)?;

		let url = self.group_url(id)?;

		Ok(self.call(Resource::Groups, "get_group", ApiRequest::get(url)).await?.data)
	}

	/// Creates a group.
	pub async fn create_group(&self, group: &NewGroup) -> Result<Group> {
		validate_new_group(group)?;

		let url = self.endpoint.url(ApiVersion::V2, "groups", "", &QueryParams::new())?;
		let request = ApiRequest::post(url).json(group)?;

		Ok(self.call(Resource::Groups, "create_group", request).await?.data)
	}

	/// Replaces a group's name and member list.
	pub async fn update_group(&self, id: &str, group: &NewGroup) -> Result<Group> {
		require_non_empty("id", id)?;
		validate_new_group(group)?;

		let request = ApiRequest::patch(self.group_url(id)?).json(group)?;

		Ok(self.call(Resource::Groups, "update_group", request).await?.data)
	}

	/// Deletes a group.
	pub async fn delete_group(&self, id: &str) -> Result<()> {
		require_non_empty("id", id)?;

		let url = self.group_url(id)?;

		self.call_ack(Resource::Groups, "delete_group", ApiRequest::delete(url)).await
	}

	fn group_url(&self, id: &str) -> Result<Url> {
		self.endpoint.url(ApiVersion::V2, "groups", id, &QueryParams::new())
	}
}

fn validate_new_group(group: &NewGroup) -> Result<(), ArgumentError> {
	require_non_empty("display_name", &group.display_name)?;

	group.members.iter().try_for_each(|member| require_id("members", member.value))
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn new_group_needs_name_and_real_members() {
		assert!(validate_new_group(&NewGroup::new("Finance", [1, 2])).is_ok());
		assert_eq!(
			validate_new_group(&NewGroup::new(" ", [])),
			Err(ArgumentError::Empty { name: "display_name" })
		);
		assert!(matches!(
			validate_new_group(&NewGroup::new("Finance", [0])),
			Err(ArgumentError::OutOfRange { name: "members", value: 0, .. })
		));
	}
}
