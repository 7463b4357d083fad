//! User endpoints: `/pubapi/v1/userinfo` and the SCIM-style `/pubapi/v2/users`.

// self
use crate::{
	_prelude::*,
	client::Client,
	error::ArgumentError,
	http::HttpTransport,
	model::{AuthType, NewUser, User, UserInfo, UserList, UserUpdate},
	obs::Resource,
	request::{ApiRequest, ApiVersion, QueryParams},
	resources::common::{require_id, require_in_range, require_non_empty},
};

/// Largest page the user and group listings accept.
pub const MAX_DIRECTORY_PAGE: i64 = 100;

/// Paging and filtering for [`Client::list_users`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserListQuery {
	/// 1-based index of the first user.
	pub start_index: Option<u32>,
	/// Page size (1 to 100).
	pub count: Option<u32>,
	/// SCIM filter expression, e.g. `email eq "jsmith@acme.com"`.
	pub filter: Option<String>,
}
impl UserListQuery {
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

	pub(crate) fn validate(&self) -> Result<(), ArgumentError> {
		directory_page(self.start_index, self.count, self.filter.as_deref())
	}

	pub(crate) fn to_query(&self) -> QueryParams {
		directory_query(self.start_index, self.count, self.filter.as_deref())
	}
}

pub(crate) fn directory_page(
	start_index: Option<u32>,
	count: Option<u32>,
	filter: Option<&str>,
) -> Result<(), ArgumentError> {
	require_in_range("start_index", start_index, 1..=i64::from(u32::MAX))?;
	require_in_range("count", count, 1..=MAX_DIRECTORY_PAGE)?;

	if let Some(filter) = filter {
		require_non_empty("filter", filter)?;
	}

	Ok(())
}

pub(crate) fn directory_query(
	start_index: Option<u32>,
	count: Option<u32>,
	filter: Option<&str>,
) -> QueryParams {
	QueryParams::new()
		.with("startIndex", start_index)
		.with("count", count)
		.with("filter", filter)
}

impl<C> Client<C>
where
	C: ?Sized + HttpTransport,
{
	/// Returns the identity behind the access token.
	pub async fn user_info(&self) -> Result<UserInfo> {
		let url = self.endpoint.url(ApiVersion::V1, "userinfo", "", &QueryParams::new())?;

		Ok(self.call(Resource::UserInfo, "user_info", ApiRequest::get(url)).await?.data)
	}

	/// Lists users, one page at a time.
	pub async fn list_users(&self, query: &UserListQuery) -> Result<UserList> {
		query.validate()?;

		let url = self.endpoint.url(ApiVersion::V2, "users", "", &query.to_query())?;

		Ok(self.call(Resource::Users, "list_users", ApiRequest::get(url)).await?.data)
	}

	/// Fetches one user.
	pub async fn get_user(&self, id: i64) -> Result<User> {
		require_id("id", id)?;

		let url = self.user_url(id)?;

		Ok(self.call(Resource::Users, "get_user", ApiRequest::get(url)).await?.data)
	}

	/// Creates a user.
	pub async fn create_user(&self, user: &NewUser) -> Result<User> {
		validate_new_user(user)?;

		let url = self.endpoint.url(ApiVersion::V2, "users", "", &QueryParams::new())?;
		let request = ApiRequest::post(url).json(user)?;

		Ok(self.call(Resource::Users, "create_user", request).await?.data)
	}

	/// Updates the fields present in `update`.
	pub async fn update_user(&self, id: i64, update: &UserUpdate) -> Result<User> {
		require_id("id", id)?;

		if update.is_empty() {
			return Err(ArgumentError::Empty { name: "update" }.into());
		}
		if let Some(email) = &update.email {
			require_non_empty("email", email)?;
		}

		let request = ApiRequest::patch(self.user_url(id)?).json(update)?;

		Ok(self.call(Resource::Users, "update_user", request).await?.data)
	}

	/// Deletes a user.
	pub async fn delete_user(&self, id: i64) -> Result<()> {
		require_id("id", id)?;

		let url = self.user_url(id)?;

		self.call_ack(Resource::Users, "delete_user", ApiRequest::delete(url)).await
	}

	fn user_url(&self, id: i64) -> Result<Url> {
		self.endpoint.url(ApiVersion::V2, "users", &id.to_string(), &QueryParams::new())
	}
}

fn validate_new_user(user: &NewUser) -> Result<(), ArgumentError> {
	require_non_empty("user_name", &user.user_name)?;
	require_non_empty("external_id", &user.external_id)?;
	require_non_empty("email", &user.email)?;
	require_non_empty("given_name", &user.name.given_name)?;
	require_non_empty("family_name", &user.name.family_name)?;

	match user.auth_type {
		AuthType::Sso => require_non_empty("idp_user_id", user.idp_user_id.as_deref().unwrap_or_default()),
		AuthType::Ad =>
			require_non_empty("user_principal_name", user.user_principal_name.as_deref().unwrap_or_default()),
		AuthType::Egnyte => Ok(()),
	}
}
