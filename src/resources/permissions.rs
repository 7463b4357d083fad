//! Folder permission endpoints under `/pubapi/v1/perms/folder`.

// self
use crate::{
	_prelude::*,
	client::Client,
	http::HttpTransport,
	model::{FolderPermissions, PermissionLevel, SetFolderPermissions},
	obs::Resource,
	request::{ApiRequest, ApiVersion, QueryParams},
	resources::common::{require_all_non_empty, require_any, require_path},
};

const PERMISSIONS_RESOURCE: &str = "perms/folder";

impl<C> Client<C>
where
	C: ?Sized + HttpTransport,
{
	/// Grants `permission` on the folder at `path` to the given users and groups.
	///
	/// At least one user or group is required. The folder path is sent as-is apart from `#`
	/// escaping, so names with spaces or other reserved characters are accepted.
	pub async fn set_folder_permissions(
		&self,
		path: &str,
		users: &[String],
		groups: &[String],
		permission: PermissionLevel,
	) -> Result<()> {
		require_path("path", path)?;
		require_any("users, groups", &[!users.is_empty(), !groups.is_empty()])?;
		require_all_non_empty("users", users)?;
		require_all_non_empty("groups", groups)?;

		let body =
			SetFolderPermissions { users: users.to_vec(), groups: groups.to_vec(), permission };
		let url = self.endpoint.url(ApiVersion::V1, PERMISSIONS_RESOURCE, path, &QueryParams::new())?;
		let request = ApiRequest::post(url).json(&body)?;

		self.call_ack(Resource::Permissions, "set_folder_permissions", request).await
	}

	/// Reads the explicit permissions on the folder at `path`.
	///
	/// Non-empty `users` or `groups` narrow the answer to those subjects.
	pub async fn get_folder_permissions(
		&self,
		path: &str,
		users: &[String],
		groups: &[String],
	) -> Result<FolderPermissions> {
		require_path("path", path)?;
		require_all_non_empty("users", users)?;
		require_all_non_empty("groups", groups)?;

		let query = QueryParams::new()
			.with("users", subject_filter(users))
			.with("groups", subject_filter(groups));
		let url = self.endpoint.url(ApiVersion::V1, PERMISSIONS_RESOURCE, path, &query)?;

		Ok(self
			.call(Resource::Permissions, "get_folder_permissions", ApiRequest::get(url))
			.await?
			.data)
	}
}

fn subject_filter(subjects: &[String]) -> Option<String> {
	(!subjects.is_empty()).then(|| subjects.join("|"))
}
