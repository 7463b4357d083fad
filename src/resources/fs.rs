//! File system endpoints: `/pubapi/v1/fs` for metadata and folder actions, and
//! `/pubapi/v1/fs-content` for file bytes.

// self
use crate::{
	_prelude::*,
	client::Client,
	error::ArgumentError,
	http::HttpTransport,
	model::{
		CreatedFolder, FolderListing, FsAction, ListingSortBy, SortDirection, TransferPermissions,
		UploadedFile,
	},
	obs::Resource,
	request::{ApiRequest, ApiVersion, OCTET_STREAM_CONTENT_TYPE, QueryParams},
	resources::common::{require_in_range, require_path},
};

const FS_RESOURCE: &str = "fs";
const FS_CONTENT_RESOURCE: &str = "fs-content";

/// Options for [`Client::list_folder`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FolderListQuery {
	/// Whether to include child files and folders (provider default: true).
	pub list_content: Option<bool>,
	/// Whether to include the link types allowed on the folder.
	pub allowed_link_types: Option<bool>,
	/// Maximum number of children to return.
	pub count: Option<u32>,
	/// Index of the first child to return.
	pub offset: Option<u32>,
	/// Sort key for children.
	pub sort_by: Option<ListingSortBy>,
	/// Sort direction; only sent together with [`sort_by`](Self::sort_by).
	pub sort_direction: Option<SortDirection>,
}
impl FolderListQuery {
	/// Pages through the children, `count` at a time starting at `offset`.
	pub fn with_page(mut self, offset: u32, count: u32) -> Self {
		self.offset = Some(offset);
		self.count = Some(count);

		self
	}

	/// Sorts the children.
	pub fn with_sort(mut self, sort_by: ListingSortBy, direction: SortDirection) -> Self {
		self.sort_by = Some(sort_by);
		self.sort_direction = Some(direction);

		self
	}

	fn validate(&self) -> Result<(), ArgumentError> {
		require_in_range("count", self.count, 1..=i64::from(u32::MAX))?;

		if self.sort_direction.is_some() && self.sort_by.is_none() {
			return Err(ArgumentError::Invalid {
				name: "sort_direction",
				reason: "a sort direction requires a sort key".into(),
			});
		}

		Ok(())
	}

	fn to_query(&self) -> QueryParams {
		QueryParams::new()
			.with("list_content", self.list_content)
			.with("allowed_link_types", self.allowed_link_types)
			.with("count", self.count)
			.with("offset", self.offset)
			.with("sort_by", self.sort_by)
			.with("sort_direction", self.sort_direction)
	}
}

impl<C> Client<C>
where
	C: ?Sized + HttpTransport,
{
	/// Lists the folder at `path`.
	pub async fn list_folder(&self, path: &str, query: &FolderListQuery) -> Result<FolderListing> {
		require_path("path", path)?;
		query.validate()?;

		let url = self.endpoint.url(ApiVersion::V1, FS_RESOURCE, path, &query.to_query())?;

		Ok(self.call(Resource::FileSystem, "list_folder", ApiRequest::get(url)).await?.data)
	}

	/// Creates the folder at `path`.
	///
	/// The provider may answer with an empty body, in which case every field of the returned
	/// record is absent.
	pub async fn create_folder(&self, path: &str) -> Result<CreatedFolder> {
		require_path("path", path)?;

		let request = ApiRequest::post(self.fs_url(path)?).json(&FsAction::AddFolder)?;

		Ok(self.call(Resource::FileSystem, "create_folder", request).await?.data)
	}

	/// Deletes the file or folder at `path`.
	pub async fn delete_path(&self, path: &str) -> Result<()> {
		require_path("path", path)?;

		let url = self.fs_url(path)?;

		self.call_ack(Resource::FileSystem, "delete_path", ApiRequest::delete(url)).await
	}

	/// Copies the file or folder at `path` to `destination`.
	pub async fn copy_path(
		&self,
		path: &str,
		destination: &str,
		permissions: Option<TransferPermissions>,
	) -> Result<()> {
		self.transfer(path, destination, "copy_path", FsAction::Copy { destination, permissions }).await
	}

	/// Moves the file or folder at `path` to `destination`.
	pub async fn move_path(
		&self,
		path: &str,
		destination: &str,
		permissions: Option<TransferPermissions>,
	) -> Result<()> {
		self.transfer(path, destination, "move_path", FsAction::Move { destination, permissions }).await
	}

	/// Downloads the current version of the file at `path`.
	pub async fn download_file(&self, path: &str) -> Result<Vec<u8>> {
		require_file_path(path)?;

		let url = self.endpoint.url(ApiVersion::V1, FS_CONTENT_RESOURCE, path, &QueryParams::new())?;

		Ok(self.call_bytes(Resource::FileSystem, "download_file", ApiRequest::get(url)).await?.data)
	}

	/// Uploads `content` as a new version of the file at `path`.
	pub async fn upload_file(&self, path: &str, content: Vec<u8>) -> Result<UploadedFile> {
		require_file_path(path)?;

		let url = self.endpoint.url(ApiVersion::V1, FS_CONTENT_RESOURCE, path, &QueryParams::new())?;
		let request = ApiRequest::post(url).bytes(content, OCTET_STREAM_CONTENT_TYPE);

		Ok(self.call(Resource::FileSystem, "upload_file", request).await?.data)
	}

	async fn transfer(
		&self,
		path: &str,
		destination: &str,
		operation: &'static str,
		action: FsAction<'_>,
	) -> Result<()> {
		require_path("path", path)?;
		require_path("destination", destination)?;

		let request = ApiRequest::post(self.fs_url(path)?).json(&action)?;

		self.call_ack(Resource::FileSystem, operation, request).await
	}

	fn fs_url(&self, path: &str) -> Result<Url> {
		self.endpoint.url(ApiVersion::V1, FS_RESOURCE, path, &QueryParams::new())
	}
}

fn require_file_path(path: &str) -> Result<(), ArgumentError> {
	require_path("path", path)?;

	if path.ends_with('/') {
		return Err(ArgumentError::Invalid { name: "path", reason: "expected a file path".into() });
	}

	Ok(())
}
