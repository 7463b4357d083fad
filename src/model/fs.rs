//! File system records: folder listings, file metadata, and content operations.

// self
use crate::_prelude::*;

/// File entry in a folder listing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSummary {
	/// File name.
	pub name: String,
	/// Full path.
	pub path: String,
	/// SHA-512 checksum of the current version.
	#[serde(default)]
	pub checksum: Option<String>,
	/// Size in bytes.
	#[serde(default)]
	pub size: u64,
	/// Whether the file is locked.
	#[serde(default)]
	pub locked: bool,
	/// Always false for files.
	#[serde(default)]
	pub is_folder: bool,
	/// Id of the current version.
	#[serde(default)]
	pub entry_id: Option<String>,
	/// Id shared by every version of the file.
	#[serde(default)]
	pub group_id: Option<String>,
	/// Last modification time, as formatted by the provider.
	#[serde(default)]
	pub last_modified: Option<String>,
	/// Username of the last uploader.
	#[serde(default)]
	pub uploaded_by: Option<String>,
	/// Number of stored versions.
	#[serde(default)]
	pub num_versions: Option<u32>,
}

/// Sub-folder entry in a folder listing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderSummary {
	/// Folder name.
	pub name: String,
	/// Full path.
	pub path: String,
	/// Folder id.
	#[serde(default)]
	pub folder_id: Option<String>,
	/// Always true for folders.
	#[serde(default)]
	pub is_folder: bool,
	/// Last modification time in epoch milliseconds.
	#[serde(default, rename = "lastModified")]
	pub last_modified: Option<i64>,
}

/// Folder metadata with (optionally) its direct children.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderListing {
	/// Folder name.
	pub name: String,
	/// Full path.
	pub path: String,
	/// Folder id.
	#[serde(default)]
	pub folder_id: Option<String>,
	/// Always true for folders.
	#[serde(default)]
	pub is_folder: bool,
	/// Last modification time in epoch milliseconds.
	#[serde(default, rename = "lastModified")]
	pub last_modified: Option<i64>,
	/// Total number of children.
	#[serde(default)]
	pub total_count: Option<u64>,
	/// Offset of the first returned child.
	#[serde(default)]
	pub offset: Option<u64>,
	/// Number of returned children.
	#[serde(default)]
	pub count: Option<u64>,
	/// Link types allowed on files in this folder.
	#[serde(default)]
	pub allowed_file_link_types: Vec<String>,
	/// Link types allowed on this folder.
	#[serde(default)]
	pub allowed_folder_link_types: Vec<String>,
	/// Sub-folders.
	#[serde(default)]
	pub folders: Vec<FolderSummary>,
	/// Files.
	#[serde(default)]
	pub files: Vec<FileSummary>,
}

/// Result of creating a folder.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedFolder {
	/// Path of the new folder.
	#[serde(default)]
	pub path: Option<String>,
	/// Id of the new folder.
	#[serde(default)]
	pub folder_id: Option<String>,
}

/// Result of uploading file content.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedFile {
	/// SHA-512 checksum computed by the provider.
	pub checksum: String,
	/// Id shared by every version of the file.
	pub group_id: String,
	/// Id of the uploaded version.
	pub entry_id: String,
}

/// Permission handling when copying or moving.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransferPermissions {
	/// Keep the source's explicit permissions.
	KeepOriginal,
	/// Inherit from the destination's parent.
	InheritFromParent,
}

/// Sort key for folder listings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListingSortBy {
	/// By name.
	Name,
	/// By last modification time.
	LastModified,
	/// By uploader.
	UploadedBy,
	/// By size.
	Size,
}
impl Display for ListingSortBy {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(match self {
			ListingSortBy::Name => "name",
			ListingSortBy::LastModified => "last_modified",
			ListingSortBy::UploadedBy => "uploaded_by",
			ListingSortBy::Size => "size",
		})
	}
}

/// Sort direction for folder listings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortDirection {
	/// Ascending.
	#[default]
	Ascending,
	/// Descending.
	Descending,
}
impl Display for SortDirection {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(match self {
			SortDirection::Ascending => "ascending",
			SortDirection::Descending => "descending",
		})
	}
}

#[derive(Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub(crate) enum FsAction<'a> {
	AddFolder,
	Copy {
		destination: &'a str,
		#[serde(skip_serializing_if = "Option::is_none")]
		permissions: Option<TransferPermissions>,
	},
	Move {
		destination: &'a str,
		#[serde(skip_serializing_if = "Option::is_none")]
		permissions: Option<TransferPermissions>,
	},
}
