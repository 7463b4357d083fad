//! Search result records.

// self
use crate::_prelude::*;

/// One search hit.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
	/// Entry name.
	pub name: String,
	/// Full path.
	pub path: String,
	/// MIME type, as reported by the provider.
	#[serde(default, rename = "type")]
	pub content_type: Option<String>,
	/// Size in bytes.
	#[serde(default)]
	pub size: u64,
	/// Text around the match.
	#[serde(default)]
	pub snippet: Option<String>,
	/// Id of the matching version.
	#[serde(default)]
	pub entry_id: Option<String>,
	/// Id shared by every version of the file.
	#[serde(default)]
	pub group_id: Option<String>,
	/// Last modification time, as formatted by the provider.
	#[serde(default)]
	pub last_modified: Option<String>,
	/// Uploader display name.
	#[serde(default)]
	pub uploaded_by: Option<String>,
	/// Uploader login name.
	#[serde(default)]
	pub uploaded_by_username: Option<String>,
	/// Number of stored versions.
	#[serde(default)]
	pub num_versions: Option<u32>,
	/// Whether the hit is a folder.
	#[serde(default)]
	pub is_folder: bool,
}

/// One page of search hits.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResults {
	/// Hits on this page.
	#[serde(default)]
	pub results: Vec<SearchHit>,
	/// Total hits.
	#[serde(default)]
	pub total_count: u64,
	/// Offset of the first hit.
	#[serde(default)]
	pub offset: u64,
	/// Hits on this page.
	#[serde(default)]
	pub count: u64,
	/// Whether another page exists.
	#[serde(default, rename = "hasMore")]
	pub has_more: bool,
}
