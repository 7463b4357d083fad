//! Folder permission records.

// self
use crate::_prelude::*;

/// Access level granted on a folder.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PermissionLevel {
	/// Removes any explicit permission.
	None,
	/// Read-only.
	Viewer,
	/// Read and write.
	Editor,
	/// Read, write, and delete.
	Full,
	/// Full control including permission management.
	Owner,
}
impl PermissionLevel {
	/// Returns the provider's label.
	pub const fn as_str(self) -> &'static str {
		match self {
			PermissionLevel::None => "None",
			PermissionLevel::Viewer => "Viewer",
			PermissionLevel::Editor => "Editor",
			PermissionLevel::Full => "Full",
			PermissionLevel::Owner => "Owner",
		}
	}
}
impl Display for PermissionLevel {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Payload for setting folder permissions; empty subject lists are omitted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetFolderPermissions {
	/// Usernames receiving `permission`.
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub users: Vec<String>,
	/// Group names receiving `permission`.
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub groups: Vec<String>,
	/// Level granted to every listed subject.
	pub permission: PermissionLevel,
}

/// Permission held by one user or group.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectPermission {
	/// Username or group name.
	pub subject: String,
	/// Granted level.
	pub permission: PermissionLevel,
}

/// Explicit permissions on a folder.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderPermissions {
	/// User grants.
	#[serde(default)]
	pub users: Vec<SubjectPermission>,
	/// Group grants.
	#[serde(default)]
	pub groups: Vec<SubjectPermission>,
}
