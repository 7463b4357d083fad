//! Shared link records.

// self
use crate::_prelude::*;

time::serde::format_description!(link_expiry_date, Date, "[year]-[month]-[day]");

/// Whether a link points at a file or a folder.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkType {
	/// File link.
	#[default]
	File,
	/// Folder link.
	Folder,
}
impl Display for LinkType {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(match self {
			LinkType::File => "file",
			LinkType::Folder => "folder",
		})
	}
}

/// Who can open a link.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkAccessibility {
	/// Anyone holding the URL.
	#[default]
	Anyone,
	/// Anyone holding the URL and the generated password.
	Password,
	/// Any authenticated user of the tenant.
	Domain,
	/// Only the listed recipients.
	Recipients,
}
impl Display for LinkAccessibility {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(match self {
			LinkAccessibility::Anyone => "anyone",
			LinkAccessibility::Password => "password",
			LinkAccessibility::Domain => "domain",
			LinkAccessibility::Recipients => "recipients",
		})
	}
}

/// Payload for creating a link.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewLink {
	/// Path of the file or folder.
	pub path: String,
	/// File or folder link.
	#[serde(rename = "type")]
	pub link_type: LinkType,
	/// Who can open the link.
	pub accessibility: LinkAccessibility,
	/// Email the link to `recipients`.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub send_email: Option<bool>,
	/// Recipient email addresses.
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub recipients: Vec<String>,
	/// Message included in the email.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub message: Option<String>,
	/// Copy the creator on the email.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub copy_me: Option<bool>,
	/// Notify the creator when the link is opened.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub notify: Option<bool>,
	/// File links only: always serve the current version.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub link_to_current: Option<bool>,
	/// Last day the link works.
	#[serde(with = "link_expiry_date::option", skip_serializing_if = "Option::is_none")]
	pub expiry_date: Option<time::Date>,
	/// Number of opens after which the link expires (1 to 10).
	#[serde(skip_serializing_if = "Option::is_none")]
	pub expiry_clicks: Option<u32>,
	/// Append the file name to the link URL.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub add_filename: Option<bool>,
}
impl NewLink {
	/// Creates a link payload with every optional setting left to the provider default.
	pub fn new(path: impl Into<String>, link_type: LinkType, accessibility: LinkAccessibility) -> Self {
		Self {
			path: path.into(),
			link_type,
			accessibility,
			send_email: None,
			recipients: Vec::new(),
			message: None,
			copy_me: None,
			notify: None,
			link_to_current: None,
			expiry_date: None,
			expiry_clicks: None,
			add_filename: None,
		}
	}

	/// Adds recipients.
	pub fn with_recipients<I, S>(mut self, recipients: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.recipients.extend(recipients.into_iter().map(Into::into));

		self
	}

	/// Expires the link after `date`.
	pub fn with_expiry_date(mut self, date: time::Date) -> Self {
		self.expiry_date = Some(date);

		self
	}

	/// Expires the link after `clicks` opens.
	pub fn with_expiry_clicks(mut self, clicks: u32) -> Self {
		self.expiry_clicks = Some(clicks);

		self
	}
}

/// One link produced by a create call (one per recipient, or a single shared link).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedLink {
	/// Link id.
	pub id: String,
	/// Link URL.
	pub url: String,
	/// Recipients this link was sent to.
	#[serde(default)]
	pub recipients: Vec<String>,
}

/// Result of creating links.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedLinks {
	/// Created links.
	pub links: Vec<CreatedLink>,
	/// Target path.
	pub path: String,
	/// File or folder link.
	#[serde(rename = "type")]
	pub link_type: LinkType,
	/// Who can open the links.
	pub accessibility: LinkAccessibility,
	/// Whether the creator is notified on open.
	#[serde(default)]
	pub notify: bool,
	/// Whether file links serve the current version.
	#[serde(default)]
	pub link_to_current: bool,
	/// Expiry date, as formatted by the provider.
	#[serde(default)]
	pub expiry_date: Option<String>,
	/// Creation time, as formatted by the provider.
	#[serde(default)]
	pub creation_date: Option<String>,
	/// Creator username.
	#[serde(default)]
	pub created_by: Option<String>,
	/// Generated password for `password` links.
	#[serde(default)]
	pub password: Option<String>,
}

/// Details of one link.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkDetails {
	/// Link id.
	#[serde(default)]
	pub id: Option<String>,
	/// Link URL.
	#[serde(default)]
	pub url: Option<String>,
	/// Target path.
	pub path: String,
	/// File or folder link.
	#[serde(rename = "type")]
	pub link_type: LinkType,
	/// Who can open the link.
	pub accessibility: LinkAccessibility,
	/// Whether the creator is notified on open.
	#[serde(default)]
	pub notify: bool,
	/// Whether a file link serves the current version.
	#[serde(default)]
	pub link_to_current: bool,
	/// Recipients the link was sent to.
	#[serde(default)]
	pub recipients: Vec<String>,
	/// Expiry date, as formatted by the provider.
	#[serde(default)]
	pub expiry_date: Option<String>,
	/// Remaining opens before expiry.
	#[serde(default)]
	pub expiry_clicks: Option<u32>,
	/// Creation time, as formatted by the provider.
	#[serde(default)]
	pub creation_date: Option<String>,
	/// Creator username.
	#[serde(default)]
	pub created_by: Option<String>,
	/// Last access time, as formatted by the provider.
	#[serde(default)]
	pub last_accessed: Option<String>,
}

/// One page of link ids.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkList {
	/// Link ids on this page.
	#[serde(default)]
	pub ids: Vec<String>,
	/// Offset of the first id.
	#[serde(default)]
	pub offset: u64,
	/// Ids on this page.
	#[serde(default)]
	pub count: u64,
	/// Total matching links.
	#[serde(default)]
	pub total_count: u64,
}
