//! Group records (SCIM-style v2 API).

// self
use crate::_prelude::*;

/// Member entry of a group.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupMember {
	/// Member login name.
	#[serde(default)]
	pub username: Option<String>,
	/// Member user id.
	pub value: i64,
	/// Member display name.
	#[serde(default)]
	pub display: Option<String>,
}

/// Full group record.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
	/// Group id.
	pub id: String,
	/// Group name.
	pub display_name: String,
	/// Members.
	#[serde(default)]
	pub members: Vec<GroupMember>,
}

/// Group entry in a listing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupSummary {
	/// Group id.
	pub id: String,
	/// Group name.
	pub display_name: String,
}

/// One page of groups.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupList {
	/// Total matching groups.
	pub total_results: i64,
	/// Page size.
	pub items_per_page: i64,
	/// 1-based index of the first group on this page.
	pub start_index: i64,
	/// Groups on this page.
	#[serde(default)]
	pub resources: Vec<GroupSummary>,
}

/// Member reference sent when creating or replacing a group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberRef {
	/// User id.
	pub value: i64,
}

/// Payload for creating a group or replacing its name and members.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGroup {
	/// Group name.
	pub display_name: String,
	/// Members, by user id.
	pub members: Vec<MemberRef>,
}
impl NewGroup {
	/// Creates a payload for `display_name` with the given member ids.
	pub fn new(display_name: impl Into<String>, member_ids: impl IntoIterator<Item = i64>) -> Self {
		Self {
			display_name: display_name.into(),
			members: member_ids.into_iter().map(|value| MemberRef { value }).collect(),
		}
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn new_group_serializes_member_refs() {
		let group = NewGroup::new("Finance", [9967960066, 9967960068]);

		assert_eq!(
			serde_json::to_value(&group).expect("Group should serialize."),
			serde_json::json!({
				"displayName": "Finance",
				"members": [{ "value": 9967960066_i64 }, { "value": 9967960068_i64 }]
			})
		);
	}
}
