//! User records (SCIM-style v2 API plus the v1 `userinfo` shape).

// self
use crate::_prelude::*;

/// Identity of the token's owner, as returned by `/userinfo`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
	/// Numeric user id.
	pub id: i64,
	/// Login name.
	pub username: String,
	/// First name.
	pub first_name: String,
	/// Last name.
	pub last_name: String,
}

/// Given and family name of a user.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserName {
	/// Display form, when the provider supplies it.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub formatted: Option<String>,
	/// Family (last) name.
	pub family_name: String,
	/// Given (first) name.
	pub given_name: String,
}

/// Role of a user within the tenant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserType {
	/// Administrator.
	Admin,
	/// Power user.
	Power,
	/// Standard user.
	Standard,
}

/// How a user authenticates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthType {
	/// Provider-managed password.
	Egnyte,
	/// Single sign-on.
	Sso,
	/// Active Directory.
	Ad,
}

/// Group reference embedded in a user record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserGroup {
	/// Group id.
	pub value: String,
	/// Group display name.
	#[serde(default)]
	pub display: Option<String>,
}

/// Full user record.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
	/// Numeric user id.
	pub id: i64,
	/// Login name.
	pub user_name: String,
	/// Identifier in the customer's identity system.
	#[serde(default)]
	pub external_id: Option<String>,
	/// Email address.
	pub email: String,
	/// Given and family name.
	pub name: UserName,
	/// Whether the account is active.
	#[serde(default)]
	pub active: bool,
	/// Whether the account is locked.
	#[serde(default)]
	pub locked: bool,
	/// Whether an email change awaits confirmation.
	#[serde(default)]
	pub email_change_pending: bool,
	/// Authentication type.
	#[serde(default)]
	pub auth_type: Option<AuthType>,
	/// User type.
	#[serde(default)]
	pub user_type: Option<UserType>,
	/// Custom role name.
	#[serde(default)]
	pub role: Option<String>,
	/// SSO identity-provider user id.
	#[serde(default)]
	pub idp_user_id: Option<String>,
	/// Active Directory principal name.
	#[serde(default)]
	pub user_principal_name: Option<String>,
	/// Creation timestamp, as formatted by the provider.
	#[serde(default)]
	pub created_date: Option<String>,
	/// Last modification timestamp.
	#[serde(default)]
	pub last_modification_date: Option<String>,
	/// Last activity timestamp.
	#[serde(default)]
	pub last_active_date: Option<String>,
	/// Groups the user belongs to.
	#[serde(default)]
	pub groups: Vec<UserGroup>,
}

/// One page of users.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserList {
	/// Total matching users.
	pub total_results: i64,
	/// Page size.
	pub items_per_page: i64,
	/// 1-based index of the first user on this page.
	pub start_index: i64,
	/// Users on this page.
	#[serde(default)]
	pub resources: Vec<User>,
}

/// Payload for creating a user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
	/// Login name.
	pub user_name: String,
	/// Identifier in the customer's identity system.
	pub external_id: String,
	/// Email address.
	pub email: String,
	/// Given and family name.
	pub name: UserName,
	/// Whether the account starts active.
	pub active: bool,
	/// Whether to email an invitation.
	pub send_invite: bool,
	/// Authentication type.
	pub auth_type: AuthType,
	/// User type.
	pub user_type: UserType,
	/// Custom role name.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub role: Option<String>,
	/// SSO identity-provider user id; required for SSO users.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub idp_user_id: Option<String>,
	/// Active Directory principal name; required for AD users.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub user_principal_name: Option<String>,
}
impl NewUser {
	/// Creates an active, standard, password-authenticated user that receives an invitation.
	pub fn new(
		user_name: impl Into<String>,
		email: impl Into<String>,
		given_name: impl Into<String>,
		family_name: impl Into<String>,
	) -> Self {
		let user_name = user_name.into();

		Self {
			external_id: user_name.clone(),
			user_name,
			email: email.into(),
			name: UserName {
				formatted: None,
				family_name: family_name.into(),
				given_name: given_name.into(),
			},
			active: true,
			send_invite: true,
			auth_type: AuthType::Egnyte,
			user_type: UserType::Standard,
			role: None,
			idp_user_id: None,
			user_principal_name: None,
		}
	}
}

/// Partial update of a user; only present fields are sent.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
	/// New email address.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub email: Option<String>,
	/// New given and family name.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub name: Option<UserName>,
	/// Activate or deactivate the account.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub active: Option<bool>,
	/// Re-send the invitation.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub send_invite: Option<bool>,
	/// New authentication type.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub auth_type: Option<AuthType>,
	/// New user type.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub user_type: Option<UserType>,
	/// New role name.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub role: Option<String>,
	/// New SSO identity-provider user id.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub idp_user_id: Option<String>,
	/// New Active Directory principal name.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub user_principal_name: Option<String>,
}
impl UserUpdate {
	/// Returns true when no field would be sent.
	pub fn is_empty(&self) -> bool {
		*self == Self::default()
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn user_list_maps_scim_casing() {
		let list: UserList = serde_json::from_str(
			r#"{
				"totalResults": 1,
				"itemsPerPage": 1,
				"startIndex": 1,
				"resources": [{
					"id": 9967960066,
					"userName": "jsmith",
					"externalId": "S-1-5-21",
					"email": "jsmith@acme.com",
					"name": { "formatted": "John Smith", "familyName": "Smith", "givenName": "John" },
					"active": true,
					"locked": false,
					"authType": "ad",
					"userType": "power",
					"idpUserId": "jsmith",
					"userPrincipalName": "jsmith@acme.local",
					"groups": [{ "value": "e8c5d5ba", "display": "Finance" }]
				}]
			}"#,
		)
		.expect("User list should parse.");
		let user = &list.resources[0];

		assert_eq!(list.total_results, 1);
		assert_eq!(user.id, 9967960066);
		assert_eq!(user.name.given_name, "John");
		assert_eq!(user.auth_type, Some(AuthType::Ad));
		assert_eq!(user.user_type, Some(UserType::Power));
		assert_eq!(user.groups[0].display.as_deref(), Some("Finance"));
	}

	#[test]
	fn user_update_sends_only_present_fields() {
		let update = UserUpdate { active: Some(false), ..UserUpdate::default() };

		assert!(!update.is_empty());
		assert!(UserUpdate::default().is_empty());
		assert_eq!(
			serde_json::to_value(&update).expect("Update should serialize."),
			serde_json::json!({ "active": false })
		);
	}
}
