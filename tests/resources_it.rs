mod common;

// self
use common::{FailingTransport, recording_client};
use pubapi_sdk::{
	Client, Error,
	error::ArgumentError,
	request::ApiEndpoint,
	model::{
		LinkAccessibility, LinkType, NewGroup, NewLink, PermissionLevel, UserInfo, UserUpdate,
	},
	resources::{FolderListQuery, LinkListQuery, SearchQuery, UserListQuery},
};

fn strings(values: &[&str]) -> Vec<String> {
	values.iter().map(|value| (*value).to_owned()).collect()
}

#[tokio::test]
async fn set_folder_permissions_keeps_reserved_characters_in_path() {
	let (client, transport) = recording_client(204, "");

	client
		.set_folder_permissions(
			"Shared/myFolder with ##/",
			&strings(&["jsmith", "ajones"]),
			&[],
			PermissionLevel::Viewer,
		)
		.await
		.expect("Permissions call should succeed.");

	let sent = transport.last_request();

	assert_eq!(transport.calls(), 1);
	assert_eq!(sent.method, "POST");
	assert_eq!(
		sent.uri,
		"https://acme.egnyte.com/pubapi/v1/perms/folder/Shared/myFolder%20with%20%23%23/"
	);
	assert_eq!(sent.authorization.as_deref(), Some("Bearer token-it"));
	assert_eq!(sent.content_type.as_deref(), Some("application/json"));
	assert_eq!(
		sent.json(),
		serde_json::json!({ "users": ["jsmith", "ajones"], "permission": "Viewer" })
	);
}

#[tokio::test]
async fn invalid_arguments_never_reach_the_transport() {
	let (client, transport) = recording_client(200, "{}");

	assert!(matches!(
		client.set_folder_permissions("Shared/Docs", &[], &[], PermissionLevel::Editor).await,
		Err(Error::Argument(ArgumentError::MissingOneOf { .. }))
	));
	assert!(matches!(
		client.list_users(&UserListQuery::default().with_count(0)).await,
		Err(Error::Argument(ArgumentError::OutOfRange { name: "count", .. }))
	));
	assert!(matches!(
		client.update_user(7, &UserUpdate::default()).await,
		Err(Error::Argument(ArgumentError::Empty { name: "update" }))
	));
	assert!(matches!(
		client.get_user(0).await,
		Err(Error::Argument(ArgumentError::OutOfRange { name: "id", .. }))
	));
	assert!(client.create_group(&NewGroup::new("", [1])).await.is_err());
	assert!(client.get_group(" ").await.is_err());
	assert!(client.delete_path("/").await.is_err());
	assert!(client.copy_path("/Shared/a.txt", "", None).await.is_err());
	assert!(client.upload_file("/Shared/Docs/", b"x".to_vec()).await.is_err());
	assert!(
		client
			.create_link(&NewLink::new("/Shared/a.pdf", LinkType::File, LinkAccessibility::Recipients))
			.await
			.is_err()
	);
	assert!(client.search(&SearchQuery::new("ab")).await.is_err());
	assert_eq!(transport.calls(), 0);
}

#[tokio::test]
async fn list_users_sends_paging_on_v2() {
	let body = r#"{"totalResults":1,"itemsPerPage":1,"startIndex":1,"resources":[]}"#;
	let (client, transport) = recording_client(200, body);
	let users = client
		.list_users(&UserListQuery::default().with_start_index(1).with_count(1))
		.await
		.expect("User listing should succeed.");

	assert_eq!(users.total_results, 1);
	assert_eq!(
		transport.last_request().uri,
		"https://acme.egnyte.com/pubapi/v2/users?startIndex=1&count=1"
	);
}

#[tokio::test]
async fn folder_listing_omits_unset_query() {
	let body = r#"{"name":"Shared","path":"/Shared","is_folder":true}"#;
	let (client, transport) = recording_client(200, body);
	let listing =
		client.list_folder("/Shared", &FolderListQuery::default()).await.expect("Listing should succeed.");

	assert_eq!(listing.path, "/Shared");
	assert_eq!(transport.last_request().uri, "https://acme.egnyte.com/pubapi/v1/fs/Shared");
}

#[tokio::test]
async fn create_folder_accepts_empty_body() {
	let (client, transport) = recording_client(201, "");
	let created = client.create_folder("/Shared/New").await.expect("Folder creation should succeed.");

	assert_eq!(created.path, None);
	assert_eq!(transport.last_request().json(), serde_json::json!({ "action": "add_folder" }));
}

#[tokio::test]
async fn file_content_round_trips_raw_bytes() {
	let (client, transport) = recording_client(200, "%PDF-1.7");
	let bytes = client.download_file("/Shared/report.pdf").await.expect("Download should succeed.");

	assert_eq!(bytes, b"%PDF-1.7");
	assert_eq!(
		transport.last_request().uri,
		"https://acme.egnyte.com/pubapi/v1/fs-content/Shared/report.pdf"
	);

	let body = r#"{"checksum":"abc","group_id":"g1","entry_id":"e1"}"#;
	let (client, transport) = recording_client(200, body);
	let uploaded = client
		.upload_file("/Shared/notes.txt", b"hello".to_vec())
		.await
		.expect("Upload should succeed.");
	let sent = transport.last_request();

	assert_eq!(uploaded.entry_id, "e1");
	assert_eq!(sent.body, b"hello");
	assert_eq!(sent.content_type.as_deref(), Some("application/octet-stream"));
}

#[tokio::test]
async fn link_listing_sends_filters_in_order() {
	let (client, transport) = recording_client(200, r#"{"ids":["a1"],"total_count":1}"#);
	let query = LinkListQuery {
		path: Some("/Shared/Docs".into()),
		accessibility: Some(LinkAccessibility::Domain),
		..Default::default()
	};
	let links = client.list_links(&query).await.expect("Link listing should succeed.");

	assert_eq!(links.ids, ["a1"]);
	assert_eq!(
		transport.last_request().uri,
		"https://acme.egnyte.com/pubapi/v1/links?path=%2FShared%2FDocs&accessibility=domain"
	);
}

#[tokio::test]
async fn delete_calls_accept_no_content() {
	let (client, transport) = recording_client(204, "");

	client.delete_link("a1").await.expect("Link deletion should succeed.");
	client.delete_user(42).await.expect("User deletion should succeed.");

	assert_eq!(transport.calls(), 2);
	assert_eq!(transport.last_request().method, "DELETE");
	assert_eq!(transport.last_request().uri, "https://acme.egnyte.com/pubapi/v2/users/42");
}

#[tokio::test]
async fn transport_faults_are_not_reclassified() {
	let endpoint = ApiEndpoint::for_domain("acme").expect("Endpoint should build.");
	let client: Client<FailingTransport> =
		Client::with_transport(endpoint, "token-it", FailingTransport);
	let err = client.get_link("a1").await.expect_err("Failing transport should fail the call.");
	let Error::Transport(transport) = &err else {
		panic!("Expected a transport error, got {err:?}.");
	};
	let io = transport.downcast_ref::<std::io::Error>().expect("Source should be the io error.");

	assert_eq!(io.kind(), std::io::ErrorKind::ConnectionReset);
	assert!(!err.is_rate_limited());
}

#[tokio::test]
async fn mutations_accept_json_acknowledgements() {
	let (client, transport) = recording_client(200, r#"{"status":"ok"}"#);

	client.delete_path("/Shared/old.txt").await.expect("Path deletion should succeed.");
	client.copy_path("/Shared/a.txt", "/Shared/b.txt", None).await.expect("Copy should succeed.");
	client.delete_link("a1").await.expect("Link deletion should succeed.");
	client.delete_group("g1").await.expect("Group deletion should succeed.");
	client.delete_user(42).await.expect("User deletion should succeed.");
	client
		.set_folder_permissions("/Shared/Docs", &[], &strings(&["Finance"]), PermissionLevel::Full)
		.await
		.expect("Permissions call should succeed.");

	assert_eq!(transport.calls(), 6);
	assert_eq!(
		transport.last_request().json(),
		serde_json::json!({ "groups": ["Finance"], "permission": "Full" })
	);
}

#[tokio::test]
async fn empty_success_body_yields_default_record() {
	let (client, transport) = recording_client(200, "");
	let info = client.user_info().await.expect("Empty body should decode.");

	assert_eq!(info, UserInfo::default());
	assert_eq!(transport.calls(), 1);

	let (client, _) = recording_client(200, "not json");

	assert!(matches!(client.user_info().await, Err(Error::Decode { status: 200, .. })));
}
