//! Request composition: domain-qualified base paths, path escaping, and query strings.
//!
//! Everything here is pure. Resource methods use these helpers to turn their parameters into
//! an [`ApiRequest`], which the client then converts into an [`HttpRequest`] for the service
//! handler.

// std
use std::borrow::Cow;
// crates.io
use oauth2::http::header::{AUTHORIZATION, CONTENT_TYPE, HeaderValue};
use time::{format_description::BorrowedFormatItem, macros::format_description};
use url::form_urlencoded;
// self
use crate::{
	_prelude::*,
	error::ConfigError,
	http::{HttpRequest, Method},
	oauth::AccessToken,
};

/// Placeholder substituted with the tenant domain in endpoint templates.
pub const DOMAIN_PLACEHOLDER: &str = "{domain}";
/// Default domain-qualified host template.
pub const DEFAULT_HOST_TEMPLATE: &str = "https://{domain}.egnyte.com";
/// Content type attached to JSON bodies.
pub const JSON_CONTENT_TYPE: &str = "application/json";
/// Content type attached to form bodies.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";
/// Content type attached to raw file uploads.
pub const OCTET_STREAM_CONTENT_TYPE: &str = "application/octet-stream";

const QUERY_DATE_FORMAT: &[BorrowedFormatItem<'static>] =
	format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]Z");

/// Public API version segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ApiVersion {
	/// `v1`: file system, permissions, links, search, user info.
	V1,
	/// `v2`: SCIM-style users and groups.
	V2,
}
impl ApiVersion {
	/// Returns the path segment for this version.
	pub const fn as_str(self) -> &'static str {
		match self {
			ApiVersion::V1 => "v1",
			ApiVersion::V2 => "v2",
		}
	}
}
impl Display for ApiVersion {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Builds `{host}/pubapi/{version}/{resource}` from a host template and a tenant domain.
///
/// The domain is substituted verbatim; validating it is the caller's concern.
pub fn build_base_path(template: &str, domain: &str, version: ApiVersion, resource: &str) -> String {
	let host = template.replace(DOMAIN_PLACEHOLDER, domain);

	join_base_path(&host, version, resource)
}

fn join_base_path(host: &str, version: ApiVersion, resource: &str) -> String {
	format!(
		"{}/pubapi/{}/{}",
		host.trim_end_matches('/'),
		version,
		resource.trim_start_matches('/')
	)
}

/// Percent-encodes characters the URL parser would otherwise read as delimiters.
///
/// `#` and `?` would end the path, and a literal `%` would be taken as the start of an escape,
/// so these become `%23`, `%3F`, and `%25`. Spaces and other characters are left for the URL
/// parser, which encodes them itself; `/` keeps separating segments.
pub fn escape_path_segment(segment: &str) -> Cow<'_, str> {
	if !segment.contains(['#', '?', '%']) {
		return Cow::Borrowed(segment);
	}

	let mut escaped = String::with_capacity(segment.len() + 8);

	for c in segment.chars() {
		match c {
			'#' => escaped.push_str("%23"),
			'?' => escaped.push_str("%3F"),
			'%' => escaped.push_str("%25"),
			c => escaped.push(c),
		}
	}

	Cow::Owned(escaped)
}

/// Formats a timestamp the way the provider expects query dates (`yyyy-MM-ddTHH:mm:ssZ`, UTC).
pub fn format_query_date(value: OffsetDateTime) -> String {
	let utc = value.to_offset(time::UtcOffset::UTC);

	// The format only uses numeric components, which cannot fail to render.
	utc.format(QUERY_DATE_FORMAT).unwrap_or_default()
}

/// Ordered list of optional query parameters.
///
/// Parameters keep the order they were pushed in; those without a value are skipped entirely.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryParams(Vec<(&'static str, Option<String>)>);
impl QueryParams {
	/// Creates an empty parameter list.
	pub fn new() -> Self {
		Self::default()
	}

	/// Appends a parameter; `None` values are remembered but never emitted.
	pub fn push(&mut self, name: &'static str, value: Option<impl ToString>) -> &mut Self {
		self.0.push((name, value.map(|v| v.to_string())));

		self
	}

	/// Appends a date parameter formatted with [`format_query_date`].
	pub fn push_date(&mut self, name: &'static str, value: Option<OffsetDateTime>) -> &mut Self {
		self.push(name, value.map(format_query_date))
	}

	/// Builder-style variant of [`push`](Self::push).
	pub fn with(mut self, name: &'static str, value: Option<impl ToString>) -> Self {
		self.push(name, value);

		self
	}

	/// Builder-style variant of [`push_date`](Self::push_date).
	pub fn with_date(mut self, name: &'static str, value: Option<OffsetDateTime>) -> Self {
		self.push_date(name, value);

		self
	}

	/// Returns true if no parameter carries a value.
	pub fn is_empty(&self) -> bool {
		self.0.iter().all(|(_, value)| value.is_none())
	}

	/// Renders `name=value` pairs joined by `&`, without a leading `?`.
	///
	/// Values are form-encoded. An empty list (or one with only absent values) renders as an
	/// empty string.
	pub fn to_query_string(&self) -> String {
		self.0
			.iter()
			.filter_map(|(name, value)| value.as_ref().map(|value| (name, value)))
			.map(|(name, value)| {
				format!("{name}={}", form_urlencoded::byte_serialize(value.as_bytes()).collect::<String>())
			})
			.collect::<Vec<_>>()
			.join("&")
	}
}

/// Domain-qualified base address of one tenant's API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiEndpoint {
	host: String,
}
impl ApiEndpoint {
	/// Endpoint for `domain` on the default provider host.
	pub fn for_domain(domain: &str) -> Result<Self> {
		Self::from_template(DEFAULT_HOST_TEMPLATE, domain)
	}

	/// Endpoint built from a template containing [`DOMAIN_PLACEHOLDER`].
	pub fn from_template(template: &str, domain: &str) -> Result<Self> {
		if !template.contains(DOMAIN_PLACEHOLDER) {
			return Err(
				ConfigError::MissingDomainPlaceholder { template: template.to_owned() }.into()
			);
		}

		let host = template.replace(DOMAIN_PLACEHOLDER, domain);

		Url::parse(&host).map_err(|source| ConfigError::invalid_url(&host, source))?;

		Ok(Self { host: host.trim_end_matches('/').to_owned() })
	}

	/// Endpoint rooted at an explicit base URL (proxies, mock servers).
	pub fn with_base_url(base: &Url) -> Self {
		Self { host: base.as_str().trim_end_matches('/').to_owned() }
	}

	/// Returns the host portion, without a trailing slash.
	pub fn host(&self) -> &str {
		&self.host
	}

	/// Returns `{host}/pubapi/{version}/{resource}`.
	pub fn base_path(&self, version: ApiVersion, resource: &str) -> String {
		join_base_path(&self.host, version, resource)
	}

	/// Composes a resource URL.
	///
	/// `path` is appended after the resource through [`escape_path_segment`]; pass an empty
	/// string for resource roots. The query is attached only when it carries at least one value.
	pub fn url(
		&self,
		version: ApiVersion,
		resource: &str,
		path: &str,
		query: &QueryParams,
	) -> Result<Url> {
		let mut target = self.base_path(version, resource);

		if !path.is_empty() {
			target.push('/');
			target.push_str(&escape_path_segment(path.trim_start_matches('/')));
		}

		let mut url = Url::parse(&target).map_err(|source| ConfigError::invalid_url(&target, source))?;
		let query = query.to_query_string();

		if !query.is_empty() {
			url.set_query(Some(&query));
		}

		Ok(url)
	}

	/// OAuth endpoint (`{host}/puboauth/token`), used for both authorization and token exchange.
	pub fn oauth_token_url(&self) -> Result<Url> {
		let target = format!("{}/puboauth/token", self.host);

		Url::parse(&target).map_err(|source| ConfigError::invalid_url(&target, source).into())
	}
}

/// Outbound request assembled by a resource method.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiRequest {
	/// HTTP method.
	pub method: Method,
	/// Fully composed target URL.
	pub url: Url,
	/// Optional body with its content type.
	pub body: Option<(Vec<u8>, &'static str)>,
}
impl ApiRequest {
	/// Creates a body-less request.
	pub fn new(method: Method, url: Url) -> Self {
		Self { method, url, body: None }
	}

	/// Shorthand for a `GET` request.
	pub fn get(url: Url) -> Self {
		Self::new(Method::GET, url)
	}

	/// Shorthand for a `POST` request.
	pub fn post(url: Url) -> Self {
		Self::new(Method::POST, url)
	}

	/// Shorthand for a `PATCH` request.
	pub fn patch(url: Url) -> Self {
		Self::new(Method::PATCH, url)
	}

	/// Shorthand for a `DELETE` request.
	pub fn delete(url: Url) -> Self {
		Self::new(Method::DELETE, url)
	}

	/// Attaches `body` serialized as JSON.
	pub fn json<B>(mut self, body: &B) -> Result<Self>
	where
		B: ?Sized + Serialize,
	{
		let bytes = serde_json::to_vec(body).map_err(ConfigError::RequestBody)?;

		self.body = Some((bytes, JSON_CONTENT_TYPE));

		Ok(self)
	}

	/// Attaches form-encoded `pairs`.
	pub fn form<'a, I>(mut self, pairs: I) -> Self
	where
		I: IntoIterator<Item = (&'a str, &'a str)>,
	{
		let encoded = form_urlencoded::Serializer::new(String::new()).extend_pairs(pairs).finish();

		self.body = Some((encoded.into_bytes(), FORM_CONTENT_TYPE));

		self
	}

	/// Attaches a raw byte body.
	pub fn bytes(mut self, bytes: Vec<u8>, content_type: &'static str) -> Self {
		self.body = Some((bytes, content_type));

		self
	}

	/// Converts into an [`HttpRequest`], attaching a bearer token when supplied.
	pub fn into_http(self, bearer: Option<&AccessToken>) -> Result<HttpRequest> {
		let mut builder =
			oauth2::http::Request::builder().method(self.method).uri(self.url.as_str());

		if let Some(token) = bearer {
			let mut value = HeaderValue::try_from(format!("Bearer {}", token.expose()))
				.map_err(oauth2::http::Error::from)
				.map_err(ConfigError::from)?;

			value.set_sensitive(true);
			builder = builder.header(AUTHORIZATION, value);
		}

		let body = match self.body {
			Some((bytes, content_type)) => {
				builder = builder.header(CONTENT_TYPE, content_type);

				bytes
			},
			None => Vec::new(),
		};

		builder.body(body).map_err(|e| ConfigError::from(e).into())
	}
}

#[cfg(test)]
mod tests {
	// crates.io
	use time::macros::datetime;
	// self
	use super::*;

	#[test]
	fn base_path_substitutes_domain() {
		assert_eq!(
			build_base_path(DEFAULT_HOST_TEMPLATE, "acme", ApiVersion::V1, "fs"),
			"https://acme.egnyte.com/pubapi/v1/fs"
		);
		assert_eq!(
			build_base_path("https://{domain}.example.com/", "acme", ApiVersion::V2, "/users"),
			"https://acme.example.com/pubapi/v2/users"
		);
	}

	#[test]
	fn escape_touches_only_delimiters() {
		assert_eq!(escape_path_segment("Shared/a#b##"), "Shared/a%23b%23%23");
		assert_eq!(escape_path_segment("Shared/What?Now"), "Shared/What%3FNow");
		assert_eq!(escape_path_segment("Shared/100%"), "Shared/100%25");
		assert!(matches!(escape_path_segment("Shared/plain dir"), Cow::Borrowed("Shared/plain dir")));
	}

	#[test]
	fn query_skips_absent_values_in_order() {
		let query = QueryParams::new()
			.with("offset", Some(10))
			.with("count", None::<u32>)
			.with("query", Some("tax report"))
			.with("folder", None::<&str>);

		assert_eq!(query.to_query_string(), "offset=10&query=tax+report");
	}

	#[test]
	fn query_all_absent_is_empty() {
		let query = QueryParams::new().with("a", None::<u8>).with("b", None::<u8>);

		assert!(query.is_empty());
		assert_eq!(query.to_query_string(), "");
		assert_eq!(QueryParams::new().to_query_string(), "");
	}

	#[test]
	fn query_dates_use_utc_seconds() {
		assert_eq!(format_query_date(datetime!(2024-03-05 07:08:09 UTC)), "2024-03-05T07:08:09Z");
		assert_eq!(format_query_date(datetime!(2024-03-05 07:08:09 +02:00)), "2024-03-05T05:08:09Z");
	}

	#[test]
	fn endpoint_url_escapes_path_and_omits_empty_query() {
		let endpoint = ApiEndpoint::for_domain("acme").expect("Endpoint should build.");
		let url = endpoint
			.url(ApiVersion::V1, "fs", "/Shared/My Docs #1", &QueryParams::new())
			.expect("URL should compose.");

		assert_eq!(url.as_str(), "https://acme.egnyte.com/pubapi/v1/fs/Shared/My%20Docs%20%231");
		assert!(url.query().is_none());

		let query = QueryParams::new().with("list_content", Some(true));
		let url = endpoint.url(ApiVersion::V1, "fs", "Shared", &query).expect("URL should compose.");

		assert_eq!(url.query(), Some("list_content=true"));

		let url = endpoint
			.url(ApiVersion::V1, "fs", "Shared/What?Now 100%", &query)
			.expect("URL should compose.");

		assert_eq!(
			url.as_str(),
			"https://acme.egnyte.com/pubapi/v1/fs/Shared/What%3FNow%20100%25?list_content=true"
		);
	}

	#[test]
	fn template_requires_placeholder() {
		let err = ApiEndpoint::from_template("https://static.example.com", "acme")
			.expect_err("Templates without a placeholder should be rejected.");

		assert!(matches!(err, Error::Config(ConfigError::MissingDomainPlaceholder { .. })));
	}

	#[test]
	fn into_http_attaches_bearer_and_content_type() {
		let url = Url::parse("https://acme.egnyte.com/pubapi/v1/links").expect("URL should parse.");
		let token = AccessToken::new("t0k3n");
		let request = ApiRequest::post(url)
			.json(&serde_json::json!({ "path": "/Shared" }))
			.expect("Body should serialize.")
			.into_http(Some(&token))
			.expect("Request should build.");

		assert_eq!(request.method(), &Method::POST);
		assert_eq!(request.headers()[AUTHORIZATION], "Bearer t0k3n");
		assert_eq!(request.headers()[CONTENT_TYPE], JSON_CONTENT_TYPE);
		assert_eq!(request.body().as_slice(), br#"{"path":"/Shared"}"#);
	}
}
