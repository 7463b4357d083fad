//! OAuth 2.0 helpers: authorization URLs and token exchanges against `/puboauth/token`.
//!
//! Token exchanges are ordinary provider calls, so they run through the same
//! [`ServiceHandler`] as every resource method and surface the same QPS, rate, and generic
//! failure errors. The provider issues long-lived bearer tokens without refresh tokens.

pub use oauth2::CsrfToken;

// crates.io
use oauth2::{AuthUrl, ClientId, RedirectUrl, Scope, basic::BasicClient};
use url::form_urlencoded;
// self
use crate::{
	_prelude::*,
	error::ArgumentError,
	http::HttpTransport,
	obs::{CallSpan, Resource},
	request::{ApiEndpoint, ApiRequest, FORM_CONTENT_TYPE},
	resources::common::require_non_empty,
	service::ServiceHandler,
};
#[cfg(feature = "reqwest")] use crate::http::ReqwestTransport;

/// Bearer token wrapper that keeps the secret out of logs.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccessToken(String);
impl AccessToken {
	/// Wraps a new token string.
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	/// Returns the inner token value. Callers must avoid logging this string.
	pub fn expose(&self) -> &str {
		&self.0
	}
}
impl From<String> for AccessToken {
	fn from(value: String) -> Self {
		Self(value)
	}
}
impl From<&str> for AccessToken {
	fn from(value: &str) -> Self {
		Self(value.to_owned())
	}
}
impl Debug for AccessToken {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("AccessToken").field(&"<redacted>").finish()
	}
}
impl Display for AccessToken {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("<redacted>")
	}
}

/// Token endpoint response.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct TokenResponse {
	/// Issued bearer token.
	pub access_token: AccessToken,
	/// Token type, normally `bearer`.
	#[serde(default)]
	pub token_type: String,
	/// Lifetime in seconds; negative values mean the token does not expire.
	#[serde(default)]
	pub expires_in: Option<i64>,
}
impl TokenResponse {
	/// Returns the token lifetime, or `None` for tokens that never expire.
	pub fn lifetime(&self) -> Option<Duration> {
		self.expires_in.filter(|secs| *secs >= 0).map(Duration::seconds)
	}
}

/// Base address plus form parameters for one token exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenRequestParameters {
	/// Domain-qualified token endpoint.
	pub base_address: Url,
	/// Form parameters; ordering is not significant.
	pub query_parameters: BTreeMap<String, String>,
}
impl TokenRequestParameters {
	/// Creates an empty parameter set for `base_address`.
	pub fn new(base_address: Url) -> Self {
		Self { base_address, query_parameters: BTreeMap::new() }
	}

	/// Adds or replaces a parameter.
	pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.query_parameters.insert(name.into(), value.into());

		self
	}

	/// Form-encodes the parameters as a request body.
	pub fn to_form_body(&self) -> String {
		form_urlencoded::Serializer::new(String::new())
			.extend_pairs(self.query_parameters.iter())
			.finish()
	}

	/// Builds the `POST` request carrying the form body.
	pub fn into_request(self) -> ApiRequest {
		let body = self.to_form_body().into_bytes();

		ApiRequest::post(self.base_address).bytes(body, FORM_CONTENT_TYPE)
	}
}

/// OAuth client for one tenant domain and application key.
///
/// The transport is shared through an `Arc`; when [`OAuthClient::new`] provisions its own, the
/// transport lives exactly as long as the client and is released when the client is dropped.
pub struct OAuthClient<C>
where
	C: ?Sized + HttpTransport,
{
	/// Transport used for token exchanges.
	pub transport: Arc<C>,
	/// Tenant endpoint.
	pub endpoint: ApiEndpoint,
	/// Application key.
	pub client_id: String,
	/// Application secret, required by the authorization-code grant.
	pub client_secret: Option<String>,
}
impl<C> OAuthClient<C>
where
	C: ?Sized + HttpTransport,
{
	/// Creates a client over a caller-provided transport.
	pub fn with_transport(
		endpoint: ApiEndpoint,
		client_id: impl Into<String>,
		transport: impl Into<Arc<C>>,
	) -> Self {
		Self { transport: transport.into(), endpoint, client_id: client_id.into(), client_secret: None }
	}

	/// Sets or replaces the application secret.
	pub fn with_client_secret(mut self, secret: impl Into<String>) -> Self {
		self.client_secret = Some(secret.into());

		self
	}

	/// Builds the URL users visit to grant access.
	///
	/// A random `state` is generated when none is supplied; compare the returned token with the
	/// `state` echoed to `redirect_uri`.
	pub fn authorization_url<'a>(
		&self,
		redirect_uri: &Url,
		scopes: impl IntoIterator<Item = &'a str>,
		state: Option<&str>,
	) -> Result<(Url, CsrfToken)> {
		require_non_empty("client_id", &self.client_id)?;

		let token_url = self.endpoint.oauth_token_url()?;
		let auth_url = AuthUrl::from_url(token_url);
		let redirect = RedirectUrl::from_url(redirect_uri.clone());
		let client = BasicClient::new(ClientId::new(self.client_id.clone()))
			.set_auth_uri(auth_url)
			.set_redirect_uri(redirect);
		let state = state.map(str::to_owned);
		let (url, csrf) = client
			.authorize_url(move || match state {
				Some(value) => CsrfToken::new(value),
				None => CsrfToken::new_random(),
			})
			.add_scopes(scopes.into_iter().map(|scope| Scope::new(scope.to_owned())))
			.url();

		Ok((url, csrf))
	}

	/// Parameters for the authorization-code exchange.
	pub fn authorization_code_parameters(
		&self,
		code: &str,
		redirect_uri: &Url,
	) -> Result<TokenRequestParameters> {
		require_non_empty("code", code)?;
		require_non_empty("client_id", &self.client_id)?;

		let secret = self
			.client_secret
			.as_deref()
			.filter(|secret| !secret.trim().is_empty())
			.ok_or(ArgumentError::Empty { name: "client_secret" })?;

		Ok(TokenRequestParameters::new(self.endpoint.oauth_token_url()?)
			.with("client_id", self.client_id.as_str())
			.with("client_secret", secret)
			.with("redirect_uri", redirect_uri.as_str())
			.with("code", code)
			.with("grant_type", "authorization_code"))
	}

	/// Parameters for the resource-owner password exchange.
	pub fn password_parameters(&self, username: &str, password: &str) -> Result<TokenRequestParameters> {
		require_non_empty("username", username)?;
		require_non_empty("password", password)?;
		require_non_empty("client_id", &self.client_id)?;

		let mut parameters = TokenRequestParameters::new(self.endpoint.oauth_token_url()?)
			.with("client_id", self.client_id.as_str())
			.with("username", username)
			.with("password", password)
			.with("grant_type", "password");

		if let Some(secret) = self.client_secret.as_deref() {
			parameters = parameters.with("client_secret", secret);
		}

		Ok(parameters)
	}

	/// Exchanges an authorization code for a token.
	pub async fn exchange_authorization_code(
		&self,
		code: &str,
		redirect_uri: &Url,
	) -> Result<TokenResponse> {
		let parameters = self.authorization_code_parameters(code, redirect_uri)?;

		self.exchange("authorization_code", parameters).await
	}

	/// Exchanges user credentials for a token (resource-owner grant).
	pub async fn exchange_password(&self, username: &str, password: &str) -> Result<TokenResponse> {
		let parameters = self.password_parameters(username, password)?;

		self.exchange("password", parameters).await
	}

	async fn exchange(
		&self,
		operation: &'static str,
		parameters: TokenRequestParameters,
	) -> Result<TokenResponse> {
		let span = CallSpan::new(Resource::OAuth, operation);

		span.record(async move {
			let request = parameters.into_request().into_http(None)?;
			let handler = ServiceHandler::<TokenResponse, C>::new(Arc::clone(&self.transport));

			Ok(handler.send_request(request).await?.data)
		})
		.await
	}
}
#[cfg(feature = "reqwest")]
impl OAuthClient<ReqwestTransport> {
	/// Creates a client for `domain` that owns a default reqwest transport.
	pub fn new(domain: &str, client_id: impl Into<String>) -> Result<Self> {
		require_non_empty("domain", domain)?;

		Ok(Self::with_transport(ApiEndpoint::for_domain(domain)?, client_id, ReqwestTransport::new()?))
	}
}
impl<C> Debug for OAuthClient<C>
where
	C: ?Sized + HttpTransport,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("OAuthClient")
			.field("endpoint", &self.endpoint)
			.field("client_id", &self.client_id)
			.field("client_secret_set", &self.client_secret.is_some())
			.finish()
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	struct Unreachable;
	impl HttpTransport for Unreachable {
		type TransportError = std::io::Error;

		fn execute(
			&self,
			_request: crate::http::HttpRequest,
		) -> crate::http::TransportFuture<'_, Self::TransportError> {
			panic!("Token parameters must not touch the transport.");
		}
	}

	fn client() -> OAuthClient<Unreachable> {
		let endpoint = ApiEndpoint::for_domain("acme").expect("Endpoint should build.");

		OAuthClient::with_transport(endpoint, "app-key", Unreachable)
	}

	#[test]
	fn access_token_formatters_redact() {
		let token = AccessToken::new("super-secret");

		assert_eq!(format!("{token:?}"), "AccessToken(\"<redacted>\")");
		assert_eq!(format!("{token}"), "<redacted>");
	}

	#[test]
	fn token_lifetime_treats_negative_as_unbounded() {
		let response: TokenResponse =
			serde_json::from_str(r#"{"access_token":"abc","token_type":"bearer","expires_in":-1}"#)
				.expect("Token response should parse.");

		assert_eq!(response.access_token.expose(), "abc");
		assert!(response.lifetime().is_none());

		let response: TokenResponse = serde_json::from_str(r#"{"access_token":"abc","expires_in":60}"#)
			.expect("Token response should parse.");

		assert_eq!(response.lifetime(), Some(Duration::seconds(60)));
	}

	#[test]
	fn password_parameters_form_encode() {
		let parameters = client()
			.password_parameters("jsmith", "p@ss word")
			.expect("Parameters should build.");

		assert_eq!(parameters.base_address.as_str(), "https://acme.egnyte.com/puboauth/token");
		assert_eq!(
			parameters.to_form_body(),
			"client_id=app-key&grant_type=password&password=p%40ss+word&username=jsmith"
		);
	}

	#[test]
	fn authorization_code_requires_secret() {
		let redirect = Url::parse("https://app.example.com/callback").expect("URL should parse.");
		let err = client()
			.authorization_code_parameters("code-1", &redirect)
			.expect_err("Missing secret should be rejected.");

		assert!(matches!(err, Error::Argument(ArgumentError::Empty { name: "client_secret" })));

		let parameters = client()
			.with_client_secret("shh")
			.authorization_code_parameters("code-1", &redirect)
			.expect("Parameters should build.");

		assert_eq!(parameters.query_parameters["grant_type"], "authorization_code");
		assert_eq!(parameters.query_parameters["redirect_uri"], "https://app.example.com/callback");
	}

	#[test]
	fn authorization_url_carries_client_and_state() {
		let redirect = Url::parse("https://app.example.com/callback").expect("URL should parse.");
		let (url, state) = client()
			.authorization_url(&redirect, ["Egnyte.filesystem", "Egnyte.link"], Some("xyz"))
			.expect("Authorization URL should build.");
		let pairs: BTreeMap<String, String> = url.query_pairs().into_owned().collect();

		assert_eq!(url.path(), "/puboauth/token");
		assert_eq!(state.secret(), "xyz");
		assert_eq!(pairs["client_id"], "app-key");
		assert_eq!(pairs["response_type"], "code");
		assert_eq!(pairs["state"], "xyz");
		assert_eq!(pairs["scope"], "Egnyte.filesystem Egnyte.link");
		assert_eq!(pairs["redirect_uri"], "https://app.example.com/callback");
	}
}
