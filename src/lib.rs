//! Typed async client for the Egnyte public API: users, groups, permissions, files, links,
//! search, and OAuth token exchange, with provider throttling surfaced as distinct errors.
//!
//! Every resource method funnels through one [`service::ServiceHandler`], which sends the
//! request over an injected [`http::HttpTransport`] and classifies the response into a
//! [`service::ServiceResponse`] or a typed [`error::Error`].

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod client;
pub mod error;
pub mod http;
pub mod model;
pub mod oauth;
pub mod obs;
pub mod request;
pub mod resources;
pub mod service;

pub use client::Client;
#[cfg(feature = "reqwest")] pub use client::ReqwestApiClient;
pub use error::{Error, Result};
pub use service::{ServiceHandler, ServiceResponse};

mod _prelude {
	pub use std::{
		collections::BTreeMap,
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		marker::PhantomData,
		pin::Pin,
		sync::Arc,
	};

	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use time::{Duration, OffsetDateTime};
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

#[cfg(feature = "reqwest")] pub use reqwest;
pub use url;
#[cfg(test)] use {color_eyre as _, httpmock as _};
