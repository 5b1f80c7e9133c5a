//! Typed OAuth 2.0 token/dereference requests and sanitizer filter settings, assembled from
//! loosely-typed configuration maps.
//!
//! Configuration values arrive as strings, booleans, native lists, or JSON-encoded strings.
//! [`config`] coerces them into strongly typed fields, [`request`] builds the grant-specific
//! token requests plus token dereference lookups, and [`sanitizer`] resolves the attribute
//! filters consumed by an external encoding engine. Missing secrets never abort construction;
//! they surface as [`diagnostic::Diagnostic`] values next to the built object.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod config;
pub mod diagnostic;
pub mod error;
pub mod obs;
pub mod request;
pub mod sanitizer;
pub mod transport;

mod _prelude {
	pub use std::{
		collections::BTreeMap,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
	};

	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use url::Url;

	pub use crate::error::Result;
}

pub use url;
