//! Attachment resolution for vault exports.
//!
//! Turns a [`silo_vault::AttachmentRef`] into bytes plus a best-guess file
//! extension. Inline `data:` blobs are decoded locally; remote URLs go
//! through the [`HttpClient`] trait so tests can substitute a mock for the
//! production [`ReqwestClient`].
//!
//! # Architecture
//!
//! - `http.rs` - HTTP client abstraction and reqwest implementation
//! - `data_uri.rs` - Inline blob parsing and decoding
//! - `mime.rs` - MIME-to-extension table and URL extension inference
//! - `fetch.rs` - Attachment resolution entry point

pub use self::error::{FetchError, Result};
pub use self::fetch::{FetchedAttachment, fetch_attachment};
pub use self::http::{HttpClient, HttpResponse};
pub use self::mime::{extension_for_mime, extension_from_url};

#[cfg(feature = "reqwest")]
pub use self::http::ReqwestClient;

mod data_uri;
mod error;
mod fetch;
mod http;
mod mime;
