//! Resource record types for the Silo vault.
//!
//! A [`Resource`] is a read-only snapshot of one captured item (link, file,
//! text snippet, tweet) as handed to the export pipeline by the data-access
//! layer. The exporter never mutates records; everything here is plain data
//! plus a few pure helpers the pipeline shares.

pub use self::attachment::{AttachmentRef, ParseAttachmentError};
pub use self::resource::{Resource, ResourceKind, looks_like_url};

mod attachment;
mod resource;
