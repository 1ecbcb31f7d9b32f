use serde::{Deserialize, Serialize};

use crate::attachment::AttachmentRef;

/// Content classification assigned at capture time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Link,
    File,
    Text,
    Tweet,
}

/// One captured vault item, as fetched from the data store.
///
/// All optional fields are genuinely optional in stored records; the
/// exporter decides per field which archive files to materialize.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Resource {
    pub id: String,
    pub title: String,
    pub kind: ResourceKind,
    /// Free-text body. May itself be a bare URL for quick link captures.
    #[serde(default)]
    pub content: Option<String>,
    /// Explicit source URL, when captured from one.
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub attachment: Option<AttachmentRef>,
    /// User annotation added after capture.
    #[serde(default)]
    pub note: Option<String>,
    /// Insertion order is significant: the first label is the primary one.
    #[serde(default)]
    pub labels: Vec<String>,
}

impl Resource {
    /// The label that decides archive folder placement, if any.
    pub fn primary_label(&self) -> Option<&str> {
        self.labels.first().map(String::as_str)
    }

    /// The URL this resource points at, if it has one.
    ///
    /// An explicit source URL wins; otherwise content that is itself a bare
    /// URL counts (quick link captures store the URL as content).
    pub fn origin_url(&self) -> Option<&str> {
        if let Some(url) = self.url.as_deref() {
            return Some(url);
        }
        self.content.as_deref().filter(|c| looks_like_url(c))
    }

    /// Content that belongs in a note file, i.e. content that is not
    /// consumed by the URL-shortcut step.
    pub fn note_content(&self) -> Option<&str> {
        self.content.as_deref().filter(|c| !looks_like_url(c))
    }
}

/// Whether a content string is a bare URL rather than prose.
pub fn looks_like_url(s: &str) -> bool {
    s.trim_start().starts_with("http")
}
