use serde::{Deserialize, Serialize};

/// Where a resource's attachment lives.
///
/// Stored records keep a single string; anything with a `data:` scheme is a
/// self-contained encoded blob, everything else is a remote URL. The two
/// cases are resolved very differently, so the union is explicit here.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum AttachmentRef {
    /// `data:<mime>;base64,<payload>` inline blob.
    DataUri(String),
    /// Remote URL to fetch at export time.
    Remote(String),
}

#[derive(Debug, thiserror::Error)]
#[error("empty attachment reference")]
pub struct ParseAttachmentError;

impl AttachmentRef {
    pub fn parse(raw: &str) -> Result<Self, ParseAttachmentError> {
        if raw.is_empty() {
            return Err(ParseAttachmentError);
        }
        if raw.starts_with("data:") {
            Ok(Self::DataUri(raw.to_owned()))
        } else {
            Ok(Self::Remote(raw.to_owned()))
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::DataUri(s) | Self::Remote(s) => s,
        }
    }
}

impl TryFrom<String> for AttachmentRef {
    type Error = ParseAttachmentError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::parse(&raw)
    }
}

impl From<AttachmentRef> for String {
    fn from(r: AttachmentRef) -> Self {
        match r {
            AttachmentRef::DataUri(s) | AttachmentRef::Remote(s) => s,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_scheme_classifies_as_inline() {
        let r = AttachmentRef::parse("data:image/png;base64,AAAA").unwrap();
        assert!(matches!(r, AttachmentRef::DataUri(_)));
    }

    #[test]
    fn anything_else_is_remote() {
        let r = AttachmentRef::parse("https://cdn.example/f.pdf").unwrap();
        assert_eq!(r, AttachmentRef::Remote("https://cdn.example/f.pdf".into()));
    }

    #[test]
    fn empty_reference_rejected() {
        assert!(AttachmentRef::parse("").is_err());
    }
}
