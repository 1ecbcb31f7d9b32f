use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use bytes::Bytes;

use crate::error::{FetchError, Result};
use crate::fetch::FetchedAttachment;
use crate::mime::extension_for_mime;

/// Decode a `data:<mime>;base64,<payload>` blob.
///
/// Inline blobs carry no filename, so the extension always comes from the
/// embedded MIME type.
pub(crate) fn decode_data_uri(raw: &str) -> Result<FetchedAttachment> {
    let rest = raw
        .strip_prefix("data:")
        .ok_or(FetchError::MalformedDataUri("missing data: scheme"))?;

    let (header, payload) = rest
        .split_once(',')
        .ok_or(FetchError::MalformedDataUri("missing payload separator"))?;

    if !header.split(';').any(|p| p.trim() == "base64") {
        return Err(FetchError::MalformedDataUri("missing base64 marker"));
    }

    let mime = header.split(';').next().unwrap_or("");
    let bytes = STANDARD.decode(payload.trim())?;

    Ok(FetchedAttachment {
        bytes: Bytes::from(bytes),
        extension: extension_for_mime(mime).to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_png_blob() {
        let att = decode_data_uri("data:image/png;base64,aGVsbG8=").unwrap();
        assert_eq!(&att.bytes[..], b"hello");
        assert_eq!(att.extension, "png");
    }

    #[test]
    fn unknown_mime_gets_fallback_extension() {
        let att = decode_data_uri("data:application/x-thing;base64,aGVsbG8=").unwrap();
        assert_eq!(att.extension, "file");
    }

    #[test]
    fn missing_comma_is_malformed() {
        let err = decode_data_uri("data:image/png;base64").unwrap_err();
        assert!(matches!(err, FetchError::MalformedDataUri(_)));
    }

    #[test]
    fn missing_base64_marker_is_malformed() {
        let err = decode_data_uri("data:text/plain,hello").unwrap_err();
        assert!(matches!(err, FetchError::MalformedDataUri(_)));
    }

    #[test]
    fn bad_payload_is_decode_error() {
        let err = decode_data_uri("data:image/png;base64,!!!").unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }
}
