use bytes::Bytes;
use silo_vault::AttachmentRef;
use tracing::debug;

use crate::data_uri::decode_data_uri;
use crate::error::{FetchError, Result};
use crate::http::HttpClient;
use crate::mime::{extension_for_mime, extension_from_url};

/// Resolved attachment content plus a best-guess extension (no dot).
#[derive(Clone, Debug)]
pub struct FetchedAttachment {
    pub bytes: Bytes,
    pub extension: String,
}

/// Resolve an attachment reference into binary content.
///
/// Inline blobs decode locally; remote references perform one GET with no
/// retry. A non-success status fails with [`FetchError::Status`] so the
/// caller can report the code.
pub async fn fetch_attachment<C: HttpClient>(
    client: &C,
    attachment: &AttachmentRef,
) -> Result<FetchedAttachment> {
    match attachment {
        AttachmentRef::DataUri(raw) => decode_data_uri(raw),
        AttachmentRef::Remote(url) => fetch_remote(client, url).await,
    }
}

async fn fetch_remote<C: HttpClient>(client: &C, url: &str) -> Result<FetchedAttachment> {
    debug!(url, "fetching remote attachment");

    let response = client.get(url).await.map_err(|e| FetchError::Transport {
        url: url.to_owned(),
        source: Box::new(e),
    })?;

    if !(200..300).contains(&response.status) {
        return Err(FetchError::Status {
            url: url.to_owned(),
            status: response.status,
        });
    }

    let extension = extension_from_url(url).unwrap_or_else(|| {
        extension_for_mime(response.content_type.as_deref().unwrap_or("")).to_owned()
    });

    Ok(FetchedAttachment {
        bytes: response.body,
        extension,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::convert::Infallible;

    use super::*;
    use crate::http::HttpResponse;

    /// Canned-response client; unknown URLs answer 404.
    pub(crate) struct MockClient {
        responses: HashMap<String, HttpResponse>,
    }

    impl MockClient {
        pub(crate) fn new() -> Self {
            Self {
                responses: HashMap::new(),
            }
        }

        pub(crate) fn with(mut self, url: &str, response: HttpResponse) -> Self {
            self.responses.insert(url.to_owned(), response);
            self
        }
    }

    impl HttpClient for MockClient {
        type Error = Infallible;

        async fn get(&self, url: &str) -> std::result::Result<HttpResponse, Self::Error> {
            Ok(self.responses.get(url).cloned().unwrap_or(HttpResponse {
                status: 404,
                content_type: None,
                body: Bytes::new(),
            }))
        }
    }

    fn ok_response(content_type: Option<&str>, body: &'static [u8]) -> HttpResponse {
        HttpResponse {
            status: 200,
            content_type: content_type.map(str::to_owned),
            body: Bytes::from_static(body),
        }
    }

    #[tokio::test]
    async fn remote_extension_prefers_url_segment() {
        let client = MockClient::new().with(
            "https://cdn.example/report.pdf",
            ok_response(Some("application/octet-stream"), b"%PDF"),
        );
        let att = fetch_attachment(
            &client,
            &AttachmentRef::Remote("https://cdn.example/report.pdf".into()),
        )
        .await
        .unwrap();
        assert_eq!(att.extension, "pdf");
        assert_eq!(&att.bytes[..], b"%PDF");
    }

    #[tokio::test]
    async fn remote_extension_falls_back_to_content_type() {
        let client = MockClient::new().with(
            "https://cdn.example/download",
            ok_response(Some("image/png; charset=binary"), b"\x89PNG"),
        );
        let att = fetch_attachment(
            &client,
            &AttachmentRef::Remote("https://cdn.example/download".into()),
        )
        .await
        .unwrap();
        assert_eq!(att.extension, "png");
    }

    #[tokio::test]
    async fn non_success_status_reports_code() {
        let client = MockClient::new();
        let err = fetch_attachment(
            &client,
            &AttachmentRef::Remote("https://cdn.example/gone.png".into()),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, FetchError::Status { status: 404, .. }));
    }

    #[tokio::test]
    async fn data_uri_never_touches_the_network() {
        let client = MockClient::new();
        let att = fetch_attachment(
            &client,
            &AttachmentRef::DataUri("data:text/plain;base64,aGk=".into()),
        )
        .await
        .unwrap();
        assert_eq!(att.extension, "txt");
        assert_eq!(&att.bytes[..], b"hi");
    }
}
