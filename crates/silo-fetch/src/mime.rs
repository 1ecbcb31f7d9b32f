/// Fallback extension for unknown or missing MIME types.
pub const FALLBACK_EXTENSION: &str = "file";

/// Map a content-type string to a short lowercase extension (no dot).
///
/// Parameters after `;` are ignored. Unknown or empty input yields
/// [`FALLBACK_EXTENSION`]; this never fails.
pub fn extension_for_mime(mime: &str) -> &'static str {
    let essence = mime
        .split(';')
        .next()
        .unwrap_or("")
        .trim()
        .to_ascii_lowercase();

    match essence.as_str() {
        "application/pdf" => "pdf",
        "image/png" => "png",
        "image/jpeg" => "jpg",
        "image/gif" => "gif",
        "image/webp" => "webp",
        "text/plain" => "txt",
        "text/markdown" => "md",
        "text/html" => "html",
        "application/zip" => "zip",
        "application/octet-stream" => "bin",
        "application/msword" => "doc",
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document" => "docx",
        "application/vnd.ms-excel" => "xls",
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet" => "xlsx",
        "application/json" => "json",
        _ => FALLBACK_EXTENSION,
    }
}

/// Infer an extension from a URL's trailing path segment.
///
/// Query and fragment are stripped first. Only plausible extensions count:
/// 1 to 5 ASCII alphanumeric characters after the last dot.
pub fn extension_from_url(url: &str) -> Option<String> {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    let segment = path.rsplit('/').next()?;
    let (stem, ext) = segment.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() || ext.len() > 5 {
        return None;
    }
    if !ext.chars().all(|c| c.is_ascii_alphanumeric()) {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}
