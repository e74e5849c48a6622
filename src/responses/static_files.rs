// responses/static_files.rs
use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};
use mime::Mime;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Serve `rel` from `root`. Anything that could escape `root` is a 404.
pub fn static_file_response(root: &Path, rel: &str) -> ResultResp {
    let path = resolve(root, rel)
        .filter(|p| p.is_file())
        .ok_or(ServerError::NotFound)?;

    let bytes = std::fs::read(&path).map_err(|e| match e.kind() {
        ErrorKind::NotFound | ErrorKind::PermissionDenied => ServerError::NotFound,
        _ => ServerError::Internal(format!("read {}: {e}", path.display())),
    })?;

    let content_type = mime_for(&path);
    let mut builder = ResponseBuilder::new()
        .status(200)
        .header("Content-Type", content_type.as_ref());

    // The resume is offered as a download rather than opened inline.
    if content_type == mime::APPLICATION_PDF {
        let filename = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("document.pdf");
        builder = builder.header(
            "Content-Disposition",
            format!("attachment; filename=\"{filename}\""),
        );
    }

    builder
        .body(Body::from(bytes))
        .map_err(|e| ServerError::Internal(format!("build static response: {e}")))
}

fn resolve(root: &Path, rel: &str) -> Option<PathBuf> {
    let mut path = root.to_path_buf();
    let mut pushed = false;

    for segment in rel.split('/') {
        match segment {
            "" => continue,
            "." | ".." => return None,
            s if s.contains('\\') || s.contains('\0') || s.starts_with('.') => return None,
            s => {
                path.push(s);
                pushed = true;
            }
        }
    }

    pushed.then_some(path)
}

pub fn mime_for(path: &Path) -> Mime {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext.as_deref() {
        Some("css") => mime::TEXT_CSS_UTF_8,
        Some("js") => mime::APPLICATION_JAVASCRIPT_UTF_8,
        Some("html") => mime::TEXT_HTML_UTF_8,
        Some("txt") => mime::TEXT_PLAIN_UTF_8,
        Some("json") => mime::APPLICATION_JSON,
        Some("pdf") => mime::APPLICATION_PDF,
        Some("svg") => mime::IMAGE_SVG,
        Some("png") => mime::IMAGE_PNG,
        Some("jpg") | Some("jpeg") => mime::IMAGE_JPEG,
        Some("gif") => mime::IMAGE_GIF,
        Some("woff") => mime::FONT_WOFF,
        Some("woff2") => mime::FONT_WOFF2,
        Some("ico") => "image/x-icon"
            .parse()
            .unwrap_or(mime::APPLICATION_OCTET_STREAM),
        _ => mime::APPLICATION_OCTET_STREAM,
    }
}
