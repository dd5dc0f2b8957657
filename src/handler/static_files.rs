//! Static file resolution and serving.
//!
//! Maps a request path onto the content root, confines the result to that
//! root, and turns the outcome into a response: file bytes, an index file,
//! a generated directory listing, a trailing-slash redirect, or 404.

use std::path::{Path, PathBuf};

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use tokio::fs;

use crate::handler::ServerContext;
use crate::http::{self, mime};
use crate::logger;

/// Outcome of mapping a request path onto the content root
enum Resolved {
    File(PathBuf),
    /// Existing directory requested without its trailing slash
    RedirectToDir,
    /// Directory with no usable index file
    Listing(PathBuf),
    NotFound,
}

/// Serve the resource at `raw_path` (the undecoded URL path).
pub async fn serve_path(
    ctx: &ServerContext,
    raw_path: &str,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let decoded = percent_decode(raw_path);

    match resolve(ctx, &decoded) {
        Resolved::File(path) => serve_file(&path, is_head).await,
        Resolved::RedirectToDir => http::build_redirect_response(&format!("{raw_path}/")),
        Resolved::Listing(dir) => serve_listing(&dir, &decoded, is_head).await,
        Resolved::NotFound => http::build_404_response(),
    }
}

fn resolve(ctx: &ServerContext, decoded_path: &str) -> Resolved {
    let relative = decoded_path.trim_start_matches('/');
    let joined = ctx.root.join(relative);

    // Traversal guard: whatever `..` segments or symlinks did to the joined
    // path, the canonical result must still live under the canonical root.
    let Some(path) = confine_to_root(&ctx.root, &joined) else {
        return Resolved::NotFound;
    };

    if path.is_file() {
        return Resolved::File(path);
    }

    if path.is_dir() {
        if !relative.is_empty() && !decoded_path.ends_with('/') {
            return Resolved::RedirectToDir;
        }
        for index in &ctx.index_files {
            let candidate = path.join(index);
            if candidate.is_file() {
                return Resolved::File(candidate);
            }
        }
        if ctx.directory_listing {
            return Resolved::Listing(path);
        }
    }

    Resolved::NotFound
}

/// Canonicalize `candidate` and require it to stay under `root`.
///
/// Canonicalization fails for paths that do not exist, which folds the
/// missing-file case into `None` alongside escapes.
fn confine_to_root(root: &Path, candidate: &Path) -> Option<PathBuf> {
    let canonical = candidate.canonicalize().ok()?;
    canonical.starts_with(root).then_some(canonical)
}

async fn serve_file(path: &Path, is_head: bool) -> Response<Full<Bytes>> {
    match fs::read(path).await {
        Ok(content) => {
            let content_type = mime::content_type_for(path.extension().and_then(|e| e.to_str()));
            http::build_file_response(content, content_type, is_head)
        }
        Err(e) => {
            logger::log_error(&format!("Failed to read '{}': {e}", path.display()));
            http::build_404_response()
        }
    }
}

async fn serve_listing(dir: &Path, request_path: &str, is_head: bool) -> Response<Full<Bytes>> {
    match render_listing(dir, request_path).await {
        Some(html) => http::build_html_response(html, is_head),
        None => http::build_404_response(),
    }
}

/// Render a directory as an HTML index page, entries sorted by name with
/// directories suffixed `/`.
async fn render_listing(dir: &Path, request_path: &str) -> Option<String> {
    let mut reader = fs::read_dir(dir).await.ok()?;

    let mut entries: Vec<(String, bool)> = Vec::new();
    while let Ok(Some(entry)) = reader.next_entry().await {
        let name = entry.file_name().to_string_lossy().into_owned();
        let is_dir = entry
            .file_type()
            .await
            .map(|t| t.is_dir())
            .unwrap_or(false);
        entries.push((name, is_dir));
    }
    entries.sort();

    let title = format!("Directory listing for {request_path}");
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str(&format!("<title>{}</title>\n</head>\n<body>\n", escape_html(&title)));
    html.push_str(&format!("<h1>{}</h1>\n<hr>\n<ul>\n", escape_html(&title)));

    for (name, is_dir) in entries {
        let mut href = percent_encode(&name);
        let mut label = name;
        if is_dir {
            href.push('/');
            label.push('/');
        }
        html.push_str(&format!(
            "<li><a href=\"{href}\">{}</a></li>\n",
            escape_html(&label)
        ));
    }

    html.push_str("</ul>\n<hr>\n</body>\n</html>\n");
    Some(html)
}

/// Decode `%XX` escapes in a request path. Malformed escapes pass through
/// unchanged; invalid UTF-8 is replaced rather than rejected.
fn percent_decode(path: &str) -> String {
    let bytes = path.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());

    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            if let (Some(hi), Some(lo)) = (hex_value(bytes[i + 1]), hex_value(bytes[i + 2])) {
                out.push(hi * 16 + lo);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }

    String::from_utf8_lossy(&out).into_owned()
}

fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

/// Percent-encode a file name for use in a listing link.
fn percent_encode(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for &byte in name.as_bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char);
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
