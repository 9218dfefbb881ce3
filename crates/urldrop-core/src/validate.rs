//! URI validation against a closed set of schemes.
//!
//! Purely syntactic: the candidate must parse as an absolute URI and use one of
//! [`ACCEPTED_SCHEMES`]. Windows drive paths (`C:\dir\f.txt`) and UNC paths
//! (`\\server\share`) count as implicit `file` URIs. Nothing is resolved or
//! fetched.

use url::Url;

/// Schemes a link may use to be kept.
pub const ACCEPTED_SCHEMES: &[&str] = &[
    "https", "http", "ftp", "mailto", "file", "news", "nntp", "gopher", "net.pipe", "net.tcp",
];

/// Schemes that address a server and therefore need a non-empty host.
const HOST_SCHEMES: &[&str] = &["https", "http", "ftp", "gopher", "nntp", "net.pipe", "net.tcp"];

/// Returns true if `candidate` is an absolute URI with an accepted scheme.
///
/// # Examples
///
/// - `validate("https://example.com/path")` → `true`
/// - `validate("mailto:a@b.com")` → `true`
/// - `validate("javascript:x")` → `false`
/// - `validate("not a url")` → `false`
/// - `validate("C:\\dir\\f.txt")` → `true`
pub fn validate(candidate: &str) -> bool {
    if is_windows_file_path(candidate) {
        return true;
    }
    match Url::parse(candidate) {
        Ok(url) => is_accepted(&url),
        Err(_) => false,
    }
}

/// Scheme and shape check on an already parsed URL.
pub fn is_accepted(url: &Url) -> bool {
    let scheme = url.scheme();
    if !ACCEPTED_SCHEMES.contains(&scheme) {
        return false;
    }
    if HOST_SCHEMES.contains(&scheme) {
        return url.host_str().is_some_and(|h| !h.is_empty());
    }
    // mailto:, news: and file: have no authority requirement, but an empty
    // opaque path (e.g. bare "mailto:") addresses nothing.
    scheme == "file" || !url.path().is_empty()
}

/// Drive-letter path (`C:\\`, `c:/`) or UNC path with a server name.
fn is_windows_file_path(candidate: &str) -> bool {
    match candidate.as_bytes() {
        [drive, b':', b'\\' | b'/', ..] => drive.is_ascii_alphabetic(),
        [b'\\', b'\\', rest @ ..] => {
            let server = rest.split(|&c| c == b'\\' || c == b'/').next().unwrap_or_default();
            !server.is_empty() && !server.iter().any(u8::is_ascii_whitespace)
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_every_listed_scheme() {
        for candidate in [
            "https://example.com/path",
            "http://example.com",
            "ftp://ftp.example.org/pub/file.tar.gz",
            "mailto:a@b.com",
            "file:///home/user/notes.txt",
            "news:comp.lang.rust",
            "nntp://news.example.com/comp.lang.rust",
            "gopher://gopher.floodgap.com/",
            "net.pipe://localhost/service",
            "net.tcp://server:808/service",
        ] {
            assert!(validate(candidate), "expected {candidate} to be accepted");
        }
    }

    #[test]
    fn rejects_strings_without_accepted_scheme() {
        for candidate in [
            "not a url",
            "javascript:x",
            "notaurl",
            "example.com/path",
            "/relative/path",
            "data:text/plain,hello",
            "ws://example.com/socket",
            "C:relative\\notepad.exe",
            "C:",
            "",
        ] {
            assert!(!validate(candidate), "expected {candidate:?} to be rejected");
        }
    }

    #[test]
    fn windows_paths_are_implicit_file_uris() {
        assert!(validate("C:\\dir\\f.txt"));
        assert!(validate("d:/Users/me/notes.txt"));
        assert!(validate("\\\\server\\share\\f.txt"));
        assert!(validate("\\\\fileserver"));
        assert!(!validate("\\\\"));
        assert!(!validate("\\\\\\share"));
        assert!(!validate("1:\\dir"));
    }

    #[test]
    fn rejects_server_schemes_without_host() {
        assert!(!validate("http://"));
        assert!(!validate("gopher:no-authority"));
        assert!(!validate("net.tcp:service"));
    }

    #[test]
    fn rejects_bare_mailto() {
        assert!(!validate("mailto:"));
    }

    #[test]
    fn scheme_is_case_insensitive() {
        assert!(validate("HTTPS://EXAMPLE.COM/"));
        assert!(validate("MailTo:someone@example.com"));
    }
}
