//! Framework-agnostic request descriptor.
//!
//! The gate never sees the hosting framework's request type. The adapter
//! that embeds the gate builds one of these per request and applies the
//! resulting [`Decision`](crate::gate::decision::Decision) itself.

/// Generic inbound request: method, origin, path, and headers.
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    /// HTTP method, as received.
    pub method: String,

    /// URL scheme of the original request ("http" or "https").
    pub scheme: String,

    /// Host of the original request, including port if present.
    pub host: String,

    /// Request path, absolute, without query string.
    pub path: String,

    /// Header name/value pairs, as received.
    pub headers: Vec<(String, String)>,
}

impl RequestDescriptor {
    /// Build a descriptor with no headers.
    pub fn new(
        method: impl Into<String>,
        scheme: impl Into<String>,
        host: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            method: method.into(),
            scheme: scheme.into(),
            host: host.into(),
            path: path.into(),
            headers: Vec::new(),
        }
    }

    /// Append a header.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Look up a header value by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Extract a cookie value by name from the `Cookie` header.
    ///
    /// Pairs are split on `;` and matched on the exact name. Returns the
    /// first match; `None` if the header or the cookie is absent.
    pub fn cookie(&self, name: &str) -> Option<&str> {
        let header = self.header("cookie")?;
        for pair in header.split(';') {
            let pair = pair.trim();
            if let Some(eq_pos) = pair.find('=') {
                if pair[..eq_pos].trim() == name {
                    return Some(pair[eq_pos + 1..].trim());
                }
            }
        }
        None
    }

    /// Origin of the original request: `"{scheme}://{host}"`.
    pub fn origin(&self) -> String {
        format!("{}://{}", self.scheme, self.host)
    }
}
