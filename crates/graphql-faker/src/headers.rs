use http::{HeaderMap, HeaderName};

/// The request headers a client chose to forward, available to resolvers through the request
/// data.
#[derive(Debug, Clone, Default)]
pub struct ForwardedHeaders(HeaderMap);

impl ForwardedHeaders {
    /// Keep the headers named in `allow_list`. Header names are case-insensitive.
    pub fn select(headers: &HeaderMap, allow_list: &[HeaderName]) -> Self {
        let mut forwarded = HeaderMap::new();

        for name in allow_list {
            for value in headers.get_all(name) {
                forwarded.append(name.clone(), value.clone());
            }
        }

        Self(forwarded)
    }

    pub fn as_header_map(&self) -> &HeaderMap {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use http::{HeaderMap, HeaderName, HeaderValue};

    use super::ForwardedHeaders;

    #[test]
    fn only_allowed_headers_are_kept() {
        let mut headers = HeaderMap::new();
        headers.insert("authorization", HeaderValue::from_static("Bearer token"));
        headers.insert("x-request-id", HeaderValue::from_static("42"));
        headers.insert("cookie", HeaderValue::from_static("secret"));

        let allow_list = [
            HeaderName::from_static("authorization"),
            HeaderName::from_static("x-request-id"),
        ];

        let forwarded = ForwardedHeaders::select(&headers, &allow_list);

        let forwarded = forwarded.as_header_map();

        assert_eq!(forwarded.len(), 2);
        assert_eq!(forwarded["Authorization"], "Bearer token");
        assert_eq!(forwarded["x-request-id"], "42");
        assert!(!forwarded.contains_key("cookie"));
    }

    #[test]
    fn repeated_headers_are_all_forwarded() {
        let mut headers = HeaderMap::new();
        headers.append("x-tag", HeaderValue::from_static("a"));
        headers.append("x-tag", HeaderValue::from_static("b"));

        let forwarded = ForwardedHeaders::select(&headers, &[HeaderName::from_static("x-tag")]);

        assert_eq!(forwarded.as_header_map().get_all("x-tag").iter().count(), 2);
    }
}
