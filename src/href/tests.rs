#[cfg(test)]
mod tests {
    use crate::error::Error;
    use crate::href::{is_href, Href, HREF_REGEX};

    const ONEDRIVE: &str = "https://onedrive.live.com/redir?resid=abc&page=Edit&wd=what#hash";

    #[test]
    fn test_pattern_accepts_http_link() {
        assert!(HREF_REGEX.is_match(ONEDRIVE));
        assert!(is_href(ONEDRIVE));
    }

    #[test]
    fn test_pattern_rejects_non_link() {
        assert!(!HREF_REGEX.is_match("fjfla?jqljeq=jfdsuoq"));
        assert!(!is_href("ftp://example.com/file"));
    }

    #[test]
    fn test_new_with_valid_link() {
        assert!(Href::new(ONEDRIVE).is_ok());
    }

    #[test]
    fn test_new_with_invalid_link() {
        let err = Href::new("fjfla?jqljeq=jfdsuoq").unwrap_err();
        assert!(matches!(err, Error::InvalidUrlFormat { ref url, .. } if url == "fjfla?jqljeq=jfdsuoq"));
        assert!(err.to_string().contains("not an http(s) link"));
    }

    #[test]
    fn test_onedrive_components() {
        let href = Href::new(ONEDRIVE).unwrap();
        assert_eq!(href.protocol(), Some("https"));
        assert_eq!(href.host(), "onedrive.live.com");
        assert_eq!(href.port(), None);
        assert_eq!(href.path(), "/redir");
        assert_eq!(href.query(), Some("resid=abc&page=Edit&wd=what"));
        assert_eq!(href.fragment(), Some("hash"));
    }

    #[test]
    fn test_scheme_less_link_has_no_protocol() {
        let href = Href::new("//onedrive.live.com/redir?resid=abc&page=Edit&wd=what#hash").unwrap();
        assert_eq!(href.protocol(), None);
        assert_eq!(href.host(), "onedrive.live.com");
    }

    #[test]
    fn test_localhost_and_ip_hosts() {
        let href = Href::new("http://localhost:4200/dashboard?a=b&c=d#e").unwrap();
        assert_eq!(href.protocol(), Some("http"));
        assert_eq!(href.host(), "localhost");
        assert_eq!(href.port(), Some("4200"));
        assert_eq!(href.path(), "/dashboard");

        let href = Href::new("http://127.0.0.1:4200/dashboard?a=b&c=d#e").unwrap();
        assert_eq!(href.host(), "127.0.0.1");
    }

    #[test]
    fn test_colon_without_digits_has_no_port() {
        let href = Href::new("http://localhost:/dashboard").unwrap();
        assert_eq!(href.port(), None);
        assert_eq!(href.path(), "/dashboard");
    }

    #[test]
    fn test_empty_and_root_paths() {
        assert_eq!(Href::new("https://www.baidu.com?q=123").unwrap().path(), "");
        assert_eq!(Href::new("https://www.baidu.com/?q=123").unwrap().path(), "/");
    }

    #[test]
    fn test_missing_query() {
        assert_eq!(Href::new("https://onedrive.live.com/redir#hash").unwrap().query(), None);
        assert_eq!(Href::new("https://onedrive.live.com/redir?#hash").unwrap().query(), None);
    }

    #[test]
    fn test_query_with_chinese_characters() {
        let href = Href::new("https://onedrive.live.com/redir?resid=中文&page=Edit&wd=what#hash").unwrap();
        assert_eq!(href.query(), Some("resid=中文&page=Edit&wd=what"));
        assert!(href.as_str().contains("resid=%E4%B8%AD%E6%96%87"));
    }

    #[test]
    fn test_fragment() {
        assert_eq!(Href::new("https://onedrive.live.com/redir#hash").unwrap().fragment(), Some("hash"));
        assert_eq!(Href::new("https://onedrive.live.com/redir#").unwrap().fragment(), None);
        assert_eq!(Href::new("https://onedrive.live.com/redir").unwrap().fragment(), None);
    }

    #[test]
    fn test_embedded_delimiters_cut_query_and_fragment() {
        let href = Href::new("https://a.com/p?a=1?b=2#x#y").unwrap();
        assert_eq!(href.query(), Some("a=1"));
        assert_eq!(href.fragment(), Some("x"));
    }

    #[test]
    fn test_doubled_delimiters_are_skipped() {
        let href = Href::new("https://a.com/p??a=1##h").unwrap();
        assert_eq!(href.query(), Some("a=1"));
        assert_eq!(href.fragment(), Some("h"));

        let href = Href::new("https://a.com/p??##").unwrap();
        assert_eq!(href.query(), None);
        assert_eq!(href.fragment(), None);
    }

    #[test]
    fn test_is_href_checks_raw_string() {
        assert!(!is_href("https://a.com/#a\nb"));
        assert!(Href::new("https://a.com/#a\nb").is_ok());
        assert!(is_href("https://a.com/中文?q=汉字"));
    }

    #[test]
    fn test_path_with_space_is_encoded() {
        let href = Href::new("https://example.com/my docs/a.html").unwrap();
        assert_eq!(href.path(), "/my%20docs/a.html");
        assert_eq!(href.to_string(), "https://example.com/my%20docs/a.html");
    }

    #[test]
    fn test_query_data() {
        let href = Href::new("http://localhost:4200/dashboard?a=b&c=d&a=e").unwrap();
        let data = href.query_data();
        assert_eq!(data.len(), 2);
        assert_eq!(data.get("c").and_then(|v| v.as_single()), Some("d"));

        let href = Href::new("http://localhost:4200/dashboard").unwrap();
        assert!(href.query_data().is_empty());
    }

    #[test]
    fn test_conversions() {
        let parsed: Href = ONEDRIVE.parse().unwrap();
        let converted = Href::try_from(ONEDRIVE).unwrap();
        assert_eq!(parsed, converted);
        assert!(Href::try_from(String::from("not a link")).is_err());
    }

    #[test]
    fn test_serialize_components() {
        let href = Href::new("http://localhost:4200/dashboard?a=b#e").unwrap();
        let json = serde_json::to_value(&href).unwrap();
        assert_eq!(json["url"], "http://localhost:4200/dashboard?a=b#e");
        assert_eq!(json["port"], "4200");
        assert_eq!(json["query"], "a=b");
        assert!(json["protocol"].is_string());
    }
}
