use url::Url;

use crate::error::ConfigError;

/// Host serving both the index documents and the font files.
pub const DEFAULT_BASE_URL: &str = "https://icon-font-assets.oss-cn-beijing.aliyuncs.com";

/// Index version looked up when none is given.
pub const DEFAULT_INDEX_VERSION: &str = "0.0.1";

/// Location of the TrueType font relative to the base URL.
pub const DEFAULT_ASSET_PATH: [&str; 2] = ["icon-font-assets", "iconfont.ttf"];

/// URL layout of the asset host.
///
/// ```
/// use iconfont_assets::AssetEndpoints;
///
/// let endpoints = AssetEndpoints::default();
/// assert_eq!(
///     endpoints.index_url("0.0.1"),
///     "https://icon-font-assets.oss-cn-beijing.aliyuncs.com/index/0.0.1"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetEndpoints {
    base: Url,
}

impl AssetEndpoints {
    pub fn new(base_url: impl AsRef<str>) -> Result<Self, ConfigError> {
        let raw = base_url.as_ref();
        let base = Url::parse(raw).map_err(|source| ConfigError::ParseUrl {
            url: raw.to_string(),
            source,
        })?;

        let invalid = |reason| ConfigError::InvalidUrl {
            url: raw.to_string(),
            reason,
        };
        if !matches!(base.scheme(), "http" | "https") {
            return Err(invalid("scheme must be http or https"));
        }
        if base.host_str().is_none_or(str::is_empty) {
            return Err(invalid("missing host"));
        }

        Ok(Self { base })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// `{base}/index/{version}`
    pub fn index_url(&self, version: &str) -> String {
        let version = version.split('/').filter(|s| !s.is_empty());
        self.join(std::iter::once("index").chain(version))
    }

    /// `{base}/icon-font-assets/iconfont.ttf`
    pub fn asset_url(&self) -> String {
        self.join(DEFAULT_ASSET_PATH)
    }

    fn join<'a>(&self, segments: impl IntoIterator<Item = &'a str>) -> String {
        let mut url = self.base.clone();
        // http(s) URLs always have a path, checked in `new`
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url.into()
    }
}

impl Default for AssetEndpoints {
    fn default() -> Self {
        Self {
            base: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_urls() {
        let endpoints = AssetEndpoints::default();
        assert_eq!(
            endpoints.base_url().host_str(),
            Some("icon-font-assets.oss-cn-beijing.aliyuncs.com")
        );
        assert_eq!(
            endpoints.asset_url(),
            "https://icon-font-assets.oss-cn-beijing.aliyuncs.com/icon-font-assets/iconfont.ttf"
        );
        assert_eq!(
            endpoints.index_url(DEFAULT_INDEX_VERSION),
            "https://icon-font-assets.oss-cn-beijing.aliyuncs.com/index/0.0.1"
        );
    }

    #[test]
    fn test_trailing_slashes_collapse() {
        let endpoints = AssetEndpoints::new("http://127.0.0.1:8080/").unwrap();
        assert_eq!(endpoints.index_url("/1.2.0/"), "http://127.0.0.1:8080/index/1.2.0");
    }

    #[test]
    fn test_base_path_is_kept() {
        let endpoints = AssetEndpoints::new("http://localhost:8080/mirror").unwrap();
        assert_eq!(
            endpoints.asset_url(),
            "http://localhost:8080/mirror/icon-font-assets/iconfont.ttf"
        );
    }

    #[test]
    fn test_query_stays_after_path() {
        let endpoints = AssetEndpoints::new("https://host/mirror?token=1").unwrap();
        assert_eq!(endpoints.index_url("0.0.1"), "https://host/mirror/index/0.0.1?token=1");
    }

    #[test]
    fn test_malformed_base_rejected() {
        for url in ["https://[::1", "https://host:notaport", "assets.local", "https://"] {
            let err = AssetEndpoints::new(url).unwrap_err();
            assert!(matches!(err, ConfigError::ParseUrl { .. }), "{url}: {err}");
        }
    }

    #[test]
    fn test_bad_scheme_rejected() {
        let err = AssetEndpoints::new("file:///tmp/assets").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidUrl { .. }));
        assert!(err.to_string().contains("file:///tmp/assets"));
    }
}
