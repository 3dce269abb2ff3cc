use clap::Parser;
use iconfont_assets::data::{DEFAULT_BASE_URL, DEFAULT_INDEX_VERSION};
use iconfont_assets::{AssetEndpoints, ClientSetting, ConfigError};

use crate::run::Plan;

#[derive(Clone, Debug, Parser)]
#[command(name = "iconfont-fetch", version = env!("CARGO_PKG_VERSION"), about, long_about = None)]
pub struct App {
    /// Asset host serving the index and the font.
    #[arg(long, value_name = "URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Index version to look up.
    #[arg(long, value_name = "VERSION", default_value = DEFAULT_INDEX_VERSION)]
    pub index_version: String,

    /// Font to download [default: <base-url>/icon-font-assets/iconfont.ttf]
    #[arg(long, value_name = "URL")]
    pub asset_url: Option<String>,

    /// Proxy for outgoing requests; https proxies carry HTTPS traffic, others HTTP.
    #[arg(long = "proxy", value_name = "URL")]
    pub proxies: Vec<String>,
}

impl App {
    pub fn endpoints(&self) -> Result<AssetEndpoints, ConfigError> {
        AssetEndpoints::new(self.base_url.as_str())
    }

    pub fn client_setting(&self) -> ClientSetting {
        ClientSetting {
            proxies: (!self.proxies.is_empty()).then(|| self.proxies.clone()),
        }
    }

    pub fn plan(&self, endpoints: &AssetEndpoints) -> Plan {
        Plan {
            version: self.index_version.clone(),
            asset_url: self
                .asset_url
                .clone()
                .unwrap_or_else(|| endpoints.asset_url()),
        }
    }
}
