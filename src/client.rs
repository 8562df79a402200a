//! Mobile and in-app browser detection from request headers.

use serde::{Deserialize, Serialize};

/// User agent fragments that mark a mobile client.
const MOBILE_KEYWORDS: &[&str] = &[
    "nokia", "sony", "ericsson", "mot", "samsung", "htc", "sgh", "lg", "sharp", "sie-",
    "philips", "panasonic", "alcatel", "lenovo", "iphone", "ipod", "blackberry", "meizu",
    "android", "netfront", "symbian", "ucweb", "windowsce", "palm", "operamini", "operamobi",
    "openwave", "nexusone", "cldc", "midp", "wap", "mobile",
];

/// Client families recognized by [`ClientHeaders::is_client`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClientKind {
    /// WeChat built-in browser.
    WeChat,
    /// Alipay built-in browser.
    Alipay,
    Ios,
    Android,
}

impl ClientKind {
    fn marker(&self) -> &'static str {
        match self {
            ClientKind::WeChat => "micromessenger",
            ClientKind::Alipay => "aliapp",
            ClientKind::Ios => "iphone",
            ClientKind::Android => "android",
        }
    }
}

/// The request headers that drive detection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientHeaders {
    /// `User-Agent`.
    pub user_agent: String,
    /// `X-Wap-Profile`, when sent.
    pub wap_profile: Option<String>,
    /// `Via`, when sent.
    pub via: Option<String>,
}

impl ClientHeaders {
    pub fn new(user_agent: impl Into<String>) -> Self {
        Self {
            user_agent: user_agent.into(),
            ..Default::default()
        }
    }

    /// Checks whether the request comes from a mobile device.
    pub fn is_mobile(&self) -> bool {
        if self.wap_profile.is_some() {
            return true;
        }
        if self
            .via
            .as_deref()
            .is_some_and(|via| via.to_ascii_lowercase().contains("wap"))
        {
            return true;
        }

        let agent = self.user_agent.to_ascii_lowercase();
        MOBILE_KEYWORDS.iter().any(|keyword| agent.contains(keyword))
    }

    /// Checks whether the request comes from a mobile client of `kind`.
    pub fn is_client(&self, kind: ClientKind) -> bool {
        self.is_mobile() && self.user_agent.to_ascii_lowercase().contains(kind.marker())
    }
}
