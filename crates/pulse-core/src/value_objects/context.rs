//! Per-request identity context injected by the upstream auth layer

use uuid::Uuid;

/// Identity and locale for one inbound request.
///
/// The auth/routing layer in front of this service validates the caller and
/// injects these as headers; nothing in this crate re-validates them. The
/// authorization token and origin host are carried only so outbound gateway
/// calls can forward them.
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub user_id: Uuid,
    pub locale: String,
    pub authorization: Option<String>,
    pub origin_host: Option<String>,
}

impl RequestContext {
    /// Create a context with the default locale and no forwarded headers
    #[must_use]
    pub fn new(user_id: Uuid) -> Self {
        Self {
            user_id,
            locale: "en-us".to_string(),
            authorization: None,
            origin_host: None,
        }
    }

    #[must_use]
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }
}
