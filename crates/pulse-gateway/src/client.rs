//! HTTP implementation of the content gateway port

use async_trait::async_trait;
use tracing::instrument;

use pulse_common::ContentServiceConfig;
use pulse_core::{ContentBatch, ContentGateway, ContentQuery, GatewayError, GatewayResult, RequestContext};

/// Identity headers forwarded verbatim to the content service
const HEADER_USER_ID: &str = "x-userid";
const HEADER_LOCALE: &str = "x-localecode";
const HEADER_ORIGIN_HOST: &str = "x-origin-host";

/// HTTP client for the content-management service.
///
/// One instance is shared across the whole app; `reqwest::Client` holds the
/// connection pool internally.
#[derive(Debug, Clone)]
pub struct HttpContentGateway {
    http: reqwest::Client,
    base_url: String,
}

impl HttpContentGateway {
    /// Build a gateway from config. The per-request timeout is set on the
    /// underlying client, so a stalled content service surfaces as
    /// [`GatewayError::Timeout`] instead of hanging feed requests.
    pub fn from_config(config: &ContentServiceConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(config.timeout()).build()?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

fn map_request_error(err: reqwest::Error) -> GatewayError {
    if err.is_timeout() {
        GatewayError::Timeout
    } else if err.is_decode() {
        GatewayError::Malformed(err.to_string())
    } else {
        GatewayError::Upstream(err.to_string())
    }
}

#[async_trait]
impl ContentGateway for HttpContentGateway {
    #[instrument(skip(self, ctx, query), fields(ids = query.content_ids.len()))]
    async fn find_by_ids(
        &self,
        ctx: &RequestContext,
        query: ContentQuery,
    ) -> GatewayResult<ContentBatch> {
        let mut request = self
            .http
            .post(self.endpoint("content/find"))
            .header(HEADER_USER_ID, ctx.user_id.to_string())
            .header(HEADER_LOCALE, &ctx.locale)
            .json(&query);

        if let Some(authorization) = &ctx.authorization {
            request = request.header(reqwest::header::AUTHORIZATION, authorization);
        }
        if let Some(origin_host) = &ctx.origin_host {
            request = request.header(HEADER_ORIGIN_HOST, origin_host);
        }

        let response = request.send().await.map_err(map_request_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::Upstream(format!(
                "status {}: {}",
                status.as_u16(),
                body
            )));
        }

        response.json::<ContentBatch>().await.map_err(map_request_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config(base_url: &str) -> ContentServiceConfig {
        ContentServiceConfig {
            base_url: base_url.to_string(),
            timeout_ms: 1000,
        }
    }

    #[test]
    fn test_base_url_is_normalized() {
        let gateway = HttpContentGateway::from_config(&test_config("http://content:7772/")).unwrap();
        assert_eq!(gateway.endpoint("content/find"), "http://content:7772/content/find");

        let gateway = HttpContentGateway::from_config(&test_config("http://content:7772")).unwrap();
        assert_eq!(gateway.endpoint("/content/find"), "http://content:7772/content/find");
    }

    #[test]
    fn test_gateway_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpContentGateway>();
    }
}
