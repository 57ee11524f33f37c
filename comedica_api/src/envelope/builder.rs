use serde::Serialize;
use url::Url;
use uuid::Uuid;

use crate::query::{RequestCommon, SortDirection};

use super::endpoint::{Channel, Endpoint};

/// Pagination block sent to paginated endpoints. All four fields are always present.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationBlock {
    pub page: u32,
    pub size: u32,
    pub sort_by: String,
    pub sort_direction: SortDirection,
}

/// Routing metadata plus the feature payload for one outbound call.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestEnvelope<R> {
    pub uuid: Uuid,
    pub page_id: u32,
    pub channel: Channel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    pub request: R,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<PaginationBlock>,
}

/// Builds the envelope for `endpoint`, merging the caller's overrides over the
/// endpoint's pagination policy. Endpoints without a policy never carry a
/// pagination block.
pub fn build_envelope<R: Serialize>(
    endpoint: Endpoint,
    request: R,
    common: &RequestCommon,
) -> RequestEnvelope<R> {
    let descriptor = endpoint.descriptor();
    let pagination = descriptor.pagination.map(|policy| PaginationBlock {
        page: common.page.unwrap_or(policy.page),
        size: common.size.unwrap_or(policy.size),
        sort_by: common
            .sort_by
            .clone()
            .unwrap_or_else(|| policy.sort_by.to_string()),
        sort_direction: common.sort_direction.unwrap_or(policy.sort_direction),
    });
    if pagination.is_none() && (common.page.is_some() || common.size.is_some()) {
        tracing::debug!("{:?} is not paginated, ignoring pagination overrides", endpoint);
    }

    RequestEnvelope {
        uuid: Uuid::new_v4(),
        page_id: descriptor.page_id,
        channel: descriptor.channel,
        request_id: common.request_id.clone(),
        request,
        pagination,
    }
}

impl<R> RequestEnvelope<R> {
    /// Routing metadata as flat key/value pairs, for query strings, forms and multipart parts.
    pub fn metadata_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![
            ("uuid".to_string(), self.uuid.to_string()),
            ("pageId".to_string(), self.page_id.to_string()),
            ("channel".to_string(), self.channel.code().to_string()),
        ];
        if let Some(request_id) = &self.request_id {
            pairs.push(("requestId".to_string(), request_id.clone()));
        }
        pairs
    }

    /// Appends the routing metadata to the URL query string.
    pub fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        for (key, value) in self.metadata_pairs() {
            url.query_pairs_mut().append_pair(&key, &value);
        }
        url
    }
}
