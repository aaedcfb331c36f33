//! GroupMe implementation of MemberSource

use async_trait::async_trait;
use tracing::{debug, instrument, warn};

use mention_core::entities::Member;
use mention_core::error::DomainError;
use mention_core::traits::{MemberSource, PlatformResult};

use crate::mappers::members_from_group;
use crate::models::GroupEnvelope;

use super::error::{describe_status, fetch_error};
use super::GroupMeClient;

#[async_trait]
impl MemberSource for GroupMeClient {
    #[instrument(skip(self, access_token))]
    async fn fetch_members(&self, group_id: &str, access_token: &str) -> PlatformResult<Vec<Member>> {
        let response = self
            .http()
            .get(self.url(&format!("groups/{group_id}")))
            .query(&[("token", access_token)])
            .send()
            .await
            .map_err(fetch_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(%status, "Member fetch rejected");
            return Err(DomainError::MemberFetchFailed(describe_status(status, &body)));
        }

        let envelope: GroupEnvelope = response.json().await.map_err(fetch_error)?;
        let group = envelope
            .response
            .ok_or_else(|| DomainError::member_fetch("response carried no group"))?;

        let members = members_from_group(group);
        debug!(count = members.len(), "Fetched group members");
        Ok(members)
    }
}
