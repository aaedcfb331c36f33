//! GroupMe implementation of MessageDispatcher

use async_trait::async_trait;
use tracing::{debug, instrument, warn};

use mention_core::entities::BotPost;
use mention_core::error::DomainError;
use mention_core::traits::{MessageDispatcher, PlatformResult};

use super::error::{describe_status, dispatch_error};
use super::GroupMeClient;

#[async_trait]
impl MessageDispatcher for GroupMeClient {
    #[instrument(skip(self, post), fields(mentions = post.attachments.iter().map(|a| a.len()).sum::<usize>()))]
    async fn dispatch(&self, post: &BotPost) -> PlatformResult<()> {
        let response = self
            .http()
            .post(self.url("bots/post"))
            .json(post)
            .send()
            .await
            .map_err(dispatch_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(%status, "Bot post rejected");
            return Err(DomainError::DispatchFailed(describe_status(status, &body)));
        }

        debug!(%status, "Bot post accepted");
        Ok(())
    }
}
