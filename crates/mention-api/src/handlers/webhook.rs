//! Webhook handler
//!
//! Receives bot callbacks, and on an `@all` trigger replies with a message
//! mentioning every eligible group member.

use axum::{body::Bytes, extract::State, http::StatusCode};
use mention_common::AppError;
use mention_core::entities::{BotPost, IncomingMessage};
use mention_core::error::DomainError;
use mention_core::mention::{
    detect, fetch_failed_text, no_eligible_text, render_intro, Decision, MemberFilter, MentionBuilder,
};
use serde_json::Value;
use tracing::{debug, error, info, instrument, warn};

use crate::response::ApiResult;
use crate::state::AppState;

/// Handle a bot callback
///
/// POST /
#[instrument(skip_all)]
pub async fn receive_message(State(state): State<AppState>, body: Bytes) -> ApiResult<StatusCode> {
    let Some(message) = parse_payload(&body)? else {
        debug!("Empty callback payload");
        return Ok(StatusCode::NO_CONTENT);
    };

    match detect(&message) {
        Decision::Ignore => {
            debug!(sender_id = %message.sender_id, sender_type = ?message.sender_type, "No trigger");
            return Ok(StatusCode::OK);
        }
        Decision::Trigger => {
            info!(sender_id = %message.sender_id, sender = message.sender_name(), "Mention-all triggered");
        }
    }

    mention_all(&state, &message).await?;
    Ok(StatusCode::OK)
}

/// Parse a callback body; `None` for an empty body, `null`, or `{}`
fn parse_payload(body: &[u8]) -> Result<Option<IncomingMessage>, AppError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }

    let value: Value = serde_json::from_slice(body).map_err(AppError::malformed)?;
    match &value {
        Value::Null => return Ok(None),
        Value::Object(fields) if fields.is_empty() => return Ok(None),
        Value::Object(_) => {}
        other => {
            return Err(AppError::malformed(format!(
                "expected a JSON object, found {}",
                json_kind(other)
            )))
        }
    }

    serde_json::from_value(value).map(Some).map_err(AppError::malformed)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Fetch, build and post the mention reply
async fn mention_all(state: &AppState, message: &IncomingMessage) -> Result<(), AppError> {
    let config = state.config();
    let sender = message.sender_name();

    // Nothing can be posted without a bot id, not even an apology
    let bot_id = config.platform.bot_id()?;

    let credentials = match config.platform.group_credentials() {
        Ok(credentials) => credentials,
        Err(e) => {
            send(state, &BotPost::plain(bot_id, fetch_failed_text(sender))).await;
            return Err(e);
        }
    };

    let members = match state
        .members()
        .fetch_members(credentials.group_id, credentials.access_token)
        .await
    {
        Ok(members) => members,
        Err(e) => {
            warn!(error = %e, "Could not fetch group members");
            send(state, &BotPost::plain(bot_id, fetch_failed_text(sender))).await;
            return Err(e.into());
        }
    };

    let mut filter = MemberFilter::new(&config.mentions.blacklist);
    if config.mentions.exclude_sender && !message.sender_id.is_empty() {
        filter = filter.excluding(&message.sender_id);
    }

    let intro = render_intro(&config.mentions.intro_template, sender);
    let post = match MentionBuilder::new(config.mentions.offset_unit).build_filtered(&intro, &members, &filter) {
        Ok(reply) => {
            info!(members = members.len(), mentioned = reply.attachment.len(), "Built mention reply");
            BotPost::with_mentions(bot_id, reply.text, reply.attachment)
        }
        Err(DomainError::NoEligibleMembers) => {
            info!(members = members.len(), "Nobody eligible to mention");
            BotPost::plain(bot_id, no_eligible_text(sender))
        }
        Err(e) => return Err(e.into()),
    };

    send(state, &post).await;
    Ok(())
}

/// Post a message; the outcome is logged and never changes the response
async fn send(state: &AppState, post: &BotPost) {
    match state.dispatcher().dispatch(post).await {
        Ok(()) => info!(outcome = "dispatched", "Bot post sent"),
        Err(e) => error!(outcome = "dispatch_failed", error = %e, "Bot post failed"),
    }
}
