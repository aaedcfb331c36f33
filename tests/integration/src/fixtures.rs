//! Test fixtures and data generators
//!
//! Provides reusable payloads for integration tests.

use serde_json::{json, Value};

pub const GROUP_ID: &str = "group-42";
pub const ACCESS_TOKEN: &str = "token-42";
pub const BOT_ID: &str = "bot-42";

/// A user message callback as the platform delivers it
pub fn callback(text: &str, sender_id: &str, name: &str) -> Value {
    json!({
        "attachments": [],
        "avatar_url": null,
        "created_at": 1_700_000_000,
        "group_id": GROUP_ID,
        "id": "msg-1",
        "name": name,
        "sender_id": sender_id,
        "sender_type": "user",
        "source_guid": "guid-1",
        "system": false,
        "text": text,
        "user_id": sender_id
    })
}

/// A callback for a message posted by a bot
pub fn bot_callback(text: &str) -> Value {
    json!({
        "group_id": GROUP_ID,
        "name": "MentionBot",
        "sender_id": "bot-sender",
        "sender_type": "bot",
        "text": text
    })
}

/// A member entry in the group response
pub fn member(user_id: &str, nickname: &str) -> Value {
    json!({
        "user_id": user_id,
        "nickname": nickname,
        "id": format!("membership-{user_id}"),
        "image_url": null,
        "muted": false,
        "roles": ["user"]
    })
}

/// Group lookup response wrapping the given members
pub fn group_response(members: Vec<Value>) -> Value {
    json!({
        "response": {
            "id": GROUP_ID,
            "name": "Test Group",
            "members": members
        },
        "meta": {"code": 200}
    })
}
