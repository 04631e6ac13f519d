//! DTOs for decoding upstream JSON responses.
//!
//! The adapter decodes into these transport DTOs first, then maps into domain
//! values in one pass. Fields the domain does not use (address, company,
//! `userId` on posts, ...) are ignored, and fields the upstream omits decode
//! as empty strings or zero. Only malformed JSON is a decode failure.

use serde::Deserialize;

use crate::domain::{PostInfo, UserInfo};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(super) struct UserDto {
    name: String,
    username: String,
    email: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(super) struct PostDto {
    id: i64,
    title: String,
    body: String,
}

impl From<UserDto> for UserInfo {
    fn from(dto: UserDto) -> Self {
        Self {
            name: dto.name,
            username: dto.username,
            email: dto.email,
        }
    }
}

impl From<PostDto> for PostInfo {
    fn from(dto: PostDto) -> Self {
        Self {
            post_id: dto.id,
            title: dto.title,
            body: dto.body,
        }
    }
}
