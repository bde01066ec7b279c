use crate::errors::Result;

use serenity::model;
use serenity::prelude::Context;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplyContents {
    String(String),
    ConstStr(&'static str),
}

impl ReplyContents {
    pub fn as_str(&self) -> &str {
        match self {
            ReplyContents::String(inner) => inner,
            ReplyContents::ConstStr(inner) => inner,
        }
    }
}

/// A reply to the message that triggered it.
#[derive(Debug)]
pub struct Reply<'a> {
    message: ReplyContents,
    place: &'a model::channel::Message,
}

impl<'a> Reply<'a> {
    pub const fn new(message: ReplyContents, place: &'a model::channel::Message) -> Reply<'a> {
        Reply { message, place }
    }

    pub async fn send(&self, ctx: &Context) -> Result<()> {
        self.place.reply(ctx, self.message.as_str()).await?;
        Ok(())
    }
}
