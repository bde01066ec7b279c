pub mod commands;
pub mod links;

use crate::errors::{Error, Result};
use crate::structs::{Reply, ReplyContents};
use commands::Command;

use linkstore::{LinkStore, LinkWriter};
use log::{error, info, warn};
use serenity::{
    async_trait,
    model::{channel::Message, gateway::Ready},
    prelude::*,
};
use std::future::Future;
use std::sync::Arc;

pub const STORAGE_FAILURE: &str = "Something went wrong, please try again later.";

/// Routes one message from `owner` to the command or link it contains and
/// sends any reply through `deliver`. Store outages are answered with a
/// generic failure message, everything else is returned to the caller.
pub async fn handle_text<S, F, Fut>(store: &S, owner: u64, text: &str, mut deliver: F) -> Result<()>
where
    S: LinkWriter,
    F: FnMut(ReplyContents) -> Fut,
    Fut: Future<Output = Result<()>>,
{
    let ret = match commands::parse_command(text) {
        Some(Command::Start) => deliver(ReplyContents::ConstStr(commands::GREETING)).await,
        Some(Command::GetArticle) => commands::get_article(store, owner, &mut deliver).await,
        None => links::save_link(store, owner, text, &mut deliver).await,
    };

    match ret {
        Err(why) if why.is_storage_unavailable() => {
            error!("link store unavailable while handling message from {owner}: {why}");
            deliver(ReplyContents::ConstStr(STORAGE_FAILURE)).await
        }
        other => other,
    }
}

pub struct Handler {
    store: Arc<LinkStore>,
}

impl Handler {
    pub const fn new(store: Arc<LinkStore>) -> Handler {
        Handler { store }
    }
}

#[async_trait]
impl EventHandler for Handler {
    async fn message(&self, ctx: Context, msg: Message) {
        // dont care about bot messages
        if msg.author.bot {
            return;
        }

        let owner = *msg.author.id.as_u64();
        let (ctx, msg) = (&ctx, &msg);
        let deliver =
            move |contents: ReplyContents| async move { Reply::new(contents, msg).send(ctx).await };

        if let Err(why) = handle_text(self.store.as_ref(), owner, &msg.content, deliver).await {
            match &why {
                Error::Serenity(_) => warn!("Failed to reply to {owner}: {why}"),
                _ => warn!("Failed to handle message from {owner}: {why}"),
            }
        }
    }

    async fn ready(&self, _: Context, ready: Ready) {
        info!("{} is connected!", ready.user.name);
    }
}
