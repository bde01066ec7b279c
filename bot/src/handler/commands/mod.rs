use crate::errors::Result;
use crate::structs::ReplyContents;

use lazy_static::lazy_static;
use linkstore::{LinkWriter, RemoveOutcome};
use log::{debug, info, warn};
use regex::Regex;
use std::future::Future;

pub const GREETING: &str = "Hi! I'm a bot that helps you not forget to read the articles \
you find on the internet :)
- To have me remember an article, just send me a link to it. For example https://example.com.
- To get a random article, send me the /get_article command.
But remember! Once I give you an article to read, it is no longer kept in my database. \
So you really should read it";

pub const NO_ARTICLES: &str =
    "You haven't saved any articles yet :) If you find something worthwhile, I'm waiting!";

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Command {
    Start,
    GetArticle,
}

/// parse_command returns the command a message starts with, trailing text
/// after the command name is ignored.
pub fn parse_command(text: &str) -> Option<Command> {
    lazy_static! {
        static ref RE: Regex = Regex::new(r"(?i)^/(start|get_article)\b").unwrap();
    }
    let name = RE.captures(text.trim_start())?.get(1)?.as_str();
    if name.eq_ignore_ascii_case("start") {
        Some(Command::Start)
    } else {
        Some(Command::GetArticle)
    }
}

pub fn article_reply(url: &str) -> ReplyContents {
    ReplyContents::String(format!(
        "You wanted to read:\n{url}\nNow is the time to do it!"
    ))
}

/// Hands one random saved link back to `owner`. The link is only removed once
/// `deliver` succeeded so a failed send keeps it for the next request.
pub async fn get_article<S, F, Fut>(store: &S, owner: u64, deliver: F) -> Result<()>
where
    S: LinkWriter,
    F: FnOnce(ReplyContents) -> Fut,
    Fut: Future<Output = Result<()>>,
{
    let link = match store.pick_random(owner)? {
        Some(link) => link,
        None => return deliver(ReplyContents::ConstStr(NO_ARTICLES)).await,
    };

    deliver(article_reply(&link.url)).await?;

    // the user already has the article, a failed removal only means it may
    // come up again
    match store.remove_link(link.id, owner) {
        Ok(RemoveOutcome::Removed) => info!("delivered link {} to {owner}", link.id),
        // a concurrent request got to it first, it has still been delivered
        Ok(RemoveOutcome::NotFound) => debug!("link {} already removed", link.id),
        Err(why) => warn!("delivered link {} but failed to remove it: {why}", link.id),
    }
    Ok(())
}
