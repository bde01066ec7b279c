use crate::errors::Result;
use crate::structs::ReplyContents;

use linkstore::{AddOutcome, LinkWriter};
use log::{debug, info};
use std::future::Future;
use url::{Host, Url};

pub const SAVED: &str = "Saved, thanks!";
pub const ALREADY_SAVED: &str = "Oops, you already saved this :)";

/// Returns true if the host looks like something a person could visit:
/// a dotted domain, an ip address or localhost.
fn plausible_host(host: Host<&str>) -> bool {
    match host {
        Host::Domain(domain) => {
            domain == "localhost"
                || (domain.contains('.') && domain.split('.').all(|label| !label.is_empty()))
        }
        Host::Ipv4(_) | Host::Ipv6(_) => true,
    }
}

/// validate_url returns the parsed url when the whole message is a single
/// http(s) or ftp link, otherwise None. Messages with anything around the link are
/// not links to save.
pub fn validate_url(text: &str) -> Option<Url> {
    let text = text.trim();
    if text.is_empty() || text.contains(char::is_whitespace) {
        return None;
    }

    let url = Url::parse(text).ok()?;
    if !matches!(url.scheme(), "http" | "https" | "ftp") {
        return None;
    }
    let host = url.host()?;
    if !plausible_host(host) {
        return None;
    }
    Some(url)
}

/// Saves the message for `owner` if it is a link and replies with the outcome.
/// Anything else is ignored without a reply.
pub async fn save_link<S, F, Fut>(store: &S, owner: u64, text: &str, deliver: F) -> Result<()>
where
    S: LinkWriter,
    F: FnOnce(ReplyContents) -> Fut,
    Fut: Future<Output = Result<()>>,
{
    if validate_url(text).is_none() {
        debug!("ignoring non link message from {owner}");
        return Ok(());
    }

    // the message is stored exactly as sent, the parsed form is only a check
    let reply = match store.add_link(owner, text.trim())? {
        AddOutcome::Added => {
            info!("saved a link for {owner}");
            SAVED
        }
        AddOutcome::AlreadyExists => ALREADY_SAVED,
    };
    deliver(ReplyContents::ConstStr(reply)).await
}
