//! Command routing: maps an invocation's tokens to the resolver, the catalog
//! lister, or the help responder, and addresses the reply.

use std::io;
use std::sync::Arc;

use tracing::{info, warn};

use crate::scribe::catalog::{self, CatalogError};
use crate::scribe::class::Class;
use crate::scribe::library::Library;
use crate::scribe::message::Invocation;
use crate::scribe::resolver::{self, title_case, CardQuery};
use crate::scribe::telegram::ChatApi;

/// Leading token that marks a chat message as a command for the scribe.
pub const COMMAND_PREFIX: &str = ".scribe";

const CARDLIST_HELP_TEXT: &str = "If you type \".scribe cardlist <class name>\", \
    I will message you a list of all the cards for that class, if I can find it.";
const CARD_HELP_TEXT: &str = "If you type \".scribe card <card name>\", \
    I will seek out an image of the card if I can find it.";
const COMMANDS_HELP_TEXT: &str =
    "If you type \".scribe commands\", I will output this list of commands again.";

/// Split a raw message into argument tokens if it carries the invocation
/// prefix. The prefix must stand alone as the first token.
pub fn command_tokens(text: &str) -> Option<Vec<String>> {
    let rest = text.strip_prefix(COMMAND_PREFIX)?;
    if !rest.is_empty() && !rest.starts_with(char::is_whitespace) {
        return None;
    }
    Some(rest.split_whitespace().map(str::to_string).collect())
}

/// A parsed command. The first token selects the variant; a first token that
/// is not one of the reserved keywords means the whole token sequence names a
/// card (shorthand form).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    CardList(Vec<String>),
    Card(Vec<String>),
    Help,
}

impl Command {
    pub fn parse(tokens: &[String]) -> Self {
        match tokens.first().map(String::as_str) {
            Some("cardlist") => Self::CardList(tokens[1..].to_vec()),
            Some("card") => Self::Card(tokens[1..].to_vec()),
            Some("commands") => Self::Help,
            Some(_) => Self::Card(tokens.to_vec()),
            None => Self::Card(Vec::new()),
        }
    }
}

/// The command router. Holds the injected chat client and the card library;
/// no state survives an invocation.
pub struct Router {
    chat: Arc<dyn ChatApi>,
    library: Library,
}

impl Router {
    pub fn new(chat: Arc<dyn ChatApi>, library: Library) -> Self {
        Self { chat, library }
    }

    /// Handle one invocation. Every recognized failure becomes a persona
    /// reply at the point of detection; unclassified filesystem faults
    /// propagate and abort only this invocation.
    pub async fn handle(&self, inv: &Invocation) -> io::Result<()> {
        match Command::parse(&inv.tokens) {
            Command::CardList(args) => self.handle_cardlist(inv, &args).await,
            Command::Card(args) => self.handle_card(inv, &args).await,
            Command::Help => self.handle_help(inv).await,
        }
    }

    /// `cardlist <class>`: the list always goes to the issuer privately,
    /// wherever the command was typed.
    async fn handle_cardlist(&self, inv: &Invocation, args: &[String]) -> io::Result<()> {
        let dm = inv.private_chat_id();

        let Some(raw) = args.first() else {
            self.send(dm, &format!("I require the name of a class, {}.", inv.username))
                .await;
            return Ok(());
        };

        let Some(class) = Class::parse(raw) else {
            self.send(
                dm,
                &format!(
                    "I apologise, but I cannot find {} in my collection, {}.",
                    title_case(raw),
                    inv.username
                ),
            )
            .await;
            return Ok(());
        };

        match catalog::list_class(&self.library, class) {
            Ok(cards) => {
                info!("Listing {} {class} cards for {}", cards.len(), inv.username);
                let mut reply = format!(
                    "I have located these cards belonging to the legend {class} in my collection\n"
                );
                for card in &cards {
                    reply.push_str(card);
                    reply.push('\n');
                }
                self.send(dm, &reply).await;
            }
            Err(CatalogError::DirectoryMissing(dir)) => {
                warn!("Class directory missing: {}", dir.display());
                self.send(
                    dm,
                    &format!(
                        "My records for the legend {class} appear to be missing \
                         from my collection, {}.",
                        inv.username
                    ),
                )
                .await;
            }
            Err(CatalogError::Io(e)) => return Err(e),
        }
        Ok(())
    }

    /// `card <name tokens...>`: the image goes to the invocation channel; the
    /// flavor caption only accompanies it in a private chat.
    async fn handle_card(&self, inv: &Invocation, args: &[String]) -> io::Result<()> {
        if args.is_empty() {
            self.send(
                inv.chat_id,
                &format!("I require the name of a card, {}.", inv.username),
            )
            .await;
            return Ok(());
        }

        let query = CardQuery::from_tokens(args);
        match resolver::resolve(&query, self.library.root())? {
            Some(path) => {
                info!("Card {} resolved to {}", query.display(), path.display());
                let caption = inv
                    .is_private
                    .then(|| format!("BEHOLD {}, {}!", inv.username, query.display()));
                self.chat
                    .send_file(inv.chat_id, &path, caption.as_deref())
                    .await
                    .ok();
            }
            None => {
                self.send(
                    inv.chat_id,
                    &format!(
                        "I find no record of the card {} in my collection I'm afraid, {}.",
                        query.display(),
                        inv.username
                    ),
                )
                .await;
            }
        }
        Ok(())
    }

    /// `commands`: the help text goes to the issuer privately; a group gets a
    /// short acknowledgment in place.
    async fn handle_help(&self, inv: &Invocation) -> io::Result<()> {
        let help = format!(
            "Here are all the tasks I can perform, {}.\n\
             Here is a helpful list of user commands\n\
             {CARDLIST_HELP_TEXT}\n\n{CARD_HELP_TEXT}\n\n{COMMANDS_HELP_TEXT}\n",
            inv.username
        );
        self.send(inv.private_chat_id(), &help).await;

        if !inv.is_private {
            self.send(
                inv.chat_id,
                &format!(
                    "I have sent my list of commands to you privately, {}.",
                    inv.username
                ),
            )
            .await;
        }
        Ok(())
    }

    /// Fire a text reply. Delivery failures are logged by the client; a lost
    /// reply does not fail the invocation.
    async fn send(&self, chat_id: i64, text: &str) {
        self.chat.send_text(chat_id, text).await.ok();
    }
}
