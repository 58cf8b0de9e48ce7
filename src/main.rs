mod config;
mod scribe;

use std::sync::Arc;

use teloxide::prelude::*;
use teloxide::types::ChatKind;
use tracing::{error, info, warn};
use tracing_subscriber::prelude::*;

use config::Config;
use scribe::{command_tokens, Class, Invocation, Library, Router, TelegramClient};

struct BotState {
    router: Router,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let config = Config::from_env().unwrap_or_else(|e| {
        eprintln!("Configuration error: {e}");
        std::process::exit(1);
    });

    // Setup logging
    std::fs::create_dir_all("logs").ok();
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open("logs/scribe.log")
        .expect("Failed to open log file");
    let (non_blocking, _guard) = tracing_appender::non_blocking(log_file);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stdout)
                .with_filter(
                    tracing_subscriber::EnvFilter::from_default_env()
                        .add_directive(tracing::Level::INFO.into()),
                ),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_filter(
                    tracing_subscriber::EnvFilter::from_default_env()
                        .add_directive(tracing::Level::INFO.into()),
                ),
        )
        .init();

    info!("🚀 Starting scribe...");

    let bot = Bot::new(&config.bot_token);
    announce_connection(&bot, config.home_chat_id).await;

    let library = Library::default();
    check_library(&library);

    let router = Router::new(Arc::new(TelegramClient::new(bot.clone())), library);
    let state = Arc::new(BotState { router });

    let handler = dptree::entry().branch(Update::filter_message().endpoint(handle_message));

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![state])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;
}

/// One-line startup confirmation naming the bot and its home community.
async fn announce_connection(bot: &Bot, home_chat_id: i64) {
    let name = match bot.get_me().await {
        Ok(me) => format!("@{}", me.username()),
        Err(e) => {
            warn!("Failed to get bot info: {e}");
            "scribe".to_string()
        }
    };

    match bot.get_chat(ChatId(home_chat_id)).await {
        Ok(chat) => {
            let title = chat.title().unwrap_or("<untitled>").to_string();
            info!("{name} is connected to the community {title} (id: {home_chat_id})");
        }
        Err(e) => warn!("Failed to look up home chat {home_chat_id}: {e}"),
    }
}

/// Flag any class directory absent from the library so a bad deploy shows up
/// at startup instead of in user replies.
fn check_library(library: &Library) {
    for class in Class::ALL {
        let dir = library.class_dir(class);
        if !dir.is_dir() {
            warn!("Class directory missing from the library: {}", dir.display());
        }
    }
}

async fn handle_message(msg: Message, state: Arc<BotState>) -> ResponseResult<()> {
    let Some(text) = msg.text() else {
        return Ok(());
    };
    let Some(tokens) = command_tokens(text) else {
        return Ok(());
    };
    let Some(inv) = invocation_from_message(&msg, tokens) else {
        return Ok(());
    };

    info!(
        "📜 Command from {} ({}) in chat {}: {:?}",
        inv.username, inv.user_id, inv.chat_id, inv.tokens
    );
    if let Err(e) = state.router.handle(&inv).await {
        error!("Invocation handling failed: {e}");
    }
    Ok(())
}

fn invocation_from_message(msg: &Message, tokens: Vec<String>) -> Option<Invocation> {
    let user = msg.from.as_ref()?;
    let username = user
        .username
        .as_deref()
        .unwrap_or(&user.first_name)
        .to_string();

    Some(Invocation {
        chat_id: msg.chat.id.0,
        is_private: matches!(msg.chat.kind, ChatKind::Private(_)),
        user_id: user.id.0 as i64,
        username,
        tokens,
    })
}
