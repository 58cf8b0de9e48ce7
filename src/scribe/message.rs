//! Per-message invocation data handed to the router.

/// One command invocation: who asked, where, and the argument tokens left
/// after the invocation prefix. Built once per incoming message and consumed
/// synchronously.
#[derive(Debug, Clone)]
pub struct Invocation {
    /// Chat the command arrived in.
    pub chat_id: i64,
    /// True when that chat is a one-to-one conversation with the issuer.
    pub is_private: bool,
    pub user_id: i64,
    pub username: String,
    pub tokens: Vec<String>,
}

impl Invocation {
    /// The issuer's one-to-one chat. Telegram private chat ids equal user ids,
    /// so replies addressed "to the issuer privately" go here.
    pub fn private_chat_id(&self) -> i64 {
        self.user_id
    }
}
