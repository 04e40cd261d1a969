//! Hostel assistant chat commands.

use crate::cli::{ChatAction, ChatArgs};
use crate::config::Settings;
use crate::errors::AppResult;
use crate::services::ChatService;

use super::{admit, bootstrap};

pub async fn execute(args: ChatArgs, settings: Settings) -> AppResult<()> {
    let ctx = bootstrap(&settings).await?;
    let chat = ChatService::new(ctx.backend.clone());
    let profile = admit(&ctx, "/student/chatbot")?;

    match args.action {
        ChatAction::Send { message } => {
            let message = message.join(" ");
            let exchange = chat.send(profile.id, &message).await?;
            println!("you: {}", exchange.message);
            println!("assistant: {}", exchange.response);
        }
        ChatAction::History => {
            for exchange in chat.history(profile.id).await? {
                println!("you: {}", exchange.message);
                println!("assistant: {}", exchange.response);
            }
        }
    }
    Ok(())
}
