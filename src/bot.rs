use crate::client::TelegramClient;
use crate::config::Config;
use crate::dispatcher::UpdateDispatcher;
use crate::events::InboundEvent;
use anyhow::Result;
use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::update_listeners;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

pub async fn start_bot(bot: Bot, config: Config) -> Result<()> {
    info!("Bot is starting...");

    if !config.assets_dir.is_dir() {
        warn!(
            "Assets directory {} is missing, dress images will fail to load",
            config.assets_dir.display()
        );
    }

    let shutdown = CancellationToken::new();
    let dispatcher = Arc::new(UpdateDispatcher::new(
        Arc::new(TelegramClient::new(bot.clone())),
        config.assets_dir.clone(),
        shutdown.clone(),
    ));

    // Ctrl-C прерывает текущие отправки и паузы после ошибок
    let ctrlc_token = shutdown.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            ctrlc_token.cancel();
        }
    });

    let update_dispatcher = dispatcher.clone();
    let handler = dptree::entry().endpoint(move |update: Update| {
        let dispatcher = update_dispatcher.clone();
        async move {
            let cancel = dispatcher.shutdown_token().child_token();
            dispatcher
                .dispatch(InboundEvent::from(&update), &cancel)
                .await
        }
    });

    let listener = update_listeners::polling_default(bot.clone()).await;

    Dispatcher::builder(bot, handler)
        .error_handler(dispatcher.clone())
        .enable_ctrlc_handler()
        .build()
        .dispatch_with_listener(listener, dispatcher)
        .await;

    shutdown.cancel();
    info!("Bot stopped");

    Ok(())
}
