use crate::client::BotClient;
use crate::errors::DispatchError;
use crate::events::{CallbackEvent, TextMessage};
use crate::menu::{create_dress_menu, MENU_PROMPT};
use crate::utils::{command_token, dress_image_path, upload_file_name};
use std::path::Path;
use teloxide::types::MessageId;
use tokio::fs::File;
use tracing::{debug, info};

pub async fn handle_message(
    client: &dyn BotClient,
    msg: &TextMessage,
) -> Result<(), DispatchError> {
    info!("Receive message type: {}", msg.message_type);

    let text = match msg.text.as_deref() {
        Some(text) if !text.is_empty() => text,
        _ => return Ok(()),
    };

    // Отдельных команд нет, любое сообщение показывает меню
    debug!("Command token: {}", command_token(text));
    let sent = send_menu(client, msg).await?;

    info!("The message was sent with id: {}", sent.0);
    Ok(())
}

async fn send_menu(client: &dyn BotClient, msg: &TextMessage) -> Result<MessageId, DispatchError> {
    let sent = client
        .send_text(msg.chat_id, MENU_PROMPT, create_dress_menu())
        .await?;
    Ok(sent)
}

pub async fn handle_callback_query(
    client: &dyn BotClient,
    assets_dir: &Path,
    q: &CallbackEvent,
) -> Result<(), DispatchError> {
    info!("Received inline keyboard callback from: {}", q.id);

    let path = dress_image_path(assets_dir, &q.data);
    let photo = File::open(&path)
        .await
        .map_err(|source| DispatchError::FileAccess {
            path: path.clone(),
            source,
        })?;

    // Файл закрывается внутри send_photo, в том числе при ошибке
    client
        .send_photo(q.chat_id, photo, &upload_file_name(&path), &q.data)
        .await?;

    client
        .answer_callback(&q.id, &format!("Received {}", q.data))
        .await?;

    Ok(())
}

pub fn handle_unknown(kind: &str) {
    info!("Unknown update type: {}", kind);
}
