//! Исходящие вызовы Telegram.
//!
//! [`BotClient`] не зависит от транспорта; [`TelegramClient`] реализует его через teloxide,
//! в тестах подставляется записывающий мок.

use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::{InlineKeyboardMarkup, InputFile, MessageId};
use teloxide::RequestError;
use tokio::fs::File;

#[async_trait]
pub trait BotClient: Send + Sync {
    /// Отправляет текст с inline-клавиатурой
    async fn send_text(
        &self,
        chat_id: ChatId,
        text: &str,
        markup: InlineKeyboardMarkup,
    ) -> Result<MessageId, RequestError>;

    /// Отправляет открытый файл как фото с подписью
    async fn send_photo(
        &self,
        chat_id: ChatId,
        photo: File,
        file_name: &str,
        caption: &str,
    ) -> Result<MessageId, RequestError>;

    async fn answer_callback(&self, callback_id: &str, text: &str) -> Result<(), RequestError>;
}

/// Обертка над teloxide::Bot
pub struct TelegramClient {
    bot: Bot,
}

impl TelegramClient {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl BotClient for TelegramClient {
    async fn send_text(
        &self,
        chat_id: ChatId,
        text: &str,
        markup: InlineKeyboardMarkup,
    ) -> Result<MessageId, RequestError> {
        let sent = self
            .bot
            .send_message(chat_id, text)
            .reply_markup(markup)
            .await?;
        Ok(sent.id)
    }

    async fn send_photo(
        &self,
        chat_id: ChatId,
        photo: File,
        file_name: &str,
        caption: &str,
    ) -> Result<MessageId, RequestError> {
        let input = InputFile::read(photo).file_name(file_name.to_owned());
        let sent = self.bot.send_photo(chat_id, input).caption(caption).await?;
        Ok(sent.id)
    }

    async fn answer_callback(&self, callback_id: &str, text: &str) -> Result<(), RequestError> {
        self.bot.answer_callback_query(callback_id).text(text).await?;
        Ok(())
    }
}

#[cfg(test)]
pub mod mock {
    //! Мок [`BotClient`], записывающий все вызовы.

    use super::*;
    use std::io;
    use std::sync::Mutex;
    use tokio::io::AsyncReadExt;

    #[derive(Debug, Clone, PartialEq)]
    pub enum Call {
        Text {
            chat_id: ChatId,
            text: String,
            markup: InlineKeyboardMarkup,
        },
        Photo {
            chat_id: ChatId,
            file_name: String,
            caption: String,
            bytes: Vec<u8>,
        },
        Answer {
            callback_id: String,
            text: String,
        },
    }

    #[derive(Default)]
    pub struct MockClient {
        calls: Mutex<Vec<Call>>,
        fail_photo: bool,
    }

    impl MockClient {
        /// Мок, у которого отправка фото падает сетевой ошибкой
        pub fn failing_photo() -> Self {
            Self {
                calls: Mutex::default(),
                fail_photo: true,
            }
        }

        pub fn calls(&self) -> Vec<Call> {
            self.calls.lock().unwrap().clone()
        }

        fn record(&self, call: Call) -> MessageId {
            let mut calls = self.calls.lock().unwrap();
            calls.push(call);
            MessageId(calls.len() as i32)
        }
    }

    #[async_trait]
    impl BotClient for MockClient {
        async fn send_text(
            &self,
            chat_id: ChatId,
            text: &str,
            markup: InlineKeyboardMarkup,
        ) -> Result<MessageId, RequestError> {
            Ok(self.record(Call::Text {
                chat_id,
                text: text.to_string(),
                markup,
            }))
        }

        async fn send_photo(
            &self,
            chat_id: ChatId,
            mut photo: File,
            file_name: &str,
            caption: &str,
        ) -> Result<MessageId, RequestError> {
            if self.fail_photo {
                return Err(RequestError::Io(io::Error::new(
                    io::ErrorKind::ConnectionReset,
                    "connection reset by peer",
                )));
            }
            let mut bytes = Vec::new();
            photo
                .read_to_end(&mut bytes)
                .await
                .map_err(RequestError::Io)?;
            Ok(self.record(Call::Photo {
                chat_id,
                file_name: file_name.to_string(),
                caption: caption.to_string(),
                bytes,
            }))
        }

        async fn answer_callback(&self, callback_id: &str, text: &str) -> Result<(), RequestError> {
            self.record(Call::Answer {
                callback_id: callback_id.to_string(),
                text: text.to_string(),
            });
            Ok(())
        }
    }
}
