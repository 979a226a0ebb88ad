//! Входящие события, декодированные из обновлений Telegram.
//!
//! Диспетчер работает только с [`InboundEvent`], а не с `Update` напрямую:
//! так набор вариантов закрыт и его легко проверить в тестах.

use teloxide::types::{ChatId, Message, Update, UpdateKind};

/// Входящее событие
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InboundEvent {
    Message(TextMessage),
    CallbackQuery(CallbackEvent),
    /// Любое другое обновление, только для логов
    Other { kind: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextMessage {
    pub chat_id: ChatId,
    pub message_type: &'static str,
    pub text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallbackEvent {
    pub id: String,
    pub chat_id: ChatId,
    pub data: String,
}

impl From<&Update> for InboundEvent {
    fn from(update: &Update) -> Self {
        match &update.kind {
            UpdateKind::Message(msg) => InboundEvent::Message(TextMessage {
                chat_id: msg.chat.id,
                message_type: message_type(msg),
                text: msg.text().map(str::to_owned),
            }),
            UpdateKind::CallbackQuery(q) => match &q.data {
                Some(data) => InboundEvent::CallbackQuery(CallbackEvent {
                    id: q.id.clone(),
                    // Без исходного сообщения отвечаем в личный чат отправителя
                    chat_id: q
                        .message
                        .as_ref()
                        .map(|m| m.chat.id)
                        .unwrap_or_else(|| q.from.id.into()),
                    data: data.clone(),
                }),
                None => InboundEvent::Other {
                    kind: "callback_query",
                },
            },
            other => InboundEvent::Other {
                kind: update_kind_name(other),
            },
        }
    }
}

fn message_type(msg: &Message) -> &'static str {
    if msg.text().is_some() {
        "text"
    } else if msg.photo().is_some() {
        "photo"
    } else if msg.document().is_some() {
        "document"
    } else if msg.sticker().is_some() {
        "sticker"
    } else if msg.voice().is_some() {
        "voice"
    } else if msg.video().is_some() {
        "video"
    } else if msg.location().is_some() {
        "location"
    } else if msg.contact().is_some() {
        "contact"
    } else {
        "other"
    }
}

fn update_kind_name(kind: &UpdateKind) -> &'static str {
    match kind {
        UpdateKind::Message(_) => "message",
        UpdateKind::EditedMessage(_) => "edited_message",
        UpdateKind::ChannelPost(_) => "channel_post",
        UpdateKind::EditedChannelPost(_) => "edited_channel_post",
        UpdateKind::InlineQuery(_) => "inline_query",
        UpdateKind::ChosenInlineResult(_) => "chosen_inline_result",
        UpdateKind::CallbackQuery(_) => "callback_query",
        UpdateKind::ShippingQuery(_) => "shipping_query",
        UpdateKind::PreCheckoutQuery(_) => "pre_checkout_query",
        UpdateKind::Poll(_) => "poll",
        UpdateKind::PollAnswer(_) => "poll_answer",
        UpdateKind::MyChatMember(_) => "my_chat_member",
        UpdateKind::ChatMember(_) => "chat_member",
        UpdateKind::ChatJoinRequest(_) => "chat_join_request",
        _ => "unknown",
    }
}
