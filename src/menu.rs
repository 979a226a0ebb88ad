use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

/// Текст приглашения под меню
pub const MENU_PROMPT: &str = "Какое платье вы хотите?";

/// Кнопки меню: (текст кнопки, callback data), по две в ряд
pub const DRESS_BUTTONS: [[(&str, &str); 2]; 2] = [
    [("Синее", "Синее"), ("Зеленое", "Зелёное")],
    [("Красное", "Красное"), ("Фиолетовое", "Фиолетовое")],
];

/// Создает inline-клавиатуру выбора платья 2x2
pub fn create_dress_menu() -> InlineKeyboardMarkup {
    let rows: Vec<Vec<InlineKeyboardButton>> = DRESS_BUTTONS
        .iter()
        .map(|row| {
            row.iter()
                .map(|(label, data)| InlineKeyboardButton::callback(*label, *data))
                .collect()
        })
        .collect();

    InlineKeyboardMarkup::new(rows)
}
