use std::path::{Path, PathBuf};

/// Суффикс имени файла картинки платья
pub const DRESS_IMAGE_SUFFIX: &str = "_платье.jpg";

/// Путь к картинке для выбранного цвета: `<dir>/<цвет в нижнем регистре>_платье.jpg`
pub fn dress_image_path(assets_dir: &Path, data: &str) -> PathBuf {
    assets_dir.join(format!("{}{}", data.to_lowercase(), DRESS_IMAGE_SUFFIX))
}

/// Имя файла для загрузки в Telegram
pub fn upload_file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Первое слово сообщения (команда)
pub fn command_token(text: &str) -> &str {
    text.split_whitespace().next().unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_path_is_lowercased() {
        assert_eq!(
            dress_image_path(Path::new("Files"), "Синее"),
            PathBuf::from("Files/синее_платье.jpg")
        );
        assert_eq!(
            dress_image_path(Path::new("Files"), "Зелёное"),
            PathBuf::from("Files/зелёное_платье.jpg")
        );
    }

    #[test]
    fn upload_name_is_last_component() {
        let path = dress_image_path(Path::new("assets/dresses"), "Красное");
        assert_eq!(upload_file_name(&path), "красное_платье.jpg");
    }

    #[test]
    fn command_token_takes_first_word() {
        assert_eq!(command_token("/start now"), "/start");
        assert_eq!(command_token("  hello  world"), "hello");
        assert_eq!(command_token("   "), "");
    }
}
