//! 対象フォルダ・画像の判定
//!
//! 名前だけを見る純粋関数。`_` の個数は見ない（分割時にパーサーが検出する）。

use flashcard_index_common::IMAGE_SUFFIX;

/// カテゴリフォルダとして扱うか
pub fn is_valid_directory(name: &str, is_dir: bool) -> bool {
    is_dir && name.contains('_') && !name.starts_with('.')
}

/// カード画像として扱うか
pub fn is_valid_image(name: &str, is_dir: bool) -> bool {
    !is_dir && name.ends_with(IMAGE_SUFFIX) && name.contains('_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_directory() {
        assert!(is_valid_directory("과일_fruit", true));
        assert!(is_valid_directory("a_b_c", true));
    }

    #[test]
    fn test_directory_rejections() {
        assert!(!is_valid_directory("fruit", true));
        assert!(!is_valid_directory(".hidden_dir", true));
        assert!(!is_valid_directory("과일_fruit", false));
    }

    #[test]
    fn test_valid_image() {
        assert!(is_valid_image("사과_apple.png", false));
    }

    #[test]
    fn test_image_rejections() {
        assert!(!is_valid_image("apple.png", false));
        assert!(!is_valid_image("사과_apple.PNG", false));
        assert!(!is_valid_image("사과_apple.jpg", false));
        assert!(!is_valid_image("사과_apple.png", true));
        assert!(!is_valid_image("notes_todo.txt", false));
    }
}
