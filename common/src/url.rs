//! GitHub Pages 上の画像URL生成

/// 画像を公開している Pages サイト名
pub const DEFAULT_SITE: &str = "baby-flashcard-repo";

/// `https://{owner}.github.io/{site}/{category}/{file_name}`
///
/// 名前はエンコードせずそのまま埋め込む。到達可能かは確認しない。
pub fn image_url(owner: &str, site: &str, category: &str, file_name: &str) -> String {
    format!("https://{}.github.io/{}/{}/{}", owner, site, category, file_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_url() {
        let url = image_url("sb2chun", DEFAULT_SITE, "과일_fruit", "사과_apple.png");
        assert_eq!(
            url,
            "https://sb2chun.github.io/baby-flashcard-repo/과일_fruit/사과_apple.png"
        );
    }

    #[test]
    fn test_image_url_custom_site() {
        let url = image_url("octocat", "cards", "a_b", "c_d.png");
        assert_eq!(url, "https://octocat.github.io/cards/a_b/c_d.png");
    }
}
