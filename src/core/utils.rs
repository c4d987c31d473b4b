use std::{
    env,
    path::{Path, PathBuf},
};

pub const DATA_FILE_NAME: &str = "gift_idea_saver_data.json";
pub const DATA_DIR_NAME: &str = "data";
pub const HOME_ENV: &str = "GIFT_SAVER_HOME";

/// Returns the directory holding the data file.
///
/// `GIFT_SAVER_HOME` wins when set; otherwise `data/` beside the folder that
/// contains the running executable.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os(HOME_ENV) {
        return PathBuf::from(custom);
    }
    match env::current_exe() {
        Ok(exe) => data_dir_for_executable(&exe),
        Err(_) => PathBuf::from(DATA_DIR_NAME),
    }
}

/// `<exe dir>/../data`, e.g. `target/debug/gift_saver_cli` → `target/data`.
pub fn data_dir_for_executable(exe: &Path) -> PathBuf {
    let exe_dir = exe.parent().unwrap_or_else(|| Path::new("."));
    exe_dir
        .parent()
        .unwrap_or(exe_dir)
        .join(DATA_DIR_NAME)
}

/// Absolute path to the JSON document.
pub fn data_file() -> PathBuf {
    app_data_dir().join(DATA_FILE_NAME)
}

/// Collapses every run of whitespace into a single space and trims the ends.
pub fn clean_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// True when the user typed the `cancel` keyword, in any casing.
pub fn is_cancel_keyword(text: &str) -> bool {
    text.trim().eq_ignore_ascii_case("cancel")
}

/// Parses a menu choice made only of ASCII digits.
pub fn parse_choice(text: &str) -> Option<usize> {
    let trimmed = text.trim();
    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    trimmed.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_dir_sits_beside_the_executable_folder() {
        let exe = Path::new("/opt/gifts/bin/gift_saver_cli");
        assert_eq!(
            data_dir_for_executable(exe),
            PathBuf::from("/opt/gifts/data")
        );
    }

    #[test]
    fn data_dir_for_root_level_executable_stays_under_root() {
        let exe = Path::new("/gift_saver_cli");
        assert_eq!(data_dir_for_executable(exe), PathBuf::from("/data"));
    }

    #[test]
    fn clean_text_collapses_inner_whitespace() {
        assert_eq!(clean_text("  Aunt \t  May \n"), "Aunt May");
        assert_eq!(clean_text("   "), "");
    }

    #[test]
    fn cancel_keyword_ignores_case_and_padding() {
        assert!(is_cancel_keyword("cancel"));
        assert!(is_cancel_keyword("  CaNcEl "));
        assert!(!is_cancel_keyword("cancelled"));
    }

    #[test]
    fn parse_choice_accepts_only_digits() {
        assert_eq!(parse_choice(" 2 "), Some(2));
        assert_eq!(parse_choice("0"), Some(0));
        assert_eq!(parse_choice("+1"), None);
        assert_eq!(parse_choice("-1"), None);
        assert_eq!(parse_choice("one"), None);
        assert_eq!(parse_choice(""), None);
    }
}
