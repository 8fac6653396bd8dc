//! Path utilities: expand ~ in configured paths.

use std::path::PathBuf;

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_leading_tilde_slash_expands() {
        assert_eq!(expand_tilde("/abs/file"), PathBuf::from("/abs/file"));
        assert_eq!(expand_tilde("rel~/x"), PathBuf::from("rel~/x"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde("~/a.sqlite"), home.join("a.sqlite"));
        }
    }
}
