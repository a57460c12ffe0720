use std::{env, path::PathBuf};

use crate::errors::{BotError, BotResult};

pub const TOKEN_VAR: &str = "TELEGRAM_BOT_TOKEN";

/// Subdirectory of `WORK_DIR` owned by the bot
const WORK_SUBDIR: &str = "tg-video-bot";

/// Settings of one bot process, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub token: String,
    pub ytdlp_bin: String,
    pub ffmpeg_bin: String,
    /// Per-request directories are created under this one, always
    /// `<WORK_DIR or system temp>/tg-video-bot`
    pub work_root: PathBuf,
}

impl Config {
    pub fn from_env() -> BotResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> BotResult<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let token = get(TOKEN_VAR).ok_or_else(|| {
            BotError::config_error(format!("set {TOKEN_VAR} environment variable first"))
        })?;

        Ok(Self {
            token,
            ytdlp_bin: get("YTDLP_BIN").unwrap_or_else(|| "yt-dlp".to_owned()),
            ffmpeg_bin: get("FFMPEG_BIN").unwrap_or_else(|| "ffmpeg".to_owned()),
            work_root: get("WORK_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(env::temp_dir)
                .join(WORK_SUBDIR),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn missing_token_is_fatal() {
        let err = Config::from_lookup(lookup(&[])).unwrap_err();
        assert!(matches!(err, BotError::Config(_)));
        assert!(err.to_string().contains(TOKEN_VAR));
    }

    #[test]
    fn blank_token_counts_as_missing() {
        assert!(Config::from_lookup(lookup(&[(TOKEN_VAR, "  ")])).is_err());
    }

    #[test]
    fn defaults_apply() {
        let config = Config::from_lookup(lookup(&[(TOKEN_VAR, "123:abc")])).unwrap();
        assert_eq!(config.token, "123:abc");
        assert_eq!(config.ytdlp_bin, "yt-dlp");
        assert_eq!(config.ffmpeg_bin, "ffmpeg");
        assert_eq!(config.work_root, env::temp_dir().join("tg-video-bot"));
    }

    #[test]
    fn overrides_apply() {
        let config = Config::from_lookup(lookup(&[
            (TOKEN_VAR, "123:abc"),
            ("YTDLP_BIN", "/opt/yt-dlp"),
            ("FFMPEG_BIN", "/opt/ffmpeg"),
            ("WORK_DIR", "/var/tmp/bot"),
        ]))
        .unwrap();
        assert_eq!(config.ytdlp_bin, "/opt/yt-dlp");
        assert_eq!(config.ffmpeg_bin, "/opt/ffmpeg");
        assert_eq!(config.work_root, PathBuf::from("/var/tmp/bot/tg-video-bot"));
    }
}
