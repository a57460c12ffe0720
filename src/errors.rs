use std::fmt;

use strum::Display;

/// Errors of the bot, from startup config to a single request
#[derive(Debug)]
pub enum BotError {
    /// Bad or missing configuration
    Config(String),
    /// yt-dlp failed to download an extracted video
    Download(String),
    /// ffmpeg post-processing failed
    Transcode(TranscodeError),
    /// File system errors
    FileSystem(std::io::Error),
    /// Telegram API errors
    Telegram(teloxide::RequestError),
    /// Unparseable data from an external tool
    Parse(String),
    /// External command could not be run or reported a failure
    ExternalCommand { command: String, stderr: String },
}

#[derive(Debug)]
pub enum TranscodeError {
    Io(std::io::Error),
    FfmpegFailed(std::process::ExitStatus, String),
}

impl fmt::Display for BotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BotError::Config(msg) => write!(f, "configuration error: {}", msg),
            BotError::Download(msg) => write!(f, "download failed: {}", msg),
            BotError::Transcode(e) => write!(f, "transcode failed: {}", e),
            BotError::FileSystem(e) => write!(f, "file system error: {}", e),
            BotError::Telegram(e) => write!(f, "telegram API error: {}", e),
            BotError::Parse(msg) => write!(f, "parse error: {}", msg),
            BotError::ExternalCommand { command, stderr } => {
                write!(f, "command {} failed: {}", command, stderr)
            }
        }
    }
}

impl fmt::Display for TranscodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranscodeError::Io(e) => write!(f, "failed to spawn ffmpeg: {}", e),
            TranscodeError::FfmpegFailed(code, stderr) => {
                write!(f, "ffmpeg exited with {} - stderr: {}", code, stderr)
            }
        }
    }
}

impl std::error::Error for BotError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BotError::Transcode(e) => Some(e),
            BotError::FileSystem(e) => Some(e),
            BotError::Telegram(e) => Some(e),
            _ => None,
        }
    }
}

impl std::error::Error for TranscodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TranscodeError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<TranscodeError> for BotError {
    fn from(err: TranscodeError) -> Self {
        BotError::Transcode(err)
    }
}

impl From<std::io::Error> for BotError {
    fn from(err: std::io::Error) -> Self {
        BotError::FileSystem(err)
    }
}

impl From<teloxide::RequestError> for BotError {
    fn from(err: teloxide::RequestError) -> Self {
        BotError::Telegram(err)
    }
}

impl From<std::io::Error> for TranscodeError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for BotError {
    fn from(err: serde_json::Error) -> Self {
        BotError::Parse(format!("JSON parsing error: {}", err))
    }
}

impl BotError {
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn download_error(msg: impl Into<String>) -> Self {
        Self::Download(msg.into())
    }

    pub fn external_command_error(command: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self::ExternalCommand {
            command: command.into(),
            stderr: stderr.into(),
        }
    }

    /// What the chat user gets to see instead of the raw error text.
    pub fn user_notice(&self) -> UserNotice {
        match self {
            BotError::Download(_) | BotError::ExternalCommand { .. } | BotError::Parse(_) => {
                UserNotice::DownloadError
            }
            BotError::Transcode(_) => UserNotice::ProcessingError,
            BotError::Telegram(_) => UserNotice::SendError,
            BotError::Config(_) | BotError::FileSystem(_) => UserNotice::InternalError,
        }
    }
}

/// Every text the bot sends to a chat.
#[derive(Display, Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserNotice {
    #[strum(
        to_string = "হ্যালো! ভিডিও লিঙ্ক পাঠাও আমি ডাউনলোড করে দিবো (YouTube, TikTok, Facebook, Instagram)"
    )]
    Greeting,
    #[strum(
        to_string = "ভিডিও ডাউনলোড করার জন্য ভিডিও লিঙ্ক পাঠাও।\nসমর্থিত সাইট: YouTube, TikTok, Facebook, Instagram\nTikTok ভিডিও থেকে ওয়াটারমার্ক অপসারণ করা হবে।"
    )]
    Help,
    #[strum(to_string = "ভিডিও ডাউনলোড শুরু হচ্ছে... একটু ধৈর্য ধরো।")]
    DownloadStarted,
    #[strum(to_string = "দুঃখিত, ভিডিও ডাউনলোড করা যায়নি। লিঙ্কটি সঠিক কিনা চেক করুন।")]
    NotFound,
    #[strum(to_string = "ত্রুটি: ভিডিও ডাউনলোড করা যায়নি।")]
    DownloadError,
    #[strum(to_string = "ত্রুটি: ভিডিও প্রসেস করা যায়নি।")]
    ProcessingError,
    #[strum(to_string = "ত্রুটি: ভিডিও পাঠানো যায়নি।")]
    SendError,
    #[strum(to_string = "ত্রুটি: অভ্যন্তরীণ সমস্যা হয়েছে।")]
    InternalError,
}

/// Caption for a video without an extracted title
pub const DEFAULT_CAPTION: &str = "ভিডিও";

pub type BotResult<T> = Result<T, BotError>;

pub type HandlerResult = BotResult<()>;
