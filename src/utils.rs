use url::Url;

/// Host whose videos carry a watermark band at the bottom of the frame.
pub const WATERMARKED_DOMAIN: &str = "tiktok.com";

/// Caption limit of Telegram media messages, counted in UTF-16 code units.
const MAX_CAPTION_UTF16: usize = 1024;

/// True when the URL's host is the watermarked platform or one of its subdomains.
pub fn is_watermarked_link(url: &str) -> bool {
    let Ok(url) = Url::parse(url.trim()) else {
        return false;
    };

    match url.host_str() {
        Some(host) => {
            let host = host.to_lowercase();
            host == WATERMARKED_DOMAIN || host.ends_with(&format!(".{}", WATERMARKED_DOMAIN))
        }
        None => false,
    }
}

/// Keeps only characters that are safe in a file name.
pub fn sanitize_file_stem(raw: &str) -> String {
    let stem: String = raw
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();

    if stem.is_empty() { "video".to_owned() } else { stem }
}

pub fn caption_for(title: Option<&str>, fallback: &str) -> String {
    match title.map(str::trim).filter(|t| !t.is_empty()) {
        Some(title) => truncate_utf16(title, MAX_CAPTION_UTF16).to_owned(),
        None => fallback.to_owned(),
    }
}

/// Longest prefix of `text` that fits in `limit` UTF-16 code units, cut on a char boundary.
fn truncate_utf16(text: &str, limit: usize) -> &str {
    let mut units = 0;
    for (at, c) in text.char_indices() {
        units += c.len_utf16();
        if units > limit {
            return &text[..at];
        }
    }
    text
}
