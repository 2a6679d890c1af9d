//! Content-based media type detection for uploads.

/// How many leading bytes [`sniff`] needs.
pub const SNIFF_LEN: usize = 8192;

/// Detects the media type from the leading bytes of the content.
///
/// The input may be a prefix, a multi-byte character cut at the end still counts as text.
pub fn sniff(bytes: &[u8]) -> &'static str {
    if bytes.is_empty() {
        return "application/x-empty";
    }
    if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
        return "image/jpeg";
    }
    if bytes.starts_with(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]) {
        return "image/png";
    }
    if bytes.starts_with(b"GIF87a") || bytes.starts_with(b"GIF89a") {
        return "image/gif";
    }
    if bytes.len() >= 12 && &bytes[0..4] == b"RIFF" && &bytes[8..12] == b"WEBP" {
        return "image/webp";
    }
    if bytes.starts_with(b"II*\0") || bytes.starts_with(b"MM\0*") {
        return "image/tiff";
    }
    if bytes.starts_with(b"OggS") {
        return "audio/ogg";
    }
    if bytes.starts_with(b"ID3") || is_mpeg_audio_frame(bytes) {
        return "audio/mpeg";
    }
    if bytes.len() >= 8 && &bytes[4..8] == b"ftyp" {
        return "video/mp4";
    }
    if bytes.starts_with(b"%PDF-") {
        return "application/pdf";
    }
    if bytes.starts_with(b"PK\x03\x04") {
        return "application/zip";
    }
    // Needs the full header, a bare `BM` is just text.
    if bytes.len() >= 14 && bytes.starts_with(b"BM") {
        return "image/bmp";
    }
    if !bytes.contains(&0) && is_utf8_prefix(bytes) {
        return "text/plain";
    }
    "application/octet-stream"
}

/// Maps a media type onto the extension a re-uploaded file gets.
pub fn extension(mime_type: &str) -> Option<&'static str> {
    match mime_type {
        "image/jpeg" => Some("jpg"),
        "image/png" => Some("png"),
        "image/gif" => Some("gif"),
        "image/bmp" => Some("bmp"),
        "image/tiff" => Some("tif"),
        "audio/ogg" => Some("ogg"),
        "audio/mpeg" => Some("mp3"),
        "video/mp4" => Some("mp4"),
        "image/webp" => Some("webp"),
        _ => None,
    }
}

fn is_utf8_prefix(bytes: &[u8]) -> bool {
    match std::str::from_utf8(bytes) {
        Ok(_) => true,
        Err(error) => error.error_len().is_none(),
    }
}

/// MPEG-1/2 layer III frame sync: eleven set bits, then a non-reserved version and layer III.
fn is_mpeg_audio_frame(bytes: &[u8]) -> bool {
    matches!(bytes, [0xFF, second, ..] if second & 0xE0 == 0xE0 && second & 0x06 == 0x02 && second & 0x18 != 0x08)
}
