//! Upload acceptance rules shared by the HTTP endpoint and the CLI.
//!
//! The widget applies the same format and size checks client-side, but the
//! client check is advisory only; this module is the authoritative gate.

use crate::error::{UploadError, UploadResult};

/// Accepted audio extensions, lowercase.
pub const ALLOWED_EXTENSIONS: &[&str] = &["wav", "mp3", "m4a", "flac", "ogg", "aac"];

/// Maximum accepted upload size: 25 MiB (Whisper API limit).
pub const MAX_UPLOAD_BYTES: u64 = 25 * 1024 * 1024;

/// Lowercased suffix after the last `.`, if any.
pub fn file_extension(name: &str) -> Option<String> {
    name.rsplit_once('.').map(|(_, ext)| ext.to_ascii_lowercase())
}

/// Whether the filename carries an accepted audio extension.
pub fn is_allowed_file(name: &str) -> bool {
    file_extension(name).is_some_and(|ext| ALLOWED_EXTENSIONS.contains(&ext.as_str()))
}

/// Validate a candidate upload. Format is checked before size.
pub fn validate_upload(name: &str, size: u64) -> UploadResult<()> {
    if name.is_empty() {
        return Err(UploadError::EmptyFilename);
    }
    if !is_allowed_file(name) {
        return Err(UploadError::InvalidFormat);
    }
    if size > MAX_UPLOAD_BYTES {
        return Err(UploadError::TooLarge(size));
    }
    Ok(())
}

/// Reduce a client-supplied filename to a safe basename: path components
/// stripped, characters outside `[A-Za-z0-9._-]` replaced with `_`,
/// leading/trailing dots and underscores trimmed.
pub fn sanitize_filename(name: &str) -> String {
    let base = name.rsplit(['/', '\\']).next().unwrap_or(name);
    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect();
    let trimmed = cleaned.trim_matches(|c: char| c == '.' || c == '_');
    if trimmed.is_empty() {
        "upload".to_string()
    } else {
        trimmed.to_string()
    }
}

/// MIME type forwarded to the Whisper API for each accepted extension.
pub fn mime_for_extension(ext: &str) -> &'static str {
    match ext {
        "wav" => "audio/wav",
        "mp3" => "audio/mpeg",
        "m4a" => "audio/mp4",
        "flac" => "audio/flac",
        "ogg" => "audio/ogg",
        "aac" => "audio/aac",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_extension() {
        assert_eq!(file_extension("speech.WAV"), Some("wav".to_string()));
        assert_eq!(file_extension("a.b.mp3"), Some("mp3".to_string()));
        assert_eq!(file_extension(".ogg"), Some("ogg".to_string()));
        assert_eq!(file_extension("noext"), None);
        assert_eq!(file_extension("trailing."), Some(String::new()));
    }

    #[test]
    fn test_allowed_files() {
        for name in ["a.wav", "a.mp3", "a.m4a", "a.flac", "a.ogg", "a.aac", "a.MP3"] {
            assert!(is_allowed_file(name), "{name} should be accepted");
        }
        for name in ["a.pdf", "a.txt", "a.mp4", "noext", "a."] {
            assert!(!is_allowed_file(name), "{name} should be rejected");
        }
    }

    #[test]
    fn test_validate_checks_format_before_size() {
        // Oversize AND wrong format: format error wins.
        let err = validate_upload("huge.pdf", MAX_UPLOAD_BYTES + 1).unwrap_err();
        assert!(matches!(err, UploadError::InvalidFormat));
    }

    #[test]
    fn test_validate_size_boundary() {
        assert!(validate_upload("a.wav", MAX_UPLOAD_BYTES).is_ok());
        let err = validate_upload("a.wav", MAX_UPLOAD_BYTES + 1).unwrap_err();
        assert!(matches!(err, UploadError::TooLarge(_)));
    }

    #[test]
    fn test_validate_empty_filename() {
        let err = validate_upload("", 10).unwrap_err();
        assert!(matches!(err, UploadError::EmptyFilename));
    }

    #[test]
    fn test_sanitize_filename() {
        assert_eq!(sanitize_filename("speech.wav"), "speech.wav");
        assert_eq!(sanitize_filename("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_filename("C:\\Users\\me\\voice memo.m4a"), "voice_memo.m4a");
        assert_eq!(sanitize_filename("..hidden.ogg"), "hidden.ogg");
        assert_eq!(sanitize_filename("///"), "upload");
    }

    #[test]
    fn test_validate_file_on_disk() {
        // Mirrors the CLI path: name and size taken from a real file.
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clip.wav");
        std::fs::write(&path, vec![0u8; 128]).unwrap();

        let name = path.file_name().unwrap().to_str().unwrap();
        let size = std::fs::metadata(&path).unwrap().len();
        assert!(validate_upload(name, size).is_ok());
    }

    #[test]
    fn test_mime_for_extension() {
        assert_eq!(mime_for_extension("mp3"), "audio/mpeg");
        assert_eq!(mime_for_extension("m4a"), "audio/mp4");
        assert_eq!(mime_for_extension("xyz"), "application/octet-stream");
    }
}
