//! Filename extension allow-list.
//!
//! An enumerated set of servable asset types instead of a denylist of
//! dangerous ones. Paths without an extension are accepted (e.g. `favicon`).

use super::PathRejection;

pub(super) fn check(path: &str) -> Result<(), PathRejection> {
    let file_name = path.rsplit('/').next().unwrap_or(path);

    // Extension is the text after the final `.` of the last segment.
    let Some((_, ext)) = file_name.rsplit_once('.') else {
        return Ok(());
    };
    if ext.is_empty() {
        return Ok(());
    }

    if is_allowed(&ext.to_ascii_lowercase()) {
        Ok(())
    } else {
        Err(PathRejection::Extension(ext.to_string()))
    }
}

/// Servable asset extensions, grouped by kind.
fn is_allowed(ext: &str) -> bool {
    matches!(
        ext,
        // Images
        "jpg" | "jpeg" | "png" | "gif" | "svg" | "webp" | "ico" | "bmp" | "tiff"
        // Styles
        | "css" | "scss" | "sass" | "less"
        // Scripts
        | "js" | "ts" | "jsx" | "tsx" | "mjs"
        // Fonts
        | "woff" | "woff2" | "ttf" | "otf" | "eot"
        // Documents
        | "pdf" | "txt" | "md" | "json" | "xml"
        // Media
        | "mp3" | "mp4" | "wav" | "ogg" | "webm" | "avi" | "mov"
        // Archives
        | "zip" | "gz" | "tar"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allowed_extensions() {
        for path in ["a.jpg", "a.css", "a.js", "a.woff2", "a.pdf", "a.mp4", "a.gz"] {
            assert_eq!(check(path), Ok(()), "{path}");
        }
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(check("LOGO.SVG"), Ok(()));
        assert_eq!(check("photo.JPeG"), Ok(()));
    }

    #[test]
    fn test_rejected_extensions() {
        for path in ["a.exe", "a.sh", "a.ini", "a.sql", "a.db", "a.php"] {
            assert!(matches!(check(path), Err(PathRejection::Extension(_))), "{path}");
        }
    }

    #[test]
    fn test_no_extension_accepted() {
        assert_eq!(check("favicon"), Ok(()));
        assert_eq!(check("fonts/icons"), Ok(()));
    }

    #[test]
    fn test_only_last_segment_counts() {
        // Dots in directory names are not extensions
        assert_eq!(check("v1.2/app.js"), Ok(()));
        assert!(check("img.png/run.exe").is_err());
    }

    #[test]
    fn test_last_dot_wins() {
        assert_eq!(check("app.min.js"), Ok(()));
        assert!(check("style.css.exe").is_err());
    }

    #[test]
    fn test_trailing_dot_accepted() {
        // No text after the final dot means no extension
        assert_eq!(check("notes."), Ok(()));
    }
}
