//! File-type validation by extension.
//!
//! The allowed table is fixed and process-wide. Validation trusts the
//! client-declared filename only; content is never inspected.

use super::error::UploadError;

/// Extensions accepted for upload, with leading dot.
pub const ALLOWED_EXTENSIONS: [&str; 3] = [".txt", ".png", ".json"];

/// Content type for an extension (lowercase, with leading dot).
#[must_use]
pub fn content_type_for(extension: &str) -> Option<&'static str> {
    match extension {
        ".txt" => Some("text/plain"),
        ".png" => Some("image/png"),
        ".json" => Some("application/json"),
        _ => None,
    }
}

/// Validate an extension against the allowed table.
///
/// The extension is lower-cased before lookup.
///
/// # Errors
///
/// Returns [`UploadError::UnsupportedFileType`] carrying the allowed list
/// when the extension is not in the table.
pub fn validate(extension: &str) -> Result<&'static str, UploadError> {
    let extension = extension.to_ascii_lowercase();
    content_type_for(&extension).ok_or_else(|| UploadError::unsupported_file_type(extension))
}

/// Extension of `filename`, lower-cased, including the dot.
///
/// Empty when the filename contains no dot. The suffix starts at the last
/// dot, so `archive.tar.gz` yields `.gz`.
#[must_use]
pub fn extension_of(filename: &str) -> String {
    filename
        .rfind('.')
        .map_or_else(String::new, |idx| filename[idx..].to_ascii_lowercase())
}


#[cfg(test)]
mod property_tests {
    use proptest::prelude::*;

    use super::*;

    proptest! {
        // Any extension outside the fixed table is rejected, and the error
        // message names the allowed list.
        #[test]
        fn prop_unknown_extensions_rejected(ext in "\\.[a-z0-9]{1,8}") {
            let in_table = ALLOWED_EXTENSIONS.contains(&ext.as_str());
            match validate(&ext) {
                Ok(_) => prop_assert!(in_table),
                Err(err) => {
                    prop_assert!(!in_table);
                    let msg = err.to_string();
                    for allowed in ALLOWED_EXTENSIONS {
                        prop_assert!(msg.contains(allowed));
                    }
                }
            }
        }

        // extension_of output is always lowercase and either empty or
        // dot-prefixed.
        #[test]
        fn prop_extension_shape(filename in ".*") {
            let ext = extension_of(&filename);
            prop_assert!(ext.is_empty() || ext.starts_with('.'));
            prop_assert_eq!(ext.to_ascii_lowercase(), ext.clone());
        }

        // Lookup never depends on case.
        #[test]
        fn prop_case_insensitive(ext in "\\.[a-zA-Z]{1,6}") {
            let lower = ext.to_ascii_lowercase();
            prop_assert_eq!(validate(&ext).is_ok(), validate(&lower).is_ok());
        }
    }
}
