//! Identifier canonicalization.
//!
//! Service names are case- and separator-insensitive: `database_connection`,
//! `database.connection` and `DatabaseConnection` all address the same
//! service. [`pascalize`] produces the canonical lookup form, [`underscore`]
//! the public-facing display form.

/// Canonicalizes a service name into PascalCase.
///
/// Splits on `_` and `.`, upper-cases the first letter of each segment and
/// concatenates. Remaining letters are left untouched, so an already
/// PascalCase input passes through unchanged — the transform is idempotent.
///
/// # Examples
/// ```
/// use bodega_support::ident::pascalize;
///
/// assert_eq!(pascalize("database_connection"), "DatabaseConnection");
/// assert_eq!(pascalize("database.connection"), "DatabaseConnection");
/// assert_eq!(pascalize("DatabaseConnection"), "DatabaseConnection");
/// assert_eq!(pascalize(&pascalize("my_service")), pascalize("my_service"));
/// ```
pub fn pascalize(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut upper_next = true;

    for ch in name.chars() {
        if ch == '_' || ch == '.' {
            upper_next = true;
        } else if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }

    out
}

/// Converts a PascalCase (or mixed-case) identifier into snake_case.
///
/// A `_` is inserted before an uppercase letter preceded by a lowercase
/// letter or digit, and before the last uppercase letter of an uppercase run
/// that is followed by a lowercase letter (so acronyms stay together:
/// `HTTPServer` → `http_server`). A literal `.` maps to `_`. The result is
/// lower-cased and stable under repeated application.
///
/// # Examples
/// ```
/// use bodega_support::ident::underscore;
///
/// assert_eq!(underscore("MyService"), "my_service");
/// assert_eq!(underscore("HTTPServer"), "http_server");
/// assert_eq!(underscore("database.connection"), "database_connection");
/// assert_eq!(underscore(&underscore("MyService")), "my_service");
/// ```
pub fn underscore(id: &str) -> String {
    let chars: Vec<char> = id.chars().collect();
    let mut out = String::with_capacity(id.len() + 4);

    for (i, &ch) in chars.iter().enumerate() {
        if ch == '.' {
            out.push('_');
            continue;
        }

        if ch.is_uppercase() {
            let prev = i.checked_sub(1).map(|j| chars[j]);
            let next = chars.get(i + 1);

            let after_lower_or_digit =
                prev.is_some_and(|p| p.is_lowercase() || p.is_ascii_digit());
            let run_end_before_lower =
                prev.is_some_and(char::is_uppercase) && next.is_some_and(|n| n.is_lowercase());

            if after_lower_or_digit || run_end_before_lower {
                out.push('_');
            }
            out.extend(ch.to_lowercase());
        } else {
            out.push(ch);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pascalize_snake() {
        assert_eq!(pascalize("my_service"), "MyService");
        assert_eq!(pascalize("database_connection"), "DatabaseConnection");
    }

    #[test]
    fn pascalize_dotted() {
        assert_eq!(pascalize("cache.backend"), "CacheBackend");
    }

    #[test]
    fn pascalize_single_word() {
        assert_eq!(pascalize("logger"), "Logger");
    }

    #[test]
    fn pascalize_idempotent() {
        let once = pascalize("user_repository");
        assert_eq!(pascalize(&once), once);
    }

    #[test]
    fn pascalize_preserves_inner_case() {
        // ucwords-style: only the first letter of each segment is touched
        assert_eq!(pascalize("parseHTML_page"), "ParseHTMLPage");
    }

    #[test]
    fn underscore_simple() {
        assert_eq!(underscore("MyService"), "my_service");
        assert_eq!(underscore("Logger"), "logger");
    }

    #[test]
    fn underscore_acronym_run() {
        assert_eq!(underscore("HTTPServer"), "http_server");
        assert_eq!(underscore("ParseXMLDocument"), "parse_xml_document");
    }

    #[test]
    fn underscore_digit_boundary() {
        assert_eq!(underscore("Sha256Hasher"), "sha256_hasher");
    }

    #[test]
    fn underscore_maps_dots() {
        assert_eq!(underscore("cache.Backend"), "cache_backend");
    }

    #[test]
    fn underscore_stable() {
        let once = underscore("DatabaseConnection");
        assert_eq!(underscore(&once), once);
    }

    #[test]
    fn round_trip() {
        assert_eq!(underscore(&pascalize("my_service")), "my_service");
        assert_eq!(underscore(&pascalize("database_connection")), "database_connection");
    }
}
