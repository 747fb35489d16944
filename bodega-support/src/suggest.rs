//! Text helpers for human-friendly error messages.
//!
//! "Did you mean?" suggestions for misspelled service names, and type-name
//! shortening for readable error output.

/// Generates "did you mean?" suggestions for an unresolved service name.
///
/// Names are compared case- and separator-insensitively, so a request for
/// `"DataBase"` will suggest a registered `"database_connection"`. Exact
/// folded matches score highest, then substring containment, then common
/// prefixes of at least three characters. Ties break lexicographically so
/// the output is deterministic.
pub fn suggest_similar(requested: &str, available: &[String], max_suggestions: usize) -> Vec<String> {
    let wanted = fold(requested);

    let mut scored: Vec<(&str, usize)> = available
        .iter()
        .filter_map(|name| {
            let have = fold(name);

            if have == wanted {
                return Some((name.as_str(), 200));
            }

            if have.contains(&wanted) || wanted.contains(&have) {
                return Some((name.as_str(), 100));
            }

            let common = have
                .bytes()
                .zip(wanted.bytes())
                .take_while(|(a, b)| a == b)
                .count();

            if common >= 3 {
                return Some((name.as_str(), common * 10));
            }

            None
        })
        .collect();

    scored.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    scored
        .into_iter()
        .take(max_suggestions)
        .map(|(name, _)| name.to_string())
        .collect()
}

/// Folds a service name for comparison: separators stripped, lower-cased.
fn fold(name: &str) -> String {
    name.chars()
        .filter(|&c| c != '_' && c != '.')
        .flat_map(char::to_lowercase)
        .collect()
}

/// Shortens a fully qualified type name for display in error messages.
///
/// Module paths are dropped from every component, including inside generic
/// arguments, leaving just the type names a `TypeMismatch` message needs.
///
/// ```
/// use bodega_support::suggest::shorten_type_name;
///
/// assert_eq!(shorten_type_name("my_app::logging::ConsoleLogger"), "ConsoleLogger");
/// assert_eq!(
///     shorten_type_name("alloc::sync::Arc<dyn my_app::cache::Cache>"),
///     "Arc<dyn Cache>"
/// );
/// ```
pub fn shorten_type_name(full_name: &str) -> String {
    let mut result = String::with_capacity(full_name.len());
    let mut segment = String::new();
    let mut chars = full_name.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == ':' && chars.peek() == Some(&':') {
            // path separator: what came before it was a module prefix
            chars.next();
            segment.clear();
        } else if matches!(ch, '<' | '>' | ',' | ' ') {
            // generic punctuation ends the current component
            result.push_str(&segment);
            result.push(ch);
            segment.clear();
        } else {
            segment.push(ch);
        }
    }

    result.push_str(&segment);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn suggest_close_misspelling() {
        let available = names(&["user_service", "user_repository", "logger", "database"]);

        let suggestions = suggest_similar("user_servise", &available, 3);
        assert!(!suggestions.is_empty());
        assert_eq!(suggestions[0], "user_service");
    }

    #[test]
    fn suggest_across_case_forms() {
        let available = names(&["database_connection"]);

        let suggestions = suggest_similar("DataBase", &available, 3);
        assert_eq!(suggestions, vec!["database_connection"]);
    }

    #[test]
    fn suggest_no_match() {
        let available = names(&["database"]);
        let suggestions = suggest_similar("xyz_abc_def", &available, 3);
        assert!(suggestions.is_empty());
    }

    #[test]
    fn suggest_respects_limit() {
        let available = names(&["cache_a", "cache_b", "cache_c", "cache_d"]);
        let suggestions = suggest_similar("cache", &available, 2);
        assert_eq!(suggestions.len(), 2);
    }

    #[test]
    fn suggest_deterministic_order() {
        let available = names(&["logger_b", "logger_a"]);
        let suggestions = suggest_similar("logger", &available, 3);
        assert_eq!(suggestions, vec!["logger_a", "logger_b"]);
    }

    #[test]
    fn shorten_drops_module_path() {
        assert_eq!(shorten_type_name("my_app::repos::UserRepository"), "UserRepository");
    }

    #[test]
    fn shorten_inside_generic_arguments() {
        assert_eq!(
            shorten_type_name("alloc::sync::Arc<dyn my_app::logging::Logger>"),
            "Arc<dyn Logger>"
        );
        assert_eq!(
            shorten_type_name("std::collections::HashMap<alloc::string::String, u32>"),
            "HashMap<String, u32>"
        );
    }

    #[test]
    fn shorten_bare_name_unchanged() {
        assert_eq!(shorten_type_name("u32"), "u32");
    }
}
