//! Naming conventions derived from a model name.
//!
//! All three functions are total and pure: no I/O, no shared state, and
//! calling them twice with the same input yields the same output.

/// Convert `PascalCase` / `camelCase` to `snake_case`.
///
/// An underscore is inserted before every ASCII uppercase letter except the
/// first character, then the whole result is lowercased.
///
/// ```
/// use gantry_core::domain::inflector::snake_case;
/// assert_eq!(snake_case("UserProfile"), "user_profile");
/// ```
pub fn snake_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    for (i, c) in s.chars().enumerate() {
        if i > 0 && c.is_ascii_uppercase() {
            out.push('_');
        }
        out.push(c);
    }
    out.to_lowercase()
}

/// Naive English pluralisation: `y` becomes `ies`, anything else gets an `s`.
///
/// Case is preserved, so `Category` becomes `Categories`.
pub fn pluralize(s: &str) -> String {
    match s.strip_suffix('y') {
        Some(stem) => format!("{stem}ies"),
        None => format!("{s}s"),
    }
}

/// Lowercase the first character only. Empty input yields an empty string.
pub fn lower_initial(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn snake_case_splits_on_uppercase() {
        assert_eq!(snake_case("UserProfile"), "user_profile");
        assert_eq!(snake_case("Book"), "book");
        assert_eq!(snake_case("ID"), "i_d");
        assert_eq!(snake_case(""), "");
    }

    #[test]
    fn snake_case_leaves_snake_input_alone() {
        assert_eq!(snake_case("user_profile"), "user_profile");
    }

    #[test]
    fn pluralize_handles_y_suffix() {
        assert_eq!(pluralize("Category"), "Categories");
        assert_eq!(pluralize("Book"), "Books");
        assert_eq!(pluralize("y"), "ies");
        assert_eq!(pluralize(""), "s");
    }

    #[test]
    fn lower_initial_only_touches_first_char() {
        assert_eq!(lower_initial("UserProfile"), "userProfile");
        assert_eq!(lower_initial("already"), "already");
        assert_eq!(lower_initial("É"), "é");
    }

    #[test]
    fn lower_initial_empty_is_empty() {
        assert_eq!(lower_initial(""), "");
    }

    proptest! {
        #[test]
        fn snake_case_is_idempotent(s in "[A-Za-z0-9_]{0,24}") {
            let once = snake_case(&s);
            prop_assert_eq!(snake_case(&once), once);
        }

        #[test]
        fn pluralize_grows_and_ends_in_s(s in "\\PC{0,24}") {
            let plural = pluralize(&s);
            prop_assert!(plural.len() >= s.len());
            prop_assert!(plural.ends_with('s'));
        }

        #[test]
        fn lower_initial_keeps_tail(s in "[A-Za-z]{1,16}") {
            let lowered = lower_initial(&s);
            prop_assert_eq!(&lowered[1..], &s[1..]);
        }
    }
}
