//! Case and naming helpers. All functions are pure; none consult any
//! configuration or global state.

use convert_case::{Case, Casing};
use inflector::Inflector;

/// Lower camel case, `user_name` -> `userName`.
#[must_use]
pub fn camel(s: &str) -> String {
    s.to_case(Case::Camel)
}

/// Snake case, `RemotePost` -> `remote_post`.
#[must_use]
pub fn snake(s: &str) -> String {
    s.to_case(Case::Snake)
}

/// Constant case, `RemotePost` -> `REMOTE_POST`.
#[must_use]
pub fn constant(s: &str) -> String {
    s.to_case(Case::UpperSnake)
}

/// Upper-case the first character, leave the rest untouched.
#[must_use]
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();

    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lower-case the first character, leave the rest untouched.
#[must_use]
pub fn lower_first(s: &str) -> String {
    let mut chars = s.chars();

    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Singular form of an association name, `comments` -> `comment`.
#[must_use]
pub fn singularize(s: &str) -> String {
    s.to_singular()
}

/// Dot-join the non-empty parts. Empty parts never produce leading,
/// trailing, or doubled dots.
#[must_use]
pub fn join_dotted<'a, I>(parts: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    parts
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(".")
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camel_lowers_the_first_word() {
        assert_eq!(camel("user_name"), "userName");
        assert_eq!(camel("blog_post_tags"), "blogPostTags");
        assert_eq!(camel("title"), "title");
    }

    #[test]
    fn snake_splits_humps() {
        assert_eq!(snake("RemotePost"), "remote_post");
        assert_eq!(snake("RemotePostBase"), "remote_post_base");
    }

    #[test]
    fn constant_is_upper_snake() {
        assert_eq!(constant("RemotePost"), "REMOTE_POST");
    }

    #[test]
    fn capitalize_only_touches_the_first_char() {
        assert_eq!(capitalize("comment"), "Comment");
        assert_eq!(capitalize("blog_post"), "Blog_post");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn lower_first_only_touches_the_first_char() {
        assert_eq!(lower_first("MyApp"), "myApp");
        assert_eq!(lower_first(""), "");
    }

    #[test]
    fn singularize_handles_regular_and_irregular_forms() {
        assert_eq!(singularize("comments"), "comment");
        assert_eq!(singularize("people"), "person");
        assert_eq!(singularize("author"), "author");
    }

    #[test]
    fn join_dotted_skips_empty_parts() {
        assert_eq!(join_dotted(["com.example", "blog"]), "com.example.blog");
        assert_eq!(join_dotted(["", "base"]), "base");
        assert_eq!(join_dotted(["blog", ""]), "blog");

        let empty: [&str; 0] = [];
        assert_eq!(join_dotted(empty), "");
    }
}
