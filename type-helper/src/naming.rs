//! Naming conventions shared by derivation and artifact lookup
//!
//! Mirrors the ActiveSupport inflections a Rails project relies on:
//! `comments` → `Comment`, `BlogPost` → `blog_post`, `BlogPost` → `blog_posts`.

use heck::{ToSnakeCase, ToUpperCamelCase};

/// Suffix appended to an entity name to form its output type name
pub const TYPE_SUFFIX: &str = "Type";

/// Singular form of a word, keeping uncountable words as they are
pub fn singularize(word: &str) -> String {
    pluralizer::pluralize(word, 1, false)
}

/// Plural form of a word
pub fn pluralize(word: &str) -> String {
    pluralizer::pluralize(word, 2, false)
}

/// Class name for a model or association name (`blog_posts` → `BlogPost`)
///
/// Namespaces are kept: `blog::posts` → `Blog::Post`.
pub fn class_name(name: &str) -> String {
    inflect_last(
        name,
        "::",
        |segment| segment.to_upper_camel_case(),
        |segment| singularize(&segment.to_snake_case()).to_upper_camel_case(),
    )
}

/// File path stem for an entity (`BlogPost` → `blog_post`, `Blog::Post` → `blog/post`)
pub fn file_name(entity: &str) -> String {
    inflect_last(
        entity,
        "/",
        |segment| segment.to_snake_case(),
        |segment| singularize(&segment.to_snake_case()),
    )
}

/// Table name for an entity (`BlogPost` → `blog_posts`, `Blog::Post` → `blog_posts`)
pub fn table_name(entity: &str) -> String {
    pluralize(&file_name(entity).replace('/', "_"))
}

/// Split a class path on `::`, inflect namespace segments and the final
/// segment separately, and join them with `separator`
fn inflect_last(
    name: &str,
    separator: &str,
    namespace: impl Fn(&str) -> String,
    last: impl Fn(&str) -> String,
) -> String {
    let mut segments: Vec<&str> = name.split("::").collect();
    let tail = segments.pop().map(&last).unwrap_or_default();
    let mut parts: Vec<String> = segments.into_iter().map(namespace).collect();
    parts.push(tail);
    parts.join(separator)
}

/// Output type name for an entity (`Comment` → `CommentType`)
pub fn type_name(entity: &str) -> String {
    format!("{entity}{TYPE_SUFFIX}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_name() {
        assert_eq!(class_name("comments"), "Comment");
        assert_eq!(class_name("blog_posts"), "BlogPost");
        assert_eq!(class_name("Comment"), "Comment");
        assert_eq!(class_name("author"), "Author");
    }

    #[test]
    fn test_file_and_table_name() {
        assert_eq!(file_name("BlogPost"), "blog_post");
        assert_eq!(file_name("Comments"), "comment");
        assert_eq!(table_name("Comment"), "comments");
    }

    #[test]
    fn test_namespaced_names() {
        assert_eq!(class_name("Blog::Post"), "Blog::Post");
        assert_eq!(class_name("blog::posts"), "Blog::Post");
        assert_eq!(file_name("Blog::Post"), "blog/post");
        assert_eq!(file_name("Admin::BlogPosts"), "admin/blog_post");
        assert_eq!(table_name("Blog::Post"), "blog_posts");
    }

    #[test]
    fn test_type_name() {
        assert_eq!(type_name("Comment"), "CommentType");
    }
}
