//! Pretty output formatting.

use posts_core::post::Post;

/// Format a post for display.
pub fn format_post(post: &Post) -> String {
    let user = if post.user_id.is_empty() {
        "(unknown)"
    } else {
        post.user_id.as_str()
    };
    format!("{}\n  ID: {}\n  User: {}", post.content, post.id, user)
}

/// Format posts for display.
pub fn format_posts(posts: &[Post]) -> String {
    if posts.is_empty() {
        return "No posts found.".to_string();
    }
    let mut output = format!("POSTS ({})\n", posts.len());
    output.push_str(&"-".repeat(40));
    for post in posts {
        output.push_str(&format!("\n{}", format_post(post)));
        output.push('\n');
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_post() {
        let post = Post::new("u1", "hello").with_id("abc");
        assert_eq!(format_post(&post), "hello\n  ID: abc\n  User: u1");
    }

    #[test]
    fn test_format_post_without_user() {
        let post = Post::new("", "boo").with_id("ghost");
        assert_eq!(format_post(&post), "boo\n  ID: ghost\n  User: (unknown)");
    }

    #[test]
    fn test_format_posts_empty() {
        assert_eq!(format_posts(&[]), "No posts found.");
    }

    #[test]
    fn test_format_posts_header() {
        let posts = vec![
            Post::new("u1", "one").with_id("1"),
            Post::new("u2", "two").with_id("2"),
        ];
        let output = format_posts(&posts);

        assert!(output.starts_with("POSTS (2)\n"));
        assert!(output.contains("one\n  ID: 1\n  User: u1"));
        assert!(output.contains("two\n  ID: 2\n  User: u2"));
    }
}
