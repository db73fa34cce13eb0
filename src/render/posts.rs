use super::rule;
use crate::models::{Comment, Post, User};
use crate::views::{Bookmark, HomeView};

/// Two-line preview used on the home page.
///
/// ```text
/// ★ Flexbox in practice
///   Mao (@mao) · css · 2 March 2024 · 2 comments · /posts/p1
/// ```
pub fn post_preview(post: &Post, featured: bool) -> String {
    let marker = if featured { "★" } else { "•" };
    format!(
        "{} {}\n  {} (@{}) · {} · {} · {} · {}",
        marker,
        post.title,
        post.author.name,
        post.author.username,
        post.category,
        post.display_date(),
        comment_count(post.comment_count),
        post.client_url
    )
}

/// Featured post first, then the rest.
pub fn home_page(home: &HomeView) -> String {
    let mut sections = Vec::new();
    if let Some(featured) = home.featured() {
        sections.push(post_preview(featured, true));
    }
    sections.extend(home.regular().into_iter().map(|post| post_preview(post, false)));
    if sections.is_empty() {
        return "  No articles yet.".to_string();
    }
    sections.join("\n\n")
}

/// Full article with a bookmark line for `user`.
pub fn post_page(post: &Post, user: Option<&User>) -> String {
    let bookmark = Bookmark::for_user(&post.id, true, user);
    let mut out = vec![
        post.title.clone(),
        rule('═'),
        format!(
            "{} (@{}) · {} · {}",
            post.author.name,
            post.author.username,
            post.category,
            post.display_date()
        ),
    ];
    if let Some(credit) = &post.image_credit {
        out.push(format!("Image: {}", credit));
    }
    if user.is_some() {
        out.push(super::bookmark_line(&bookmark));
    }
    out.push(String::new());
    out.push(post.text.clone());
    out.join("\n")
}

pub fn comment_list(comments: &[Comment]) -> String {
    let mut out = vec![format!("Comments ({})", comments.len()), rule('─')];
    if comments.is_empty() {
        out.push("  No comments yet.".to_string());
    }
    for comment in comments {
        out.push(format!(
            "  {} (@{}) · {}",
            comment.author.name,
            comment.author.username,
            comment.timestamp.format("%-d %B %Y")
        ));
        out.push(format!("    {}", comment.text));
    }
    out.join("\n")
}

fn comment_count(count: u32) -> String {
    match count {
        1 => "1 comment".to_string(),
        n => format!("{} comments", n),
    }
}
