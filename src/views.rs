//! Plain-HTML page builders. Every piece of user-supplied data that is
//! interpolated into markup passes through [`escape_html`] first.

use crate::db::Post;
use crate::session::Identity;

pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn nav(user: Option<&Identity>) -> String {
    let mut links = vec![r#"<a href="/">Home</a>"#.to_string()];
    match user {
        Some(identity) => {
            links.push(r#"<a href="/posts">Posts</a>"#.to_string());
            links.push(r#"<a href="/post/new">New Post</a>"#.to_string());
            if identity.is_admin() {
                links.push(r#"<a href="/admin">Admin</a>"#.to_string());
            }
            links.push(r#"<a href="/logout">Logout</a>"#.to_string());
        }
        None => links.push(r#"<a href="/login">Login</a>"#.to_string()),
    }
    links.join(" | ")
}

fn layout(title: &str, user: Option<&Identity>, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"><title>{title} - Cyberclash</title></head>
<body>
<nav>{nav}</nav>
<hr>
{body}
</body>
</html>"#,
        title = escape_html(title),
        nav = nav(user),
        body = body,
    )
}

pub fn index_page(user: Option<&Identity>) -> String {
    let greeting = match user {
        Some(identity) => format!(
            "<p>Welcome back, <strong>{}</strong>.</p>",
            escape_html(&identity.username)
        ),
        None => r#"<p>Welcome. <a href="/login">Log in</a> to read and write posts.</p>"#
            .to_string(),
    };
    layout("Home", user, &format!("<h1>Cyberclash</h1>\n{greeting}"))
}

pub fn login_page(error: Option<&str>) -> String {
    let error_line = match error {
        Some(msg) => format!(r#"<p class="error">{}</p>"#, escape_html(msg)),
        None => String::new(),
    };
    let body = format!(
        r#"<h1>Login</h1>
{error_line}
<form method="post" action="/login">
  <label>Username <input type="text" name="username"></label><br>
  <label>Password <input type="password" name="password"></label><br>
  <button type="submit">Login</button>
</form>"#
    );
    layout("Login", None, &body)
}

pub fn posts_page(user: &Identity, posts: &[Post]) -> String {
    let mut items = String::new();
    for post in posts {
        items.push_str(&format!(
            r#"<article>
  <h2>{title}</h2>
  <p>by {author}</p>
  <p>{content}</p>
  <form method="post" action="/post/delete/{id}">
    <button type="submit">Delete</button>
  </form>
</article>
"#,
            title = escape_html(&post.title),
            author = escape_html(&post.author),
            content = escape_html(&post.content),
            id = post.id,
        ));
    }
    if posts.is_empty() {
        items.push_str("<p>No posts yet.</p>");
    }
    layout(
        "Posts",
        Some(user),
        &format!("<h1>Posts</h1>\n{items}"),
    )
}

pub fn new_post_page(user: &Identity) -> String {
    let body = r#"<h1>New Post</h1>
<form method="post" action="/post/create">
  <label>Title <input type="text" name="title"></label><br>
  <label>Content <textarea name="content"></textarea></label><br>
  <button type="submit">Create</button>
</form>"#;
    layout("New Post", Some(user), body)
}

pub fn admin_page(user: &Identity) -> String {
    let body = format!(
        "<h1>Admin</h1>\n<p>Signed in as {} (admin).</p>",
        escape_html(&user.username)
    );
    layout("Admin", Some(user), &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(
            escape_html(r#"<b>&"'"#),
            "&lt;b&gt;&amp;&quot;&#39;"
        );
    }

    #[test]
    fn posts_page_escapes_user_content() {
        let user = Identity {
            username: "alice".to_string(),
            role: "user".to_string(),
        };
        let posts = vec![Post {
            id: 1,
            author: "alice".to_string(),
            title: "<script>".to_string(),
            content: "a & b".to_string(),
        }];
        let html = posts_page(&user, &posts);
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("a &amp; b"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn nav_shows_admin_link_only_for_admins() {
        let admin = Identity {
            username: "admin".to_string(),
            role: "admin".to_string(),
        };
        let user = Identity {
            username: "alice".to_string(),
            role: "user".to_string(),
        };
        assert!(index_page(Some(&admin)).contains(r#"href="/admin""#));
        assert!(!index_page(Some(&user)).contains(r#"href="/admin""#));
        assert!(index_page(None).contains(r#"href="/login""#));
    }
}
