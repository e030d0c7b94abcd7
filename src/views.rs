//! # Views
//!
//! Server-rendered HTML pages. Every page shares one layout with the
//! navigation bar and the pending flash notices. Values that come from users
//! (usernames, flash text) are escaped before they are placed in markup.

use crate::session::flash::Flash;
use axum::response::Html;
use htmlescape::encode_minimal as escape;

const TITLE: &str = "Travel Booking";

fn layout(title: &str, flashes: &[Flash], body: &str) -> Html<String> {
    let notices: String = flashes
        .iter()
        .map(|f| {
            format!(
                r#"<div class="flash flash-{}">{}</div>"#,
                f.level.as_str(),
                escape(&f.message)
            )
        })
        .collect();

    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} | {TITLE}</title>
<link rel="stylesheet" href="/static/style.css">
</head>
<body>
<nav>
<a href="/">{TITLE}</a>
<a href="/home">Home</a>
<a href="/about">About</a>
<a href="/contact">Contact</a>
<a href="/logout">Logout</a>
</nav>
<main>
{notices}
{body}
</main>
</body>
</html>
"#,
        title = escape(title),
    ))
}

/// Login and signup forms side by side.
pub fn login_page(flashes: &[Flash]) -> Html<String> {
    layout(
        "Login",
        flashes,
        r#"<section class="auth">
<form method="post" action="/login">
<h2>Login</h2>
<input name="username" placeholder="Username" required>
<input name="password" type="password" placeholder="Password" required>
<button type="submit">Login</button>
</form>
<form method="post" action="/signup">
<h2>Sign up</h2>
<input name="username" placeholder="Username" required>
<input name="email" type="email" placeholder="Email" required>
<input name="password" type="password" placeholder="Password" required>
<button type="submit">Sign up</button>
</form>
</section>"#,
    )
}

pub fn home_page(username: &str, flashes: &[Flash]) -> Html<String> {
    let body = format!(
        r#"<section class="home">
<h1>Welcome, {}!</h1>
<p>Plan your next trip: browse destinations, compare packages and manage your bookings.</p>
</section>"#,
        escape(username)
    );
    layout("Home", flashes, &body)
}

pub fn about_page(flashes: &[Flash]) -> Html<String> {
    layout(
        "About",
        flashes,
        r#"<section class="about">
<h1>About us</h1>
<p>We help travellers find and book trips with as little friction as possible.</p>
</section>"#,
    )
}

pub fn contact_page(flashes: &[Flash]) -> Html<String> {
    layout(
        "Contact",
        flashes,
        r#"<section class="contact">
<h1>Contact us</h1>
<form method="post" action="/contact">
<input name="name" placeholder="Your name" required>
<input name="email" type="email" placeholder="Your email" required>
<textarea name="message" placeholder="Your message" required></textarea>
<button type="submit">Send</button>
</form>
</section>"#,
    )
}

pub fn error_page(message: &str, flashes: &[Flash]) -> Html<String> {
    let body = format!(
        r#"<section class="error">
<h2>{}</h2>
</section>"#,
        escape(message)
    );
    layout("Error", flashes, &body)
}

/// Shown instead of the login page when the app started without a database.
pub fn database_error_page(flashes: &[Flash]) -> Html<String> {
    layout(
        "Database error",
        flashes,
        r#"<section class="error">
<h2>Database connection error.</h2>
<p>Please check your MongoDB connection string.</p>
<p>Set the MONGO_URI environment variable to a reachable MongoDB deployment, or make sure MongoDB is running at the configured address.</p>
</section>"#,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::flash::Level;

    #[test]
    fn usernames_are_escaped() {
        let Html(page) = home_page("<script>alert(1)</script>", &[]);
        assert!(!page.contains("<script>alert(1)</script>"));
        assert!(page.contains("&lt;script&gt;"));
    }

    #[test]
    fn flashes_render_with_their_level() {
        let flashes = vec![Flash {
            level: Level::Danger,
            message: "Invalid username or password".into(),
        }];
        let Html(page) = login_page(&flashes);
        assert!(page.contains(r#"<div class="flash flash-danger">Invalid username or password</div>"#));
    }
}
