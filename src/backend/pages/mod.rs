//! HTML Pages
//!
//! Minimal server-rendered pages. The front-end behaviour (wallet connection,
//! contract calls) lives in the scripts under `/static/JS`; these pages only
//! provide the forms and the identity-derived values those scripts need.
//!
//! Every user-supplied value goes through [`escape_html`].

use axum::response::Html;

use crate::backend::auth::users::User;

/// Inline message rendered above a form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice<'a> {
    Error(&'a str),
    Success(&'a str),
}

/// Escape text for use in HTML element content and quoted attributes
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn layout(title: &str, body: &str, script: Option<&str>) -> Html<String> {
    let script = script
        .map(|name| format!(r#"<script type="module" src="/static/JS/{name}"></script>"#))
        .unwrap_or_default();

    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title} | DragonBlock</title>
<link rel="stylesheet" href="/static/css/dragonblock.css">
</head>
<body>
{body}
{script}
</body>
</html>
"#
    ))
}

fn notice_html(notice: Option<Notice<'_>>) -> String {
    match notice {
        Some(Notice::Error(message)) => format!(
            r#"<div id="error-alert" class="alert alert-danger" role="alert">{}</div>"#,
            escape_html(message)
        ),
        Some(Notice::Success(message)) => format!(
            r#"<div id="success-alert" class="alert alert-success" role="alert">{}</div>"#,
            escape_html(message)
        ),
        None => String::new(),
    }
}

/// Public landing page
pub fn landing_page() -> Html<String> {
    layout(
        "Welcome",
        r#"<h1>DragonBlock</h1>
<p>Crowdfunding backed by the chain.</p>
<a href="/signup-page">Sign up</a> <a href="/login-page">Log in</a>"#,
        Some("index-script.js"),
    )
}

/// Signup form, optionally with an error or success notice
pub fn signup_page(notice: Option<Notice<'_>>) -> Html<String> {
    let body = format!(
        r#"<h1>Sign up</h1>
{notice}
<form class="form" method="post" action="/signup">
<input type="email" name="email" placeholder="Email">
<input type="text" name="username" placeholder="Username">
<input type="password" name="password" placeholder="Password">
<input type="password" name="password-confirm" placeholder="Confirm password">
<input type="date" name="birthday">
<input type="text" name="wallet-address" id="wallet-address" placeholder="Wallet address">
<button type="submit">Sign up</button>
</form>
<a href="/login-page">Already registered? Log in</a>"#,
        notice = notice_html(notice),
    );
    layout("Sign up", &body, Some("login-signup-script.js"))
}

/// Login form; `next` is carried through a hidden field
pub fn login_page(error: Option<&str>, next: Option<&str>) -> Html<String> {
    let next_field = next
        .map(|next| format!(r#"<input type="hidden" name="next" value="{}">"#, escape_html(next)))
        .unwrap_or_default();

    let body = format!(
        r#"<h1>Log in</h1>
{notice}
<form class="form" method="post" action="/login">
<input type="email" name="email" placeholder="Email">
<input type="password" name="password" placeholder="Password">
{next_field}
<button type="submit">Log in</button>
</form>
<a href="/signup-page">No account? Sign up</a>"#,
        notice = notice_html(error.map(Notice::Error)),
    );
    layout("Log in", &body, Some("login-signup-script.js"))
}

/// Landing page after login
pub fn home_page(user: &User) -> Html<String> {
    let body = format!(
        r#"<h1>Welcome, <span id="username">{username}</span></h1>
<nav><a href="/profile-page">Profile</a> <a href="/create-campaign">Create campaign</a> <a href="/logout">Log out</a></nav>
<section id="campaigns"></section>"#,
        username = escape_html(&user.username),
    );
    layout("Home", &body, Some("home-script.js"))
}

/// Profile page with the user's registration data
pub fn profile_page(user: &User) -> Html<String> {
    let body = format!(
        r#"<h1>Profile</h1>
<dl>
<dt>Username</dt><dd id="username">{username}</dd>
<dt>Email</dt><dd id="email">{email}</dd>
<dt>Date of birth</dt><dd id="birthday">{birthday}</dd>
<dt>Wallet address</dt><dd id="wallet-address">{wallet}</dd>
</dl>
<section id="owned-campaigns"></section>
<a href="/home-page">Home</a> <a href="/logout">Log out</a>"#,
        username = escape_html(&user.username),
        email = escape_html(&user.email),
        birthday = user.birthday.format("%Y-%m-%d"),
        wallet = escape_html(&user.wallet_address),
    );
    layout("Profile", &body, Some("profile-script.js"))
}

/// Campaign creation form; the script posts to `/save-campaign`
pub fn create_campaign_page(user: &User) -> Html<String> {
    let body = format!(
        r#"<h1>New campaign</h1>
<p>Signed in as {username}</p>
<form class="form" id="form">
<input type="text" id="title" name="title" placeholder="Title">
<textarea id="description" name="description" placeholder="Description"></textarea>
<input type="number" id="eth-limit" step="0.01" placeholder="ETH limit">
<input type="number" id="week-duration" placeholder="Duration in weeks">
<button type="submit">Create</button>
</form>
<a href="/home-page">Home</a>"#,
        username = escape_html(&user.username),
    );
    layout("New campaign", &body, Some("create-campaign-script.js"))
}
