//! Profile rendering for the terminal and for the local web page.
//!
//! Both views show the same fields: display name, avatar, user id, email,
//! Spotify URI, API link, profile image URL and the access token length.

use tabled::Table;

use crate::{
    types::{Profile, ProfileTableRow, Session},
    utils,
};

pub const NO_PROFILE_IMAGE: &str = "(no profile image)";
pub const NOT_SIGNED_IN: &str = "Not signed in";

/// What the page shows.
pub enum PageView<'a> {
    SignedIn(&'a Session),
    SignedOut,
    Error(&'a str),
}

/// Field/value rows of the terminal profile table.
///
/// # Arguments
///
/// * `profile` - Profile to show
/// * `access_token` - Token whose length is shown, if any
///
/// # Returns
///
/// Rows for user id, email, Spotify URI, API link, profile image (or
/// `(no profile image)`) and access token length, in that order.
pub fn profile_rows(profile: &Profile, access_token: Option<&str>) -> Vec<ProfileTableRow> {
    let row = |field: &str, value: String| ProfileTableRow {
        field: field.to_string(),
        value,
    };

    vec![
        row("User ID", profile.id.clone()),
        row("Email", profile.email.clone().unwrap_or_default()),
        row("Spotify URI", profile.uri.clone()),
        row("Link", profile.href.clone()),
        row(
            "Profile Image",
            profile
                .avatar_url()
                .unwrap_or(NO_PROFILE_IMAGE)
                .to_string(),
        ),
        row(
            "Access token length",
            utils::token_length(access_token).to_string(),
        ),
    ]
}

pub fn profile_table(session: &Session) -> String {
    Table::new(profile_rows(&session.profile, Some(&session.access_token))).to_string()
}

pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
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

pub fn html_page(view: PageView<'_>) -> String {
    let section = match view {
        PageView::Error(message) => format!(
            r#"<div style="color: red">Error: {message}</div>
    <p><a href="/">Back</a></p>"#,
            message = escape_html(message)
        ),
        PageView::SignedIn(session) => signed_in_section(session),
        PageView::SignedOut => format!(
            r#"<p>{NOT_SIGNED_IN}</p>
    <a href="/login"><button>Login with Spotify</button></a>"#
        ),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
  <head><meta charset="UTF-8"><title>Discogrify</title></head>
  <body style="font-family:sans-serif">
    <h2>Hello Discogrify!</h2>
    <section id="profile">
    {section}
    </section>
  </body>
</html>
"#
    )
}

fn signed_in_section(session: &Session) -> String {
    let profile = &session.profile;
    let e = escape_html;

    let avatar = profile
        .avatar_url()
        .map(|url| format!(r#"<img src="{}" alt="avatar" width="80">"#, e(url)))
        .unwrap_or_default();
    let spotify_link = profile.external_urls.spotify.as_deref().unwrap_or_default();

    format!(
        r#"<h2>Logged in as <span id="displayName">{name}</span></h2>
    {avatar}
    <ul>
      <li>User ID: <span id="id">{id}</span></li>
      <li>Email: <span id="email">{email}</span></li>
      <li>Spotify URI: <a id="uri" href="{spotify_link}">{uri}</a></li>
      <li>Link: <a id="url" href="{href}">{href}</a></li>
      <li>Profile Image: <span id="imgUrl">{img_url}</span></li>
    </ul>
    <p><small>Access token length: {token_len}</small></p>
    <form method="post" action="/logout" style="margin-top: 8px">
      <button type="submit">Logout</button>
    </form>"#,
        name = e(profile.display_name.as_deref().unwrap_or_default()),
        id = e(&profile.id),
        email = e(profile.email.as_deref().unwrap_or_default()),
        spotify_link = e(spotify_link),
        uri = e(&profile.uri),
        href = e(&profile.href),
        img_url = e(profile.avatar_url().unwrap_or(NO_PROFILE_IMAGE)),
        token_len = utils::token_length(Some(&session.access_token)),
    )
}
