use axum_extra::extract::cookie::{Cookie, SameSite};
use axum_extra::extract::CookieJar;
use uuid::Uuid;

pub const VOTER_COOKIE: &str = "voter_id";

/// Anonymous voter identity from the `voter_id` cookie. Issues a fresh id
/// (and the cookie to remember it) when the cookie is missing or garbled.
pub fn identify(jar: CookieJar) -> (CookieJar, Uuid) {
    if let Some(id) = jar
        .get(VOTER_COOKIE)
        .and_then(|c| Uuid::parse_str(c.value()).ok())
    {
        return (jar, id);
    }

    let id = Uuid::now_v7();
    let cookie = Cookie::build((VOTER_COOKIE, id.to_string()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .permanent()
        .build();
    (jar.add(cookie), id)
}
