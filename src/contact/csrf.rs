/// Looks up one cookie in a `document.cookie` string and URL-decodes it.
pub fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .map(str::trim)
        .find_map(|pair| pair.strip_prefix(name)?.strip_prefix('='))
        .map(|raw| {
            urlencoding::decode(raw)
                .map(|decoded| decoded.into_owned())
                .unwrap_or_else(|_| raw.to_string())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_the_named_cookie() {
        let jar = "sessionid=xyz; csrftoken=abc%2F123; theme=dark";
        assert_eq!(cookie_value(jar, "csrftoken").as_deref(), Some("abc/123"));
        assert_eq!(cookie_value(jar, "theme").as_deref(), Some("dark"));
    }

    #[test]
    fn prefix_matches_are_not_enough() {
        let jar = "csrftoken_old=nope";
        assert_eq!(cookie_value(jar, "csrftoken"), None);
        assert_eq!(cookie_value("", "csrftoken"), None);
    }
}
