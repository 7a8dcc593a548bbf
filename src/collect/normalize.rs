// Normalization of raw backend output into canonical platform lists.
//
// Both enumeration tools mark hits with "[+]" on stdout; the formats differ
// beyond that. Whatever the backend, the resulting list is deduplicated
// (first-seen order) and capped to bound report size and scoring input.

use std::sync::LazyLock;

use regex_lite::Regex;

/// Maximum platform names kept from a username-exposure check.
pub const USERNAME_PLATFORM_CAP: usize = 20;

/// Maximum platform names kept from an email-exposure check.
pub const EMAIL_PLATFORM_CAP: usize = 15;

/// Captures the first host label of a URL, ignoring a leading "www.".
static URL_HOST_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://(?:www\.)?([^./]+)").expect("url host pattern"));

/// Parse sherlock-style output: hit lines contain "[+]" and the profile URL;
/// the platform name is the first host label of that URL.
pub fn parse_sherlock_stdout(stdout: &str) -> Vec<String> {
    let mut platforms = Vec::new();
    for line in stdout.lines() {
        if !(line.contains("[+]") && line.contains("http")) {
            continue;
        }
        if let Some(caps) = URL_HOST_RE.captures(line) {
            push_unique(&mut platforms, title_case(&caps[1]));
        }
    }
    platforms
}

/// Parse holehe-style output: hit lines contain "[+]" followed by the
/// service name, mixed with filler words and the echoed address.
pub fn parse_holehe_stdout(stdout: &str, email: &str) -> Vec<String> {
    let mut platforms = Vec::new();
    for line in stdout.lines() {
        if !line.contains("[+]") {
            continue;
        }
        for part in line.split_whitespace() {
            if part == "[+]" || part == email || part == "used" || part == "on" || part.len() <= 2
            {
                continue;
            }
            let name = title_case(part.trim_matches(|c| matches!(c, '.' | ',' | '!')));
            if !name.is_empty() {
                push_unique(&mut platforms, name);
            }
        }
    }
    platforms
}

/// Deduplicate preserving first-seen order, then truncate to `cap` entries.
pub fn dedupe_and_cap(names: Vec<String>, cap: usize) -> Vec<String> {
    let mut unique: Vec<String> = Vec::with_capacity(names.len().min(cap));
    for name in names {
        if unique.len() == cap {
            break;
        }
        push_unique(&mut unique, name);
    }
    unique
}

fn push_unique(list: &mut Vec<String>, name: String) {
    if !list.contains(&name) {
        list.push(name);
    }
}

/// Uppercase the first character, lowercase the rest. Platform names from
/// tool output arrive in mixed case ("gitHub", "GITHUB") and should render
/// uniformly.
fn title_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
