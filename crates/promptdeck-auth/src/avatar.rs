//! Generated avatar URLs for accounts registered without one.

const AVATAR_COLORS: &[&str] = &["3b82f6", "8b5cf6", "ec4899", "10b981", "f59e0b", "ef4444"];

/// Build an initials-avatar URL for a display name. The background color
/// is picked from the name itself so re-registering the same name keeps
/// the same avatar.
pub fn generate_avatar(name: &str) -> String {
    let color = AVATAR_COLORS[color_index(name)];
    format!(
        "https://ui-avatars.com/api/?name={}&background={color}&color=fff&size=128",
        encode_name(name)
    )
}

fn color_index(name: &str) -> usize {
    let sum: usize = name.bytes().map(usize::from).sum();
    sum % AVATAR_COLORS.len()
}

// Minimal query-component encoding; names only need space and a handful
// of reserved characters covered.
fn encode_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for byte in name.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            b' ' => out.push('+'),
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_name_same_avatar() {
        assert_eq!(generate_avatar("Ada Lovelace"), generate_avatar("Ada Lovelace"));
    }

    #[test]
    fn encodes_spaces_and_reserved_characters() {
        let url = generate_avatar("Ada Lovelace");
        assert!(url.contains("name=Ada+Lovelace"));

        let url = generate_avatar("José & Co");
        assert!(url.contains("name=Jos%C3%A9+%26+Co"));
    }

    #[test]
    fn color_comes_from_the_palette() {
        for name in ["a", "bb", "Grace Hopper", ""] {
            let url = generate_avatar(name);
            assert!(AVATAR_COLORS.iter().any(|c| url.contains(c)), "{url}");
        }
    }
}
