const AVATAR_BASE: &str = "https://api.dicebear.com/7.x/avataaars/svg";

pub fn avatar_url(seed: &str) -> String {
    format!("{}?seed={}", AVATAR_BASE, encode_seed(seed))
}

// Only what shows up in names needs escaping.
fn encode_seed(seed: &str) -> String {
    let mut out = String::with_capacity(seed.len());
    for c in seed.chars() {
        match c {
            'A'..='Z' | 'a'..='z' | '0'..='9' | '-' | '_' | '.' | '~' => out.push(c),
            c => {
                let mut buf = [0; 4];
                for byte in c.encode_utf8(&mut buf).bytes() {
                    out.push_str(&format!("%{:02X}", byte));
                }
            }
        }
    }
    out
}

pub fn mailto(email: &str) -> String {
    format!("mailto:{}", email)
}

pub fn tel(phone: &str) -> String {
    let digits: String = phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();
    format!("tel:{}", digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_avatar_url() {
        assert_eq!(
            avatar_url("Maya Lindqvist"),
            "https://api.dicebear.com/7.x/avataaars/svg?seed=Maya%20Lindqvist"
        );
        assert_eq!(avatar_url("é"), format!("{}?seed=%C3%A9", AVATAR_BASE));
    }

    #[test]
    fn test_contact_links() {
        assert_eq!(mailto("investors@vitalis.app"), "mailto:investors@vitalis.app");
        assert_eq!(tel("+1 (415) 555-0142"), "tel:+14155550142");
    }
}
