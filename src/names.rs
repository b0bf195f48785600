/// Shortens a full name to its first and last parts ("Ana Maria Silva" -> "Ana Silva").
pub fn format_coordinator_name(full_name: &str) -> String {
    let parts: Vec<&str> = full_name.split_whitespace().collect();
    if parts.len() <= 2 {
        return full_name.to_string();
    }
    format!("{} {}", parts[0], parts[parts.len() - 1])
}

/// Two-letter initials; single names use their first two letters.
pub fn initials(full_name: &str) -> String {
    let parts: Vec<&str> = full_name.split_whitespace().collect();
    match parts.as_slice() {
        [] => "N/A".to_string(),
        [only] => only.chars().take(2).collect::<String>().to_uppercase(),
        [first, .., last] => first
            .chars()
            .take(1)
            .chain(last.chars().take(1))
            .collect::<String>()
            .to_uppercase(),
    }
}
