/// First character uppercased, the remainder lowercased ("mcDONALD" -> "Mcdonald").
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        // 尾段整體轉小寫，保留字尾 sigma 的規則
        Some(first) => first
            .to_uppercase()
            .chain(word[first.len_utf8()..].to_lowercase().chars())
            .collect(),
    }
}

/// as-is, lowercase, capitalized, uppercase
pub fn casings(word: &str) -> [String; 4] {
    [
        word.to_string(),
        word.to_lowercase(),
        capitalize(word),
        word.to_uppercase(),
    ]
}
