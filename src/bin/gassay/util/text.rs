pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        if !line.is_empty() && line.len() + 1 + word.len() > width {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }

    if !line.is_empty() {
        lines.push(line);
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

pub fn truncate(s: &str, max_chars: usize) -> String {
    if max_chars == 0 {
        return String::new();
    }
    if s.chars().count() <= max_chars {
        return s.to_string();
    }

    let mut out: String = s.chars().take(max_chars - 1).collect();
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_fits_on_one_line() {
        assert_eq!(wrap("density out of range", 40), vec!["density out of range"]);
    }

    #[test]
    fn wrap_breaks_between_words() {
        let lines = wrap("water reading must be below the air reading", 20);
        assert_eq!(
            lines,
            vec!["water reading must", "be below the air", "reading"]
        );
    }

    #[test]
    fn wrap_empty_input_yields_one_empty_line() {
        assert_eq!(wrap("", 10), vec![String::new()]);
    }

    #[test]
    fn truncate_leaves_short_names_alone() {
        assert_eq!(truncate("copper", 10), "copper");
        assert_eq!(truncate("silver", 6), "silver");
    }

    #[test]
    fn truncate_marks_the_cut() {
        assert_eq!(truncate("palladium", 6), "palla…");
    }

    #[test]
    fn truncate_counts_chars_not_bytes() {
        assert_eq!(truncate("g/cm³ per karat", 6), "g/cm³…");
    }
}
