/// Splits one CSV line on commas outside double quotes.
///
/// Surrounding quotes are removed, `""` inside a quoted field becomes `"`,
/// and every field is trimmed.
pub fn split_csv_record(line: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut cur = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                cur.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                out.push(cur.trim().to_string());
                cur.clear();
            }
            _ => cur.push(ch),
        }
    }
    out.push(cur.trim().to_string());
    out
}

/// Reads a treatment flag: `1`/`0`, `true`/`false`, `yes`/`no` (any case).
pub fn parse_flag(field: &str) -> Option<bool> {
    match field.trim().to_ascii_lowercase().as_str() {
        "1" | "1.0" | "true" | "yes" | "t" => Some(true),
        "0" | "0.0" | "false" | "no" | "f" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_plain_fields() {
        assert_eq!(split_csv_record("a, b ,c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn keeps_commas_inside_quotes() {
        assert_eq!(
            split_csv_record(r#""x,y",2,"say ""hi""""#),
            vec!["x,y", "2", r#"say "hi""#]
        );
    }

    #[test]
    fn trailing_empty_field_is_kept() {
        assert_eq!(split_csv_record("1,2,"), vec!["1", "2", ""]);
    }

    #[test]
    fn flags() {
        assert_eq!(parse_flag("1"), Some(true));
        assert_eq!(parse_flag(" TRUE "), Some(true));
        assert_eq!(parse_flag("no"), Some(false));
        assert_eq!(parse_flag("0.0"), Some(false));
        assert_eq!(parse_flag("2"), None);
    }
}
