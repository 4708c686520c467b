//! Shell-style word splitting for forwarded argument strings

/// Split a user-supplied argument string into words.
///
/// Whitespace separates words. Single quotes keep their content literally,
/// double quotes allow `\"` and `\\` escapes, and a backslash outside quotes
/// escapes the next character. An unterminated quote runs to the end of the
/// input.
pub fn split_words(input: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut chars = input.chars();

    while let Some(ch) = chars.next() {
        match ch {
            c if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            '\'' => {
                in_word = true;
                for c in chars.by_ref() {
                    if c == '\'' {
                        break;
                    }
                    current.push(c);
                }
            }
            '"' => {
                in_word = true;
                while let Some(c) = chars.next() {
                    match c {
                        '"' => break,
                        '\\' => match chars.next() {
                            Some(next @ ('"' | '\\')) => current.push(next),
                            Some(next) => {
                                current.push('\\');
                                current.push(next);
                            }
                            None => current.push('\\'),
                        },
                        _ => current.push(c),
                    }
                }
            }
            '\\' => {
                in_word = true;
                if let Some(next) = chars.next() {
                    current.push(next);
                }
            }
            _ => {
                in_word = true;
                current.push(ch);
            }
        }
    }

    if in_word {
        words.push(current);
    }
    words
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_words() {
        assert_eq!(split_words("-O2  -Wall\t-g"), vec!["-O2", "-Wall", "-g"]);
        assert!(split_words("   ").is_empty());
        assert!(split_words("").is_empty());
    }

    #[test]
    fn test_quoted_words() {
        assert_eq!(
            split_words(r#"-DNAME="hello world" 'a b' c"#),
            vec!["-DNAME=hello world", "a b", "c"]
        );
        assert_eq!(split_words(r#""say \"hi\"""#), vec![r#"say "hi""#]);
        assert_eq!(split_words("''"), vec![""]);
    }

    #[test]
    fn test_backslash_escapes() {
        assert_eq!(split_words(r"a\ b c"), vec!["a b", "c"]);
        assert_eq!(split_words(r#""C:\path""#), vec![r"C:\path"]);
    }

    #[test]
    fn test_unterminated_quote_runs_to_end() {
        assert_eq!(split_words("x 'open ended"), vec!["x", "open ended"]);
    }
}
