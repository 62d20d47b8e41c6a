//! Final-argument quoting for shell invocation.
//!
//! Only the last argument (the free-form prompt) is adjusted, and only
//! double quotes are escaped. Other shell metacharacters pass through, so
//! this is only suitable for a trusted command.

/// Wrap the last argument in double quotes if it contains a space and is
/// not already quoted. Embedded `"` characters are escaped as `\"`.
pub fn quote_final_argument(args: &[String]) -> Vec<String> {
    let mut processed = args.to_vec();

    if let Some(last) = processed.last_mut() {
        if last.contains(' ') && !last.starts_with('"') {
            *last = format!("\"{}\"", last.replace('"', "\\\""));
        }
    }

    processed
}

/// Build the command line handed to the platform shell.
pub fn render_shell_line(command: &str, args: &[String]) -> String {
    let quoted = quote_final_argument(args);
    if quoted.is_empty() {
        return command.to_string();
    }
    format!("{} {}", command, quoted.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn multi_word_final_argument_is_wrapped() {
        let args = strings(&["--print", "a b"]);
        assert_eq!(quote_final_argument(&args), strings(&["--print", "\"a b\""]));
    }

    #[test]
    fn already_quoted_final_argument_is_unchanged() {
        let args = strings(&["--print", "\"a b\""]);
        assert_eq!(quote_final_argument(&args), args);
    }

    #[test]
    fn single_word_final_argument_is_unchanged() {
        let args = strings(&["--quiet", "refactor"]);
        assert_eq!(quote_final_argument(&args), args);
    }

    #[test]
    fn embedded_quotes_are_escaped() {
        let args = strings(&["say \"hi\" now"]);
        assert_eq!(
            quote_final_argument(&args),
            strings(&[r#""say \"hi\" now""#])
        );
    }

    #[test]
    fn only_the_last_argument_is_touched() {
        let args = strings(&["--model", "x y", "last one"]);
        assert_eq!(
            quote_final_argument(&args),
            strings(&["--model", "x y", "\"last one\""])
        );
    }

    #[test]
    fn empty_arguments_stay_empty() {
        assert!(quote_final_argument(&[]).is_empty());
    }

    #[test]
    fn shell_line_joins_command_and_quoted_args() {
        let args = strings(&["--print", "fix the bug"]);
        assert_eq!(
            render_shell_line("auggie", &args),
            "auggie --print \"fix the bug\""
        );
        assert_eq!(render_shell_line("auggie", &[]), "auggie");
    }
}
