use anyhow::Error;

pub(crate) fn format(err: &Error) -> String {
    let mut out = format!("Error: {err:#}");
    let hints = suggestions(err);
    if !hints.is_empty() {
        out.push_str("\n\nHints:\n");
        for hint in hints {
            out.push_str("- ");
            out.push_str(&hint);
            out.push('\n');
        }
    }
    out
}

fn suggestions(err: &Error) -> Vec<String> {
    let chain: Vec<String> = err.chain().map(|e| e.to_string()).collect();
    let haystack = chain.join(" | ").to_ascii_lowercase();
    let mut out: Vec<String> = Vec::new();

    if haystack.contains("division by zero") {
        push_hint(
            &mut out,
            "The input has no words or sentences, so averages are undefined.",
        );
        push_hint(&mut out, "Use `count` or `length` to compare empty inputs.");
    }

    if haystack.contains("failed to open") || haystack.contains("no such file or directory") {
        push_hint(&mut out, "Verify the input path exists and is readable.");
        push_hint(&mut out, "Pass `-` to read from stdin.");
    }

    if haystack.contains("failed to load config") {
        push_hint(
            &mut out,
            "Check `textstat.toml` syntax, or point `--config` at another file.",
        );
    }

    if haystack.contains("invalid strip pattern") {
        push_hint(
            &mut out,
            "`input.control_pattern` must be a valid regular expression.",
        );
    }

    if haystack.contains("stream did not contain valid utf-8") {
        push_hint(&mut out, "Input must be UTF-8 text.");
    }

    out
}

fn push_hint(out: &mut Vec<String>, hint: &str) {
    if !out.iter().any(|h| h == hint) {
        out.push(hint.to_string());
    }
}
