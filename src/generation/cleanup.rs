//! Post-processing for captions returned by the text model.

const QUOTE_PAIRS: &[(char, char)] = &[('"', '"'), ('\'', '\''), ('“', '”'), ('‘', '’'), ('`', '`')];
const EMPHASIS_MARKERS: &[&str] = &["**", "__"];
const META_PREFIXES: &[&str] = &["Here is", "Here's", "Here’s", "Caption:"];
const META_SUFFIX: &str = "caption:";

fn strip_wrapping_quotes(text: &str) -> &str {
    let mut current = text.trim();
    loop {
        let mut chars = current.chars();
        let (first, last) = match (chars.next(), chars.next_back()) {
            (Some(first), Some(last)) => (first, last),
            _ => return current,
        };
        if !QUOTE_PAIRS.contains(&(first, last)) {
            return current;
        }
        current = current[first.len_utf8()..current.len() - last.len_utf8()].trim();
    }
}

fn strip_emphasis(text: &str) -> String {
    EMPHASIS_MARKERS
        .iter()
        .fold(text.to_string(), |acc, marker| acc.replace(marker, ""))
}

fn starts_with_word(line: &str, prefix: &str) -> bool {
    match line.strip_prefix(prefix) {
        Some(rest) => prefix.ends_with(':') || !rest.starts_with(char::is_alphanumeric),
        None => false,
    }
}

fn is_meta_line(line: &str) -> bool {
    let line = line.trim();
    META_PREFIXES
        .iter()
        .any(|prefix| starts_with_word(line, prefix))
        || line.to_lowercase().ends_with(META_SUFFIX)
}

fn strip_meta_lines(text: &str) -> &str {
    let mut rest = text.trim_start();
    while let Some(first_line) = rest.lines().next() {
        if !is_meta_line(first_line) {
            break;
        }
        let remainder = rest[first_line.len()..].trim_start();
        if remainder.is_empty() {
            break;
        }
        rest = remainder;
    }
    rest
}

fn clean_once(text: &str) -> String {
    let unquoted = strip_wrapping_quotes(text);
    let without_meta = strip_meta_lines(unquoted);
    let unemphasized = strip_emphasis(without_meta);
    strip_wrapping_quotes(&unemphasized).to_string()
}

/// Clean a raw model caption: unwrap quotes, drop emphasis markup and any
/// leading meta-commentary lines. Repeats until the text stops changing.
pub fn clean_caption(raw: &str) -> String {
    let mut current = raw.trim().to_string();
    loop {
        let next = clean_once(&current);
        if next == current {
            return next;
        }
        current = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_quotes_and_meta_line() {
        let raw = "\"Here is your caption:\nSunrise lattes hit different ☕ #coffee\"";
        assert_eq!(clean_caption(raw), "Sunrise lattes hit different ☕ #coffee");

        let raw = "Here is your caption:\n\n“Sunrise lattes hit different ☕ #coffee”";
        assert_eq!(clean_caption(raw), "Sunrise lattes hit different ☕ #coffee");
    }

    #[test]
    fn test_strips_emphasis() {
        assert_eq!(
            clean_caption("**Big news** about __coffee__ #coffee"),
            "Big news about coffee #coffee"
        );
    }

    #[test]
    fn test_quotes_inside_emphasis() {
        assert_eq!(clean_caption("**\"Fresh roast\"**"), "Fresh roast");
    }

    #[test]
    fn test_multiple_meta_lines() {
        let raw = "Here's a caption for you.\nCaption:\nLine one\nLine two";
        assert_eq!(clean_caption(raw), "Line one\nLine two");

        let raw = "Sure! Here is an Instagram caption:\nLine one";
        assert_eq!(clean_caption(raw), "Line one");
    }

    #[test]
    fn test_ordinary_opening_lines_are_kept() {
        for raw in [
            "There is nothing like a slow Sunday coffee ☕\n#coffee #sunday",
            "Where's the best latte in town? 🤔\n#coffee",
            "there's always time for coffee\n#coffee",
            "Heresy: iced coffee in winter 🧊\n#coffee",
        ] {
            assert_eq!(clean_caption(raw), raw);
        }
    }

    #[test]
    fn test_meta_marker_later_in_text_is_kept() {
        let raw = "Morning ritual ☕\nHere is why it matters.";
        assert_eq!(clean_caption(raw), raw);
    }

    #[test]
    fn test_only_meta_line_is_kept() {
        assert_eq!(clean_caption("Here is the thing."), "Here is the thing.");
    }

    #[test]
    fn test_idempotent() {
        let samples = [
            "Sunrise lattes hit different ☕\n\n#coffee #morning",
            "Professional perspective on AI. 🎯",
            "It's a \"quoted\" word in the middle",
            "'",
            "",
            "**\"Fresh roast\"**",
            "\"Here is your caption:\n__'Cold brew season'__\"",
            "Caption:\n“**Here's** to Mondays ☕”",
            "``\"  \"``",
        ];
        for sample in samples {
            let once = clean_caption(sample);
            assert_eq!(clean_caption(&once), once, "{:?}", sample);
        }
        assert_eq!(clean_caption(samples[0]), samples[0]);
    }
}
