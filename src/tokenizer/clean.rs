// Transcript cleanup: the string-to-string stages that run before tagging.
//
// Scraped TED transcripts are noisy: stage directions in parentheses,
// ellipses that glue sentences together, thousands separators, dashes,
// music notes. Each stage here is a pure function so it can be tested on
// its own, and `clean_transcript` chains them in the fixed order the
// tokenizer relies on.

use std::sync::LazyLock;

use regex_lite::Regex;

/// Upper bound on comma-stripping passes. Each pass removes at least one
/// separator group per number, so this covers any realistic integer.
const MAX_COMMA_PASSES: usize = 16;

static PUNCT_FUSED_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([.!?,;])([A-Za-z]{2})").unwrap());
static THOUSANDS_COMMA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+),([0-9]{3})").unwrap());
static NUMBER_HYPHEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]+-").unwrap());
/// A stage-direction word closed by `.` or `)`, with or without its
/// opening parenthesis.
static STAGE_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(?(?:Applause|Laughter|Music)[.)]").unwrap());
static ORDINAL_TH_HYPHEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9])th-").unwrap());

/// Run stages 1 through 7 on a raw transcript.
pub fn clean_transcript(text: &str) -> String {
    let text = remove_ellipses(text);
    let text = remove_parentheticals(&text);
    let text = add_spaces(&text);
    let text = handle_numbers(&text);
    let text = strip_quotes_and_symbols(&text);
    let text = expand_domain_literals(&text);
    normalize_whitespace(&text)
}

/// Delete `..`, `...`, `....` and the `…` glyph without inserting a space.
pub fn remove_ellipses(text: &str) -> String {
    text.replace("....", "")
        .replace("...", "")
        .replace("..", "")
        .replace('…', "")
}

/// Remove parenthetical asides such as "(Laughter)" or "(Applause.)".
///
/// Every `)` is followed by a newline and every `(` preceded by a space so
/// a span can never run past the end of the aside it closes. On each line
/// the span from the first `(` to the last `)` is replaced with a space
/// when its parentheses balance. Unbalanced spans fall back to replacing
/// the known stage-direction markers and any stray parenthesis with a
/// sentence break.
pub fn remove_parentheticals(text: &str) -> String {
    let spaced = text.replace(')', ")\n").replace('(', " (");

    let cleaned: Vec<String> = spaced.split('\n').map(clean_parenthetical_line).collect();

    let joined = cleaned.join("\n").replace("( )", "");
    normalize_whitespace(&joined)
}

fn clean_parenthetical_line(line: &str) -> String {
    let Some(start) = line.find(['(', ')']) else {
        return line.to_string();
    };

    match line.rfind(')') {
        Some(end) if end > start && is_balanced(&line[start..=end]) => {
            format!("{} {}", &line[..start], &line[end + 1..])
        }
        _ => format!("{}{}", &line[..start], replace_stage_markers(&line[start..])),
    }
}

/// True when every `)` closes an earlier `(` and nothing is left open.
fn is_balanced(span: &str) -> bool {
    let mut depth: usize = 0;
    for c in span.chars() {
        match c {
            '(' => depth += 1,
            ')' => match depth.checked_sub(1) {
                Some(d) => depth = d,
                None => return false,
            },
            _ => {}
        }
    }
    depth == 0
}

fn replace_stage_markers(span: &str) -> String {
    STAGE_MARKER
        .replace_all(span, ". ")
        .replace(['(', ')'], ". ")
}

/// Insert the missing space after `. ! ? , ;` when two letters follow
/// directly, e.g. "done.The" becomes "done. The".
pub fn add_spaces(text: &str) -> String {
    PUNCT_FUSED_WORD.replace_all(text, "$1 $2").into_owned()
}

/// Normalize numbers: drop thousands separators, blank out hyphenated
/// numeric modifiers, and detach hyphens from ordinals.
pub fn handle_numbers(text: &str) -> String {
    let mut text = text.to_string();

    // A single pass only removes one separator group per number.
    for _ in 0..MAX_COMMA_PASSES {
        if !THOUSANDS_COMMA.is_match(&text) {
            break;
        }
        text = THOUSANDS_COMMA.replace_all(&text, "$1$2").into_owned();
    }

    let text = NUMBER_HYPHEN.replace_all(&text, "# ").into_owned();

    let text = text
        .replace("1st-", "1st ")
        .replace("2nd-", "2nd ")
        .replace("3rd-", "3rd ");

    ORDINAL_TH_HYPHEN.replace_all(&text, "${1}th ").into_owned()
}

/// Strip quotes, dashes and music notes.
///
/// "-ism" is collapsed to "ism" first so the hyphen removal keeps the
/// suffix attached to its word.
pub fn strip_quotes_and_symbols(text: &str) -> String {
    text.replace(['"', '“', '”'], " ")
        .replace('’', "")
        .replace("-ism", "ism")
        .replace(['–', '—'], " ")
        .replace('-', "")
        .replace(['♪', '♫'], "")
}

/// Expand domain abbreviations that would otherwise tokenize to noise.
pub fn expand_domain_literals(text: &str) -> String {
    text.replace("R and D", "research and development")
        .replace("R & D", "research and development")
}

/// Collapse every whitespace run to a single space and trim the ends.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
