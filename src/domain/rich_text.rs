//! Markdown-lite: `**bold**` and `*italic*`, nothing else.
//!
//! Text is parsed into a flat list of styled segments that the view turns
//! into spans. No markup is ever produced, so dataset text cannot inject
//! anything into the terminal.
//!
//! Parsing runs two passes with lazy matching: bold markers are consumed
//! first, then italic markers over what remains. A single `*` left over
//! by either pass stays literal.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref BOLD: Regex = Regex::new(r"\*\*(.*?)\*\*").expect("bold pattern is valid");
    static ref ITALIC: Regex = Regex::new(r"\*(.*?)\*").expect("italic pattern is valid");
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub bold: bool,
    pub italic: bool,
}

impl Segment {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: true,
            italic: false,
        }
    }

    pub fn italic(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
            italic: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Styled {
    c: char,
    bold: bool,
    italic: bool,
}

pub fn parse(input: &str) -> Vec<Segment> {
    let bolded = bold_pass(input);
    let styled = italic_pass(&bolded);
    coalesce(&styled)
}

fn bold_pass(input: &str) -> Vec<Styled> {
    let mut out = Vec::with_capacity(input.len());
    let mut push = |s: &str, bold: bool| {
        out.extend(s.chars().map(|c| Styled {
            c,
            bold,
            italic: false,
        }))
    };

    let mut last = 0;
    for caps in BOLD.captures_iter(input) {
        let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        push(&input[last..whole.start()], false);
        push(inner.as_str(), true);
        last = whole.end();
    }
    push(&input[last..], false);
    out
}

fn italic_pass(chars: &[Styled]) -> Vec<Styled> {
    let text: String = chars.iter().map(|s| s.c).collect();
    let offsets: Vec<usize> = text.char_indices().map(|(i, _)| i).collect();
    let char_index = |byte: usize| offsets.partition_point(|&o| o < byte);

    let mut out = Vec::with_capacity(chars.len());
    let mut last = 0;
    for caps in ITALIC.captures_iter(&text) {
        let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let (start, end) = (char_index(whole.start()), char_index(whole.end()));
        out.extend_from_slice(&chars[last..start]);
        // Drop the two markers, keep what they enclose.
        out.extend(chars[start + 1..end - 1].iter().map(|s| Styled {
            italic: true,
            ..*s
        }));
        debug_assert_eq!(end - start - 2, inner.as_str().chars().count());
        last = end;
    }
    out.extend_from_slice(&chars[last..]);
    out
}

fn coalesce(chars: &[Styled]) -> Vec<Segment> {
    let mut segments: Vec<Segment> = Vec::new();
    for s in chars {
        match segments.last_mut() {
            Some(seg) if seg.bold == s.bold && seg.italic == s.italic => seg.text.push(s.c),
            _ => segments.push(Segment {
                text: s.c.to_string(),
                bold: s.bold,
                italic: s.italic,
            }),
        }
    }
    segments
}

/// Writes segments back as markdown-lite.
pub fn to_markdown(segments: &[Segment]) -> String {
    segments
        .iter()
        .map(|seg| {
            let mut text = seg.text.clone();
            if seg.italic {
                text = format!("*{text}*");
            }
            if seg.bold {
                text = format!("**{text}**");
            }
            text
        })
        .collect()
}
