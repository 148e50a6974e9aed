// src/core/name.rs
//! Sort keys derived from section names.
//!
//! Names under the sorted sections are usually people, so the default key is
//! the lower-cased last name. Parsing is heuristic; anything it cannot make
//! sense of falls back to the first token and finally to the whole name.

/// Derives the key a section is ordered by.
pub trait SortKey {
    fn key(&self, name: &str) -> String;
}

impl<F> SortKey for F
where
    F: Fn(&str) -> String,
{
    #[inline]
    fn key(&self, name: &str) -> String {
        self(name)
    }
}

/// Orders by last name, then first name, then the full name (all lower-case).
#[derive(Debug, Clone, Copy, Default)]
pub struct HumanNameKey;

impl SortKey for HumanNameKey {
    fn key(&self, name: &str) -> String {
        let parsed = HumanName::parse(name);
        parsed
            .last
            .or(parsed.first)
            .unwrap_or_else(|| name.trim().to_owned())
            .to_lowercase()
    }
}

const TITLES: &[&str] = &[
    "dr", "mr", "mrs", "ms", "miss", "mx", "prof", "professor", "sir", "dame", "lady", "lord",
    "rev", "hon", "capt", "col", "gen", "fr", "sr", "sra", "srta",
];

const SUFFIXES: &[&str] = &[
    "jr", "sr", "ii", "iii", "iv", "v", "phd", "md", "esq", "mba", "dds", "jd", "msc", "bsc",
];

const PARTICLES: &[&str] = &[
    "van", "von", "der", "den", "de", "del", "della", "di", "da", "dos", "das", "du", "la", "le",
    "st", "ter", "ten", "bin", "ibn", "al", "el",
];

fn normalized(token: &str) -> String {
    token
        .trim_matches(|c: char| c == '.' || c == ',')
        .to_lowercase()
}

fn is_one_of(token: &str, words: &[&str]) -> bool {
    let token = normalized(token);
    words.iter().any(|word| *word == token)
}

/// Removes quoted or parenthesized nicknames: `Ada "Countess" Lovelace`.
fn strip_nicknames(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut closing: Option<char> = None;
    for c in name.chars() {
        match closing {
            Some(end) if c == end => closing = None,
            Some(_) => {}
            None => match c {
                '(' => closing = Some(')'),
                '"' => closing = Some('"'),
                '\u{201c}' => closing = Some('\u{201d}'),
                _ => out.push(c),
            },
        }
    }
    out
}

/// The parts of a personal name that matter for ordering.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct HumanName {
    pub first: Option<String>,
    pub last: Option<String>,
}

impl HumanName {
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let cleaned = strip_nicknames(raw);

        // "Last, First" puts the surname up front unless the comma only
        // separates a suffix ("Martin Luther King, Jr.").
        if let Some((before, after)) = cleaned.split_once(',') {
            let after_tokens: Vec<&str> = after.split_whitespace().collect();
            let suffix_only = !after_tokens.is_empty()
                && after_tokens.iter().all(|token| is_one_of(token, SUFFIXES));
            if !suffix_only && !before.trim().is_empty() {
                let last = before.split_whitespace().collect::<Vec<_>>().join(" ");
                let first = after_tokens
                    .into_iter()
                    .find(|token| !is_one_of(token, TITLES))
                    .map(str::to_owned);
                return Self {
                    first,
                    last: Some(last),
                };
            }
        }

        let mut tokens: Vec<&str> = cleaned
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|token| !token.is_empty())
            .collect();

        // Titles only count as titles while something follows them.
        while tokens.len() > 1 && tokens.first().is_some_and(|token| is_one_of(token, TITLES)) {
            tokens.remove(0);
        }
        while tokens.len() > 1 && tokens.last().is_some_and(|token| is_one_of(token, SUFFIXES)) {
            tokens.pop();
        }

        match tokens.as_slice() {
            [] => Self::default(),
            [only] => Self {
                first: Some((*only).to_owned()),
                last: None,
            },
            [first, rest @ ..] => {
                // The surname starts at the earliest particle after the first
                // name, or is the final token.
                let start = rest
                    .iter()
                    .position(|token| is_one_of(token, PARTICLES))
                    .filter(|&idx| idx.saturating_add(1) < rest.len())
                    .unwrap_or(rest.len().saturating_sub(1));
                Self {
                    first: Some((*first).to_owned()),
                    last: rest.get(start..).map(|parts| parts.join(" ")),
                }
            }
        }
    }
}
