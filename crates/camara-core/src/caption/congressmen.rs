//! `Dep. Name (PARTY-STATE)` extraction.

use once_cell::sync::Lazy;
use regex::Regex;

static DEPUTY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Dep\.\s*([^)]+\))").expect("deputy pattern is valid"));

/// Party and home-state codes of one deputy, e.g. `PT` / `SP`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Affiliation {
    pub party: String,
    pub state: String,
}

/// Deputies named in a caption, in order of first mention.
///
/// Behaves as a map keyed by name: a repeated name keeps its position and
/// takes the later affiliation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Congressmen {
    entries: Vec<(String, Affiliation)>,
}

impl Congressmen {
    pub fn insert(&mut self, name: String, affiliation: Affiliation) {
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = affiliation,
            None => self.entries.push((name, affiliation)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Affiliation> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, a)| a)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Affiliation)> {
        self.entries.iter().map(|(n, a)| (n.as_str(), a))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }
}

/// Parses `"Fulano (PT-SP)"` (the text captured after `Dep.`).
fn parse_mention(mention: &str) -> Option<(String, Affiliation)> {
    let (name, party_state) = mention.split_once('(')?;
    let (party, state) = party_state.split_once('-')?;
    let name = name.trim();
    let party = party.trim();
    let state = state.trim_end_matches(|c: char| c == ')' || c.is_whitespace()).trim();
    if name.is_empty() || party.is_empty() || state.is_empty() {
        return None;
    }
    Some((
        name.to_string(),
        Affiliation {
            party: party.to_string(),
            state: state.to_string(),
        },
    ))
}

/// Every well-formed deputy mention in `caption`; `None` when there is none.
pub fn find_congressmen(caption: &str) -> Option<Congressmen> {
    let mut found = Congressmen::default();
    for cap in DEPUTY_RE.captures_iter(caption) {
        let mention = &cap[1];
        match parse_mention(mention) {
            Some((name, affiliation)) => found.insert(name, affiliation),
            None => tracing::warn!(mention, "ignoring malformed deputy mention"),
        }
    }
    (!found.is_empty()).then_some(found)
}
