use std::cmp::Ordering;

use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

use crate::domain::{AccountStatus, CustomerRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SortKey {
    /// Ascending by base letters; accents, then case (lowercase first), only break ties.
    #[default]
    Name,
    /// Descending.
    Delta,
    /// Descending.
    Generation,
    /// Descending.
    Consumption,
}

impl SortKey {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Some(Self::Name),
            "delta" => Some(Self::Delta),
            "generation" => Some(Self::Generation),
            "consumption" => Some(Self::Consumption),
            _ => None,
        }
    }

    /// Unrecognized keys fall back to [`SortKey::Name`].
    pub fn from_param(s: &str) -> Self {
        Self::parse(s).unwrap_or_default()
    }

    fn compare(&self, a: &CustomerRecord, b: &CustomerRecord) -> Ordering {
        match self {
            Self::Name => compare_names(&a.name, &b.name),
            Self::Delta => b.delta().total_cmp(&a.delta()),
            Self::Generation => b.generation_kwh.total_cmp(&a.generation_kwh),
            Self::Consumption => b.consumption_kwh.total_cmp(&a.consumption_kwh),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(AccountStatus),
}

impl StatusFilter {
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("all") {
            return Some(Self::All);
        }
        s.parse::<AccountStatus>().ok().map(Self::Only)
    }

    pub fn matches(&self, record: &CustomerRecord) -> bool {
        match self {
            Self::All => true,
            Self::Only(status) => record.account_status == *status,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewQuery {
    pub search: String,
    pub status: StatusFilter,
    pub sort: SortKey,
}

impl ViewQuery {
    fn matches(&self, record: &CustomerRecord, needle: &str) -> bool {
        let matches_search = needle.is_empty() || record.name.to_lowercase().contains(needle);
        matches_search && self.status.matches(record)
    }
}

/// Filter and order a copy of `records`. The input is never modified and
/// records with equal sort keys keep their original relative order.
pub fn view(records: &[CustomerRecord], query: &ViewQuery) -> Vec<CustomerRecord> {
    let needle = query.search.to_lowercase();
    let mut out: Vec<CustomerRecord> = records
        .iter()
        .filter(|r| query.matches(r, &needle))
        .cloned()
        .collect();

    out.sort_by(|a, b| query.sort.compare(a, b));
    out
}

/// Figures shown next to a filtered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ViewSummary {
    pub total_count: usize,
    pub active_count: usize,
    pub match_count: usize,
}

/// `total_count` and `active_count` describe the whole portfolio;
/// `match_count` the filtered view.
pub fn summarize(records: &[CustomerRecord], matches: &[CustomerRecord]) -> ViewSummary {
    ViewSummary {
        total_count: records.len(),
        active_count: records.iter().filter(|r| r.is_active()).count(),
        match_count: matches.len(),
    }
}

fn compare_names(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.cmp(b))
}

/// Multi-level sort key for Latin names, compared level by level:
/// base letters, then accents, then case with lowercase first.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
struct NameKey {
    letters: String,
    accents: Vec<u32>,
    uppercase: Vec<bool>,
}

// Letters with no canonical decomposition, folded to their base letters.
fn base_letters(c: char) -> Option<&'static str> {
    let base = match c {
        'ø' => "o",
        'ł' => "l",
        'đ' | 'ð' => "d",
        'ħ' => "h",
        'ı' => "i",
        'ŧ' => "t",
        'ß' => "ss",
        'æ' => "ae",
        'œ' => "oe",
        'þ' => "th",
        _ => return None,
    };
    Some(base)
}

fn collation_key(s: &str) -> NameKey {
    let mut key = NameKey {
        letters: String::with_capacity(s.len()),
        accents: Vec::new(),
        uppercase: Vec::new(),
    };

    for c in s.nfd() {
        if is_combining_mark(c) {
            if let Some(last) = key.accents.last_mut() {
                *last = last.saturating_add(c as u32);
            }
            continue;
        }

        key.uppercase.push(c.is_uppercase());
        let mut accent = 0;
        for lower in c.to_lowercase() {
            match base_letters(lower) {
                Some(base) => {
                    key.letters.push_str(base);
                    accent = lower as u32;
                }
                None => key.letters.push(lower),
            }
        }
        key.accents.push(accent);
    }

    key
}
