// Dictionary records and the inflection ("exchange") table

use serde::{Deserialize, Serialize};

/// Inflection tag codes as used in the ECDICT `exchange` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InflectionKind {
    Root,
    Past,
    PastParticiple,
    PresentParticiple,
    ThirdPersonSingular,
    Comparative,
    Superlative,
    Plural,
    Future,
    /// Tag `1`: which inflections of the root this headword itself is
    Other,
}

impl InflectionKind {
    /// Map a tag code to its kind. Unknown codes yield `None`.
    pub fn from_code(code: &str) -> Option<Self> {
        let kind = match code {
            "0" => InflectionKind::Root,
            "p" => InflectionKind::Past,
            "d" => InflectionKind::PastParticiple,
            "i" => InflectionKind::PresentParticiple,
            "3" => InflectionKind::ThirdPersonSingular,
            "r" => InflectionKind::Comparative,
            "t" => InflectionKind::Superlative,
            "s" => InflectionKind::Plural,
            "f" => InflectionKind::Future,
            "1" => InflectionKind::Other,
            _ => return None,
        };
        Some(kind)
    }

    pub fn code(&self) -> &'static str {
        match self {
            InflectionKind::Root => "0",
            InflectionKind::Past => "p",
            InflectionKind::PastParticiple => "d",
            InflectionKind::PresentParticiple => "i",
            InflectionKind::ThirdPersonSingular => "3",
            InflectionKind::Comparative => "r",
            InflectionKind::Superlative => "t",
            InflectionKind::Plural => "s",
            InflectionKind::Future => "f",
            InflectionKind::Other => "1",
        }
    }

    /// Human-readable label for presentation
    pub fn label(&self) -> &'static str {
        match self {
            InflectionKind::Root => "root",
            InflectionKind::Past => "past",
            InflectionKind::PastParticiple => "past participle",
            InflectionKind::PresentParticiple => "present participle",
            InflectionKind::ThirdPersonSingular => "3rd person singular",
            InflectionKind::Comparative => "comparative",
            InflectionKind::Superlative => "superlative",
            InflectionKind::Plural => "plural",
            InflectionKind::Future => "future",
            InflectionKind::Other => "variant of",
        }
    }
}

/// Inflection table: kind -> forms, in the order the entries appeared.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InflectionTable {
    entries: Vec<(InflectionKind, Vec<String>)>,
}

impl InflectionTable {
    /// Parse an ECDICT exchange string such as `p:ran/d:run/i:running/3:runs`.
    ///
    /// Segments are `/`-separated `tag:form` pairs. A segment with the wrong
    /// number of `:`, an empty form or an unknown tag is skipped on its own;
    /// the rest of the table is still parsed.
    pub fn parse(exchange: &str) -> Self {
        let mut table = Self::default();
        for segment in exchange.split('/') {
            let segment = segment.trim();
            if segment.is_empty() {
                continue;
            }

            let mut parts = segment.split(':');
            let (code, form) = match (parts.next(), parts.next(), parts.next()) {
                (Some(code), Some(form), None) => (code.trim(), form.trim()),
                _ => {
                    crate::debug!("Skipping malformed inflection entry '{}'", segment);
                    continue;
                }
            };

            if form.is_empty() {
                crate::debug!("Skipping inflection entry with empty form '{}'", segment);
                continue;
            }

            match InflectionKind::from_code(code) {
                Some(kind) => table.push(kind, form.to_string()),
                None => crate::debug!("Skipping unknown inflection tag '{}'", code),
            }
        }
        table
    }

    /// Append a form under `kind`, keeping first-seen kind order.
    pub fn push(&mut self, kind: InflectionKind, form: String) {
        match self.entries.iter_mut().find(|(k, _)| *k == kind) {
            Some((_, forms)) => forms.push(form),
            None => self.entries.push((kind, vec![form])),
        }
    }

    /// Forms listed under `kind`
    pub fn get(&self, kind: InflectionKind) -> &[String] {
        self.entries
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, forms)| forms.as_slice())
            .unwrap_or(&[])
    }

    /// First root-tagged form, if any
    pub fn root(&self) -> Option<&str> {
        self.get(InflectionKind::Root).first().map(String::as_str)
    }

    /// Every form across all kinds, in table order
    pub fn all_forms(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .flat_map(|(_, forms)| forms.iter().map(String::as_str))
    }

    pub fn iter(&self) -> impl Iterator<Item = (InflectionKind, &[String])> {
        self.entries.iter().map(|(k, forms)| (*k, forms.as_slice()))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Frequency indicators carried by ECDICT entries
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrequencyTags {
    /// Collins star rating (1-5)
    pub collins_stars: Option<u8>,
    /// Member of the Oxford 3000 core vocabulary
    pub is_oxford_core: bool,
    /// Rank in the British National Corpus
    pub bnc_rank: Option<u32>,
    /// Rank in the contemporary frequency list
    pub freq_rank: Option<u32>,
    /// Space-separated exam tags (e.g. "cet4 ielts")
    pub tag: Option<String>,
}

impl FrequencyTags {
    pub fn is_empty(&self) -> bool {
        self.collins_stars.is_none()
            && !self.is_oxford_core
            && self.bnc_rank.is_none()
            && self.freq_rank.is_none()
            && self.tag.is_none()
    }
}

/// A read-only snapshot of one dictionary entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DictionaryRecord {
    pub headword: String,
    pub phonetic: Option<String>,
    pub translation: Option<String>,
    pub definition: Option<String>,
    pub part_of_speech: Option<String>,
    #[serde(default)]
    pub frequency_tags: FrequencyTags,
    #[serde(default)]
    pub inflections: InflectionTable,
    pub note: Option<String>,
}

impl DictionaryRecord {
    /// A record with only a headword set
    pub fn new(headword: impl Into<String>) -> Self {
        Self {
            headword: headword.into(),
            phonetic: None,
            translation: None,
            definition: None,
            part_of_speech: None,
            frequency_tags: FrequencyTags::default(),
            inflections: InflectionTable::default(),
            note: None,
        }
    }

    /// Builder-style setter for the inflection table from an exchange string
    pub fn with_exchange(mut self, exchange: &str) -> Self {
        self.inflections = InflectionTable::parse(exchange);
        self
    }
}

#[cfg(test)]
#[path = "record_test.rs"]
mod tests;
