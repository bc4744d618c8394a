// HTML card rendering for a resolved record

use std::fmt::Write;

use crate::dictionary::{DictionaryRecord, HighlightedExcerpt};
use crate::pipeline::ResolvedRecord;

/// Front and back of one flashcard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub front: String,
    pub back: String,
}

const CARD_STYLE: &str = "<style>\
.word-container,.dict-entry{font-family:\"Helvetica Neue\",Arial,sans-serif;line-height:1.6;\
margin:15px 0;padding:15px;border-radius:8px;background-color:#f8f9fa}\
.word-container{text-align:center}\
.word-display{font-size:1.8em;font-weight:bold;color:#2c3e50}\
.section{margin:10px 0;padding:8px;border-left:3px solid #007bff;background-color:#fff}\
.section-title{color:#0056b3;font-weight:bold;margin-bottom:5px}\
.phonetic{color:#6c757d;margin-right:10px}.pos{color:#28a745}\
.freq-item{background-color:#e9ecef;padding:4px 8px;border-radius:4px;margin-right:6px}\
.definition{padding-left:10px;border-left:2px solid #dee2e6}\
.source{color:#6c757d;padding:8px;border-left:2px solid #dee2e6}\
.highlight{color:#d63384;font-weight:bold}\
.ai-explanation{margin-top:6px;color:#495057}\
</style>";

const NO_DEFINITION: &str = "No definition found";

/// Escape text for interpolation into HTML.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape, then turn ECDICT's literal `\n` and real newlines into `<br>`.
fn multiline(text: &str) -> String {
    escape_html(text).replace("\\n", "<br>").replace('\n', "<br>")
}

fn render_excerpt(excerpt: &HighlightedExcerpt) -> String {
    excerpt
        .segments()
        .into_iter()
        .map(|(segment, marked)| {
            if marked {
                format!("<span class=\"highlight\">{}</span>", escape_html(segment))
            } else {
                escape_html(segment)
            }
        })
        .collect()
}

fn render_source(record: &ResolvedRecord) -> Option<String> {
    let excerpt = record.excerpt.as_ref()?;
    let mut html = format!("<div class=\"source\">{}", render_excerpt(excerpt));
    if let Some(gloss) = &record.gloss {
        let _ = write!(
            html,
            "<br><div class=\"ai-explanation\"><div class=\"ai-content\">{}</div></div>",
            multiline(gloss)
        );
    }
    html.push_str("</div>");
    Some(html)
}

fn section(title: &str, body: &str) -> String {
    format!(
        "<div class=\"section\"><div class=\"section-title\">{}</div>{}</div>",
        title, body
    )
}

fn render_entry(entry: &DictionaryRecord, out: &mut Vec<String>) {
    if entry.phonetic.is_some() || entry.part_of_speech.is_some() {
        let mut body = String::new();
        if let Some(phonetic) = &entry.phonetic {
            let _ = write!(body, "<span class=\"phonetic\">[{}]</span>", escape_html(phonetic));
        }
        if let Some(pos) = &entry.part_of_speech {
            let _ = write!(body, "<span class=\"pos\">{}</span>", escape_html(pos));
        }
        out.push(section("Pronunciation", &body));
    }

    if entry.translation.is_some() || entry.definition.is_some() {
        let mut body = String::new();
        if let Some(translation) = &entry.translation {
            let _ = write!(body, "<div class=\"definition chinese\">{}</div>", multiline(translation));
        }
        if let Some(definition) = &entry.definition {
            let _ = write!(body, "<div class=\"definition english\">{}</div>", multiline(definition));
        }
        out.push(section("Meaning", &body));
    }

    let tags = &entry.frequency_tags;
    if !tags.is_empty() {
        let mut items = Vec::new();
        if let Some(stars) = tags.collins_stars {
            items.push(format!("Collins: {}", "★".repeat(stars as usize)));
        }
        if tags.is_oxford_core {
            items.push("Oxford 3000".to_string());
        }
        if let Some(bnc) = tags.bnc_rank {
            items.push(format!("BNC: {}", bnc));
        }
        if let Some(frq) = tags.freq_rank {
            items.push(format!("Frequency: {}", frq));
        }
        if let Some(tag) = &tags.tag {
            items.push(format!("Tags: {}", escape_html(tag)));
        }
        let body: String = items
            .iter()
            .map(|i| format!("<span class=\"freq-item\">{}</span>", i))
            .collect();
        out.push(section("Frequency", &body));
    }

    if !entry.inflections.is_empty() {
        let body: String = entry
            .inflections
            .iter()
            .map(|(kind, forms)| {
                format!(
                    "<span class=\"freq-item\">{}: {}</span>",
                    kind.label(),
                    escape_html(&forms.join(", "))
                )
            })
            .collect();
        out.push(section("Forms", &body));
    }

    if let Some(note) = &entry.note {
        out.push(section(
            "Notes",
            &format!("<div class=\"definition\">{}</div>", multiline(note)),
        ));
    }
}

/// Render the two sides of the card for `record`.
pub fn render_card(record: &ResolvedRecord) -> Card {
    let front = format!(
        "{CARD_STYLE}<div class=\"word-container\"><div class=\"word-display\">{}</div></div>",
        escape_html(&record.display_form)
    );

    let mut sections = Vec::new();
    if let Some(source) = render_source(record) {
        sections.push(format!("<div class=\"section\">{}</div>", source));
    }
    match &record.matched_record {
        Some(entry) => render_entry(entry, &mut sections),
        None => sections.push(format!("<div class=\"section\">{}</div>", NO_DEFINITION)),
    }

    let back = format!(
        "{CARD_STYLE}<div class=\"dict-entry\">{}</div>",
        sections.join("")
    );
    Card { front, back }
}

#[cfg(test)]
#[path = "html_test.rs"]
mod tests;
