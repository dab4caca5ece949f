//! Transcript Markup
//!
//! HTML rendering of chat messages. Every piece of user or model text goes
//! through [`escape_html`] before it lands in markup.

use crate::chat::{Transcript, TranscriptEntry};

/// Escape text for use in HTML element content and quoted attributes
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

impl TranscriptEntry {
    /// One message block, using the journal page's classes
    pub fn to_html(&self) -> String {
        match self {
            TranscriptEntry::User { text, .. } => format!(
                "<div class=\"user-message flex justify-end mb-4\">\n  \
                 <div class=\"bg-blue-100 px-4 py-2 rounded-l-lg rounded-r-lg max-w-[80%]\">{}</div>\n\
                 </div>",
                escape_html(text)
            ),
            TranscriptEntry::Assistant { emotion, text, .. } => {
                let e = emotion.emotion();
                format!(
                    "<div class=\"ai-message flex justify-start mb-4\">\n  \
                     <div class=\"bg-gray-100 px-4 py-2 rounded-l-lg rounded-r-lg max-w-[80%]\">\n    \
                     <div class=\"flex items-center gap-2 mb-2\">\n      \
                     <span class=\"text-xl\">{}</span>\n      \
                     <span class=\"font-semibold\">{}</span>\n    \
                     </div>\n    \
                     {}\n  \
                     </div>\n\
                     </div>",
                    escape_html(e.icon),
                    escape_html(e.name),
                    escape_html(text)
                )
            }
        }
    }
}

impl Transcript {
    /// Standalone HTML page with every message in order
    pub fn to_html_document(&self, title: &str) -> String {
        let body: Vec<String> = self.iter().map(TranscriptEntry::to_html).collect();
        format!(
            "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n</head>\n\
             <body>\n<div id=\"chatContainer\">\n{}\n</div>\n</body>\n</html>\n",
            escape_html(title),
            body.join("\n")
        )
    }
}
