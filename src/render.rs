//! Feedback List Rendering
//!
//! Produces the list markup injected into the page. User text is always
//! escaped before it reaches the output.

use crate::config::EMPTY_LIST_MESSAGE;
use crate::models::FeedbackRecord;

const FILLED_STAR: char = '★';
const OUTLINE_STAR: char = '☆';
const MAX_STARS: u8 = 5;

/// `rating` filled stars followed by outline stars up to five
pub fn star_glyphs(rating: u8) -> String {
    let filled = rating.min(MAX_STARS);
    let mut glyphs = String::new();
    for slot in 0..MAX_STARS {
        glyphs.push(if slot < filled { FILLED_STAR } else { OUTLINE_STAR });
    }
    glyphs
}

pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn render_item(record: &FeedbackRecord) -> String {
    format!(
        r#"<div class="feedback-item">
    <div class="feedback-header">
        <div>
            <div class="feedback-author">{}</div>
            <div class="feedback-company">{}</div>
        </div>
        <div class="feedback-rating">{}</div>
    </div>
    <div class="feedback-message">"{}"</div>
    <div class="feedback-date">{}</div>
</div>"#,
        escape_html(&record.name),
        escape_html(&record.company),
        star_glyphs(record.rating),
        escape_html(&record.message),
        escape_html(&record.created_date),
    )
}

/// Markup for a whole collection, in the given order
pub fn render_feedback_list(records: &[FeedbackRecord]) -> String {
    if records.is_empty() {
        return format!(r#"<p class="empty-message">{}</p>"#, EMPTY_LIST_MESSAGE);
    }
    records.iter().map(render_item).collect::<Vec<_>>().join("\n")
}
