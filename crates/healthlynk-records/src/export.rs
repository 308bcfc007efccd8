//! Consultation transcript export to PDF
//!
//! The transcript is laid out as a Sender / Message / Time table. Rows are
//! word-wrapped and moved to the next page when they do not fit; a row taller
//! than a whole page is continued across pages. Each page gets a
//! "Page N of M" footer. A leading default greeting is left out.

use chrono::{DateTime, Local, NaiveDate, Utc};
use healthlynk_core::{Message, Role};
use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfLayerReference};
use std::io::BufWriter;
use std::path::Path;
use tracing::{debug, error};

const TITLE: &str = "HealthLynk Consultation Summary";

const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN_LEFT: f32 = 20.0;
const SENDER_X: f32 = 20.0;
const MESSAGE_X: f32 = 60.0;
const TIME_X: f32 = 172.0;
const TABLE_TOP_FIRST: f32 = 252.0;
const TABLE_TOP: f32 = 277.0;
const TABLE_BOTTOM: f32 = 22.0;
const LINE_HEIGHT: f32 = 4.5;
const ROW_GAP: f32 = 3.0;
const MESSAGE_WRAP_CHARS: usize = 60;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("PDF rendering failed: {0}")]
    Render(String),

    #[error("failed to write export: {0}")]
    Io(#[from] std::io::Error),
}

/// One table row, pre-wrapped
#[derive(Debug, Clone, PartialEq)]
struct Row {
    sender: &'static str,
    lines: Vec<String>,
    time: String,
}

impl Row {
    fn height(&self) -> f32 {
        self.lines.len() as f32 * LINE_HEIGHT + ROW_GAP
    }
}

/// `HealthLynk_Consultation_2026-10-17.pdf`
pub fn default_export_name(date: NaiveDate) -> String {
    format!("HealthLynk_Consultation_{}.pdf", date.format("%Y-%m-%d"))
}

/// Render `messages` and write the PDF to `path`
pub fn export_pdf(messages: &[Message], patient_name: &str, path: &Path) -> Result<(), ExportError> {
    let bytes = render_pdf(messages, patient_name, Local::now().date_naive()).inspect_err(|e| {
        error!(error = %e, "transcript render failed");
    })?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, bytes)?;
    debug!(path = %path.display(), messages = messages.len(), "transcript exported");
    Ok(())
}

/// Render the transcript to PDF bytes
pub fn render_pdf(
    messages: &[Message],
    patient_name: &str,
    date: NaiveDate,
) -> Result<Vec<u8>, ExportError> {
    let rows = build_rows(messages);
    let pages = paginate(&rows);
    let page_count = pages.len();

    let (doc, page1, layer1) =
        PdfDocument::new(TITLE, Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| ExportError::Render(format!("font error: {e}")))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| ExportError::Render(format!("font error: {e}")))?;

    let mut first_layer = Some(doc.get_page(page1).get_layer(layer1));

    for (index, page_rows) in pages.iter().enumerate() {
        let layer = match first_layer.take() {
            Some(layer) => layer,
            None => {
                let (page, layer) = doc.add_page(
                    Mm(PAGE_WIDTH),
                    Mm(PAGE_HEIGHT),
                    format!("Layer {}", index + 1),
                );
                doc.get_page(page).get_layer(layer)
            }
        };

        if index == 0 {
            layer.use_text(TITLE, 18.0, Mm(MARGIN_LEFT + 35.0), Mm(277.0), &bold);
            layer.use_text(
                format!("Patient: {patient_name}"),
                12.0,
                Mm(MARGIN_LEFT),
                Mm(267.0),
                &font,
            );
            layer.use_text(
                format!("Date: {}", date.format("%Y-%m-%d")),
                12.0,
                Mm(MARGIN_LEFT),
                Mm(259.0),
                &font,
            );
        }

        draw_header(&layer, &bold, header_y(index));
        let mut y = first_row_y(index);

        for row in page_rows {
            draw_row(&layer, &font, row, y);
            y -= row.height();
        }

        layer.use_text(
            format!(
                "Page {} of {} - HealthLynk {}",
                index + 1,
                page_count,
                date.format("%Y")
            ),
            10.0,
            Mm(PAGE_WIDTH / 2.0 - 30.0),
            Mm(10.0),
            &font,
        );
    }

    let mut buf = BufWriter::new(Vec::new());
    doc.save(&mut buf)
        .map_err(|e| ExportError::Render(format!("save error: {e}")))?;
    buf.into_inner()
        .map_err(|e| ExportError::Render(format!("buffer error: {e}")))
}

fn draw_header(layer: &PdfLayerReference, bold: &IndirectFontRef, y: f32) {
    layer.use_text("Sender", 11.0, Mm(SENDER_X), Mm(y), bold);
    layer.use_text("Message", 11.0, Mm(MESSAGE_X), Mm(y), bold);
    layer.use_text("Time", 11.0, Mm(TIME_X), Mm(y), bold);
}

fn draw_row(layer: &PdfLayerReference, font: &IndirectFontRef, row: &Row, top: f32) {
    layer.use_text(row.sender, 9.0, Mm(SENDER_X), Mm(top), font);
    layer.use_text(row.time.clone(), 9.0, Mm(TIME_X), Mm(top), font);
    let mut y = top;
    for line in &row.lines {
        layer.use_text(line.clone(), 9.0, Mm(MESSAGE_X), Mm(y), font);
        y -= LINE_HEIGHT;
    }
}

fn build_rows(messages: &[Message]) -> Vec<Row> {
    let skip = usize::from(messages.first().is_some_and(Message::is_default_greeting));

    messages
        .iter()
        .skip(skip)
        .map(|m| Row {
            sender: match m.role {
                Role::User => "You",
                Role::Assistant => "Healthcare Assistant",
            },
            lines: wrap_text(&m.content, MESSAGE_WRAP_CHARS),
            time: format_time(m.timestamp),
        })
        .collect()
}

fn format_time(timestamp: DateTime<Utc>) -> String {
    timestamp.with_timezone(&Local).format("%H:%M").to_string()
}

fn header_y(page_index: usize) -> f32 {
    if page_index == 0 {
        TABLE_TOP_FIRST
    } else {
        TABLE_TOP
    }
}

fn first_row_y(page_index: usize) -> f32 {
    header_y(page_index) - (LINE_HEIGHT + ROW_GAP)
}

/// Lines a row starting at `y` can hold above the bottom margin
fn lines_that_fit(y: f32) -> usize {
    ((y - ROW_GAP - TABLE_BOTTOM) / LINE_HEIGHT).floor().max(0.0) as usize
}

/// Split rows into pages. Always returns at least one (possibly empty) page.
///
/// A row that does not fit is moved to a fresh page. A row that would not
/// fit even there is split, the remainder continuing on the following pages.
fn paginate(rows: &[Row]) -> Vec<Vec<Row>> {
    let mut pages: Vec<Vec<Row>> = vec![Vec::new()];
    let mut y = first_row_y(0);
    let fresh_page_lines = lines_that_fit(first_row_y(1));

    for row in rows {
        let mut rest: &[String] = &row.lines;
        loop {
            let page_is_empty = pages.last().is_some_and(Vec::is_empty);
            let room = lines_that_fit(y);
            let take = if page_is_empty { room.max(1) } else { room };

            if take >= rest.len() {
                let part = Row {
                    lines: rest.to_vec(),
                    ..row.clone()
                };
                y -= part.height();
                if let Some(page) = pages.last_mut() {
                    page.push(part);
                }
                break;
            }

            if page_is_empty || rest.len() > fresh_page_lines {
                let (head, tail) = rest.split_at(take);
                if !head.is_empty() {
                    if let Some(page) = pages.last_mut() {
                        page.push(Row {
                            lines: head.to_vec(),
                            ..row.clone()
                        });
                    }
                }
                rest = tail;
            }

            pages.push(Vec::new());
            y = first_row_y(pages.len() - 1);
        }
    }
    pages
}

/// Greedy word wrap; words longer than `max_chars` are broken up
fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if word.chars().count() > max_chars {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            let chars: Vec<char> = word.chars().collect();
            let mut chunks = chars.chunks(max_chars).map(|c| c.iter().collect::<String>());
            let mut last = chunks.next().unwrap_or_default();
            for chunk in chunks {
                lines.push(std::mem::replace(&mut last, chunk));
            }
            current = last;
            continue;
        }
        if current.chars().count() + word.chars().count() + 1 > max_chars && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use healthlynk_core::DEFAULT_GREETING;

    fn conversation(turns: usize) -> Vec<Message> {
        let mut messages = vec![Message::assistant("0", DEFAULT_GREETING)];
        for i in 0..turns {
            messages.push(Message::user(format!("u{i}"), "I have a headache"));
            messages.push(Message::assistant(
                format!("a{i}"),
                "Try resting in a dark room and drinking water. ".repeat(4),
            ));
        }
        messages
    }

    #[test]
    fn test_default_greeting_skipped() {
        let rows = build_rows(&conversation(1));
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].sender, "You");
        assert_eq!(rows[1].sender, "Healthcare Assistant");
    }

    #[test]
    fn test_custom_greeting_kept() {
        let messages = vec![Message::assistant("0", "Welcome back!")];
        assert_eq!(build_rows(&messages).len(), 1);
    }

    #[test]
    fn test_wrap_text() {
        let lines = wrap_text("one two three four five", 9);
        assert_eq!(lines, vec!["one two", "three", "four five"]);
        assert_eq!(wrap_text("", 10), vec![String::new()]);
    }

    #[test]
    fn test_paginate_long_conversation() {
        let rows = build_rows(&conversation(40));
        let pages = paginate(&rows);
        assert!(pages.len() > 1);
        let total: usize = pages.iter().map(Vec::len).sum();
        assert_eq!(total, rows.len());
        assert!(pages.iter().all(|p| !p.is_empty()));
    }

    #[test]
    fn test_wrap_breaks_long_words() {
        let url = format!("https://example.com/{}", "a".repeat(130));
        assert_eq!(url.chars().count(), 150);

        let lines = wrap_text(&format!("see {url} now"), MESSAGE_WRAP_CHARS);
        assert!(lines.iter().all(|l| l.chars().count() <= MESSAGE_WRAP_CHARS));
        assert_eq!(lines.first().map(String::as_str), Some("see"));
        assert_eq!(lines.concat().replace(' ', ""), format!("see{url}now"));
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_paginate_splits_row_taller_than_page() {
        let messages = vec![Message::user("1", "word ".repeat(3000))];
        let rows = build_rows(&messages);
        assert_eq!(rows.len(), 1);
        let line_count = rows[0].lines.len();
        assert!(line_count > lines_that_fit(first_row_y(1)));

        let pages = paginate(&rows);
        assert!(pages.len() > 1);
        assert!(pages.iter().all(|p| !p.is_empty()));

        let mut drawn = 0;
        for (index, page) in pages.iter().enumerate() {
            let mut y = first_row_y(index);
            for row in page {
                for i in 0..row.lines.len() {
                    assert!(y - i as f32 * LINE_HEIGHT >= TABLE_BOTTOM);
                }
                drawn += row.lines.len();
                y -= row.height();
            }
        }
        assert_eq!(drawn, line_count);
    }

    #[test]
    fn test_paginate_moves_row_that_fits_next_page() {
        let short = Row {
            sender: "You",
            lines: vec!["hi".to_string(); 40],
            time: "10:00".to_string(),
        };
        let pages = paginate(&[short.clone(), short.clone()]);
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0], vec![short.clone()]);
        assert_eq!(pages[1], vec![short]);
    }

    #[test]
    fn test_paginate_empty_has_one_page() {
        assert_eq!(paginate(&[]).len(), 1);
    }

    #[test]
    fn test_render_produces_pdf() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap();
        let bytes = render_pdf(&conversation(3), "Patient", date).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_export_writes_file() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("out").join("consultation.pdf");
        export_pdf(&conversation(2), "Patient", &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_export_to_directory_fails() {
        let temp = tempfile::TempDir::new().unwrap();
        let err = export_pdf(&conversation(1), "Patient", temp.path()).unwrap_err();
        assert!(matches!(err, ExportError::Io(_)));
    }

    #[test]
    fn test_default_export_name() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap();
        assert_eq!(
            default_export_name(date),
            "HealthLynk_Consultation_2026-10-17.pdf"
        );
    }
}
