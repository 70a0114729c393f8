//! Text Extractor — converts an uploaded binary document of a declared MIME
//! type into plain text. Pure transformation, no side effects.

use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;
use tracing::warn;

use crate::errors::AppError;

/// Page cap for PDF decoding. Bounds worst-case decode cost on large uploads;
/// anything past this many pages is ignored.
const MAX_PDF_PAGES: usize = 5;

const DOCX_MIME: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Dispatches on the declared MIME type and decodes the buffer to plain text.
///
/// Recognized families: PDF, Word-processing (DOCX / legacy Word), and plain
/// text. Any other declared type fails `UnsupportedFormat` without touching
/// the buffer.
pub fn extract_text(data: &[u8], content_type: &str) -> Result<String, AppError> {
    // Drop any parameters ("text/plain; charset=utf-8") before matching.
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or("")
        .trim()
        .to_ascii_lowercase();

    match mime.as_str() {
        "application/pdf" => extract_pdf(data),
        m if m == DOCX_MIME || m.contains("docx") || m.contains("msword") => extract_docx(data),
        m if m == "text/plain" || m.starts_with("text/") => Ok(extract_plain_text(data)),
        _ => Err(AppError::UnsupportedFormat(content_type.to_string())),
    }
}

/// Decodes the textual content of a PDF, capped at `MAX_PDF_PAGES` pages.
fn extract_pdf(data: &[u8]) -> Result<String, AppError> {
    let doc = lopdf::Document::load_mem(data)
        .map_err(|e| AppError::ExtractionFailed(format!("could not read PDF: {e}")))?;

    if doc.is_encrypted() {
        return Err(AppError::ExtractionFailed(
            "PDF is encrypted".to_string(),
        ));
    }

    let pages = doc.get_pages();
    let mut text = String::new();

    for page_num in pages.keys().take(MAX_PDF_PAGES) {
        match doc.extract_text(&[*page_num]) {
            Ok(page_text) => {
                text.push_str(&page_text);
                text.push('\n');
            }
            Err(e) => {
                warn!("Failed to extract text from PDF page {page_num}: {e}");
            }
        }
    }

    if text.trim().is_empty() {
        return Err(AppError::ExtractionFailed(
            "no text could be extracted from the PDF".to_string(),
        ));
    }

    Ok(text)
}

/// Decodes the raw text content of a DOCX, discarding all formatting.
///
/// A DOCX is a ZIP archive; the document body lives in `word/document.xml`.
/// Text runs are `<w:t>` elements and paragraphs are `<w:p>` elements.
fn extract_docx(data: &[u8]) -> Result<String, AppError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(data))
        .map_err(|_| AppError::ExtractionFailed("could not read Word document".to_string()))?;

    let mut document_xml = archive
        .by_name("word/document.xml")
        .map_err(|_| AppError::ExtractionFailed("could not read Word document".to_string()))?;

    let mut xml_content = String::new();
    document_xml
        .read_to_string(&mut xml_content)
        .map_err(|_| AppError::ExtractionFailed("could not read Word document".to_string()))?;

    parse_docx_xml(&xml_content)
}

fn parse_docx_xml(xml: &str) -> Result<String, AppError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut text = String::new();
    let mut in_text_element = false;
    let mut in_paragraph = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => match e.local_name().as_ref() {
                b"t" => in_text_element = true,
                b"p" => in_paragraph = true,
                _ => {}
            },
            Ok(Event::End(ref e)) => match e.local_name().as_ref() {
                b"t" => in_text_element = false,
                b"p" => {
                    if in_paragraph {
                        text.push('\n');
                        in_paragraph = false;
                    }
                }
                _ => {}
            },
            Ok(Event::Text(e)) => {
                if in_text_element {
                    let decoded = e.unescape().unwrap_or_default();
                    text.push_str(&decoded);
                }
            }
            Ok(Event::Eof) => break,
            Err(_) => {
                return Err(AppError::ExtractionFailed(
                    "could not read Word document".to_string(),
                ));
            }
            _ => {}
        }
    }

    Ok(text)
}

/// Decodes the buffer as UTF-8 text. Malformed sequences are replaced rather
/// than rejected, so this variant cannot fail.
fn extract_plain_text(data: &[u8]) -> String {
    String::from_utf8_lossy(data).into_owned()
}
