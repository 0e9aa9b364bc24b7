//! DOCX paragraph text.
//!
//! A DOCX file is a ZIP archive; the body lives in `word/document.xml` as
//! WordprocessingML. Paragraphs are `<w:p>` elements and their visible text is
//! spread over `<w:t>` runs:
//!
//! ```text
//! <w:p><w:r><w:t>Hello </w:t></w:r><w:r><w:t>world.</w:t></w:r></w:p>
//!   -> "Hello world."
//! ```
//!
//! Only top-level body paragraphs are read. Paragraphs inside tables and text
//! boxes are skipped, as are deleted runs (`<w:delText>`). A text box sits in
//! a run of its host paragraph and Word stores it twice (`mc:Choice` and
//! `mc:Fallback`):
//!
//! ```text
//! <w:p><w:r><w:t>Before.</w:t></w:r>
//!      <w:r><mc:AlternateContent>...<w:txbxContent><w:p>Box</w:p>...</mc:AlternateContent></w:r>
//!      <w:r><w:t> After.</w:t></w:r></w:p>
//!   -> "Before. After."
//! ```

use std::io::{Cursor, Read};

use crate::{Error, Result};

const DOCUMENT_PART: &str = "word/document.xml";

/// Extract the non-blank paragraphs of a DOCX file, joined with newlines.
pub(crate) fn extract_docx(bytes: &[u8]) -> Result<String> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| Error::Docx(format!("not a zip container: {e}")))?;

    let mut part = archive
        .by_name(DOCUMENT_PART)
        .map_err(|e| Error::Docx(format!("{DOCUMENT_PART}: {e}")))?;

    let mut xml = String::new();
    part.read_to_string(&mut xml)
        .map_err(|e| Error::Docx(format!("{DOCUMENT_PART}: {e}")))?;

    Ok(paragraphs(&xml)
        .iter()
        .filter(|p| !p.trim().is_empty())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join("\n"))
}

/// Collect the text of each body paragraph in document order.
fn paragraphs(xml: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut current: Option<String> = None;
    let mut in_text = false;
    let mut in_props = false;
    let mut skip_depth = 0usize;
    let mut rest = xml;

    while let Some(lt) = rest.find('<') {
        if in_text && skip_depth == 0 {
            if let Some(p) = current.as_mut() {
                unescape_into(&rest[..lt], p);
            }
        }
        let Some(gt) = rest[lt..].find('>') else {
            break;
        };
        let tag = &rest[lt + 1..lt + gt];
        rest = &rest[lt + gt + 1..];

        let closing = tag.starts_with('/');
        let self_closing = tag.ends_with('/');
        let name = tag
            .trim_start_matches('/')
            .split(|c: char| c.is_whitespace() || c == '/')
            .next()
            .unwrap_or("");

        match (name, closing) {
            (n, false) if is_skipped_subtree(n) && !self_closing => skip_depth += 1,
            (n, true) if is_skipped_subtree(n) => skip_depth = skip_depth.saturating_sub(1),
            _ if skip_depth > 0 => {}
            // Tab stops in paragraph properties are layout, not text
            ("w:pPr", false) => in_props = !self_closing,
            ("w:pPr", true) => in_props = false,
            _ if in_props => {}
            ("w:p", false) => {
                if self_closing {
                    out.push(String::new());
                } else {
                    current = Some(String::new());
                }
            }
            ("w:p", true) => {
                if let Some(p) = current.take() {
                    out.push(p);
                }
                in_text = false;
            }
            ("w:t", false) => in_text = !self_closing,
            ("w:t", true) => in_text = false,
            ("w:tab", false) => push_char(&mut current, '\t'),
            ("w:br" | "w:cr", false) => push_char(&mut current, '\n'),
            _ => {}
        }
    }

    out
}

/// Elements whose paragraphs are not part of the body text.
fn is_skipped_subtree(name: &str) -> bool {
    matches!(name, "w:tbl" | "w:txbxContent" | "mc:Fallback")
}

fn push_char(current: &mut Option<String>, c: char) {
    if let Some(p) = current.as_mut() {
        p.push(c);
    }
}

/// Append `raw` to `out`, decoding XML entity and character references.
fn unescape_into(raw: &str, out: &mut String) {
    let mut rest = raw;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let after = &rest[amp + 1..];
        let decoded = after.find(';').and_then(|semi| {
            let entity = &after[..semi];
            let c = match entity {
                "amp" => Some('&'),
                "lt" => Some('<'),
                "gt" => Some('>'),
                "quot" => Some('"'),
                "apos" => Some('\''),
                _ => entity
                    .strip_prefix("#x")
                    .or_else(|| entity.strip_prefix("#X"))
                    .map(|hex| u32::from_str_radix(hex, 16))
                    .or_else(|| entity.strip_prefix('#').map(str::parse::<u32>))
                    .and_then(std::result::Result::ok)
                    .and_then(char::from_u32),
            };
            c.map(|c| (c, semi))
        });
        match decoded {
            Some((c, semi)) => {
                out.push(c);
                rest = &after[semi + 1..];
            }
            None => {
                out.push('&');
                rest = after;
            }
        }
    }
    out.push_str(rest);
}
