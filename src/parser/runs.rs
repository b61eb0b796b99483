//! Exact character data for text runs.
//!
//! The serde pass trims the edges of every text node, which drops the spaces
//! that separate words split across runs. This event-reader pass collects the
//! untrimmed content of each `<text>` run and writes it back over the decoded
//! document.

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::error::Result;
use crate::model::{Document, Paragraph};

/// Raw run text per paragraph, in document order.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct RunTexts {
    pub body: Vec<Vec<String>>,
    pub title_page: Vec<Vec<String>>,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Section {
    Body,
    TitlePage,
}

fn section_of(container: &[u8]) -> Option<Section> {
    match container {
        b"paragraphs" => Some(Section::Body),
        b"titlepage" => Some(Section::TitlePage),
        _ => None,
    }
}

impl RunTexts {
    fn section_mut(&mut self, section: Section) -> &mut Vec<Vec<String>> {
        match section {
            Section::Body => &mut self.body,
            Section::TitlePage => &mut self.title_page,
        }
    }

    fn open_paragraph(&mut self, section: Section) {
        self.section_mut(section).push(Vec::new());
    }

    fn push_run(&mut self, section: Section, text: String) {
        if let Some(runs) = self.section_mut(section).last_mut() {
            runs.push(text);
        }
    }
}

/// Collect the character data of every `document/{paragraphs,titlepage}/para/text`
/// element without trimming.
///
/// Only direct text and CDATA children of `<text>` count; anything nested
/// deeper is skipped, like the serde pass does.
pub(crate) fn read_run_texts(xml: &str) -> Result<RunTexts> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(false);

    let mut texts = RunTexts::default();
    let mut path: Vec<Vec<u8>> = Vec::new();
    let mut current: Option<(Section, String)> = None;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(ref e) => {
                path.push(e.name().as_ref().to_vec());
                match path.len() {
                    3 if path[2] == b"para" => {
                        if let Some(section) = section_of(&path[1]) {
                            texts.open_paragraph(section);
                        }
                    }
                    4 if path[3] == b"text" && path[2] == b"para" => {
                        current = section_of(&path[1]).map(|s| (s, String::new()));
                    }
                    _ => {}
                }
            }
            Event::Empty(ref e) => {
                let name = e.name();
                match path.len() {
                    2 if name.as_ref() == b"para" => {
                        if let Some(section) = section_of(&path[1]) {
                            texts.open_paragraph(section);
                        }
                    }
                    3 if name.as_ref() == b"text" && path[2] == b"para" => {
                        if let Some(section) = section_of(&path[1]) {
                            texts.push_run(section, String::new());
                        }
                    }
                    _ => {}
                }
            }
            Event::Text(ref t) if path.len() == 4 => {
                if let Some((_, ref mut text)) = current {
                    text.push_str(&t.unescape()?);
                }
            }
            Event::CData(ref c) if path.len() == 4 => {
                if let Some((_, ref mut text)) = current {
                    text.push_str(std::str::from_utf8(c)?);
                }
            }
            Event::End(_) => {
                if path.len() == 4 {
                    if let Some((section, text)) = current.take() {
                        texts.push_run(section, text);
                    }
                }
                path.pop();
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(texts)
}

/// Overwrite decoded run text with the exact character data.
///
/// Paragraphs whose run count disagrees with the collected runs keep the
/// decoded text.
pub(crate) fn restore_run_text(doc: &mut Document, texts: RunTexts) {
    restore_section(&mut doc.paragraphs.items, texts.body);
    if let Some(ref mut title_page) = doc.title_page {
        restore_section(&mut title_page.items, texts.title_page);
    }
}

fn restore_section(paragraphs: &mut [Paragraph], texts: Vec<Vec<String>>) {
    if paragraphs.len() != texts.len() {
        log::warn!(
            "Run text pass found {} paragraphs, decoder found {}",
            texts.len(),
            paragraphs.len()
        );
        return;
    }

    for (index, (para, runs)) in paragraphs.iter_mut().zip(texts).enumerate() {
        if para.runs.len() != runs.len() {
            log::warn!("Paragraph {}: run count mismatch, keeping decoded text", index);
            continue;
        }
        for (run, text) in para.runs.iter_mut().zip(runs) {
            run.text = text;
        }
    }
}
