//! Streaming reader for Qt Linguist `.ts` documents.
//!
//! The reader is permissive about content it does not understand: unknown
//! attributes are ignored and unknown elements are skipped together with
//! their children. Structural problems (malformed XML, unclosed elements,
//! a wrong root, contexts without a name, messages without a source) are
//! rejected with a [`LoadError`].

use crate::entry::{SourceLocation, TranslationEntry, TranslationStatus};
use crate::error::{LoadError, LoadResult};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use tracing::{debug, trace, warn};

/// Contents of a translation document in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedDocument {
    /// `version` attribute of the root element.
    pub version: Option<String>,
    /// `language` attribute of the root element, e.g. `ru_RU`.
    pub language: Option<String>,
    /// `sourcelanguage` attribute of the root element.
    pub source_language: Option<String>,
    /// All messages of all contexts, in load order.
    pub entries: Vec<TranslationEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Node {
    Root,
    Context,
    ContextName,
    Message,
    Location,
    Source,
    OldSource,
    Comment,
    ExtraComment,
    TranslatorComment,
    Translation,
    NumerusForm,
    Byte,
    Skipped,
}

impl Node {
    fn child(self, name: &[u8]) -> Self {
        match (self, name) {
            (Self::Root, b"context") => Self::Context,
            (Self::Context, b"name") => Self::ContextName,
            (Self::Context, b"message") => Self::Message,
            (Self::Message, b"location") => Self::Location,
            (Self::Message, b"source") => Self::Source,
            (Self::Message, b"oldsource") => Self::OldSource,
            (Self::Message, b"comment") => Self::Comment,
            (Self::Message, b"extracomment") => Self::ExtraComment,
            (Self::Message, b"translatorcomment") => Self::TranslatorComment,
            (Self::Message, b"translation") => Self::Translation,
            (Self::Translation, b"numerusform") => Self::NumerusForm,
            (parent, b"byte") if parent.captures_text() => Self::Byte,
            _ => Self::Skipped,
        }
    }

    const fn captures_text(self) -> bool {
        matches!(
            self,
            Self::ContextName
                | Self::Source
                | Self::OldSource
                | Self::Comment
                | Self::ExtraComment
                | Self::TranslatorComment
                | Self::Translation
                | Self::NumerusForm
        )
    }
}

#[derive(Debug, Default)]
struct ContextBuilder {
    name: Option<String>,
    entries: Vec<TranslationEntry>,
}

#[derive(Debug, Default)]
struct MessageBuilder {
    entry: TranslationEntry,
    has_source: bool,
}

#[derive(Debug, Default)]
struct DocumentBuilder {
    document: ParsedDocument,
    stack: Vec<(Node, String)>,
    root_seen: bool,
    context: Option<ContextBuilder>,
    message: Option<MessageBuilder>,
    text: String,
}

/// Parse a translation document.
pub fn parse_ts(input: &str) -> LoadResult<ParsedDocument> {
    let mut reader = Reader::from_str(input);
    let mut builder = DocumentBuilder::default();

    loop {
        let position = reader.buffer_position();
        let event = reader
            .read_event()
            .map_err(|source| LoadError::Xml { position, source })?;

        match event {
            Event::Start(e) => builder.open(&e, position)?,
            Event::Empty(e) => {
                builder.open(&e, position)?;
                builder.close(position)?;
            }
            Event::End(_) => builder.close(position)?,
            Event::Text(t) => {
                if builder.capturing_text() {
                    let text = t
                        .unescape()
                        .map_err(|source| LoadError::Xml { position, source })?;
                    builder.text.push_str(&text);
                }
            }
            Event::CData(c) => {
                if builder.capturing_text() {
                    let bytes = c.into_inner();
                    let text = std::str::from_utf8(&bytes)
                        .map_err(|_| LoadError::InvalidUtf8 { position })?;
                    builder.text.push_str(text);
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    builder.finish()
}

impl DocumentBuilder {
    fn capturing_text(&self) -> bool {
        self.stack
            .last()
            .is_some_and(|(node, _)| node.captures_text())
    }

    fn open(&mut self, e: &BytesStart<'_>, position: usize) -> LoadResult<()> {
        let name = e.name();
        let display_name = String::from_utf8_lossy(name.as_ref()).into_owned();

        let node = match self.stack.last() {
            None => {
                if self.root_seen {
                    trace!("Ignoring element <{}> after the root element", display_name);
                    Node::Skipped
                } else if name.as_ref() == b"TS" {
                    self.root_seen = true;
                    self.document.version = attribute(e, b"version", position)?;
                    self.document.language = attribute(e, b"language", position)?;
                    self.document.source_language = attribute(e, b"sourcelanguage", position)?;
                    Node::Root
                } else {
                    return Err(LoadError::UnexpectedRoot {
                        found: display_name,
                    });
                }
            }
            Some((parent, _)) => parent.child(name.as_ref()),
        };

        match node {
            Node::Context => self.context = Some(ContextBuilder::default()),
            Node::Message => {
                let numerus = attribute(e, b"numerus", position)?;
                self.message = Some(MessageBuilder {
                    entry: TranslationEntry {
                        numerus: numerus.as_deref() == Some("yes"),
                        ..TranslationEntry::default()
                    },
                    has_source: false,
                });
            }
            Node::Translation => {
                let kind = attribute(e, b"type", position)?;
                let status = TranslationStatus::from_attribute(kind.as_deref());
                if status == TranslationStatus::Unfinished && kind.as_deref() != Some("unfinished") {
                    warn!(
                        "Unknown translation type {:?} at byte {}, treating as unfinished",
                        kind, position
                    );
                }
                if let Some(message) = self.message.as_mut() {
                    message.entry.status = status;
                }
                self.text.clear();
            }
            Node::Location => {
                if let Some(filename) = attribute(e, b"filename", position)? {
                    let line = attribute(e, b"line", position)?.and_then(|l| l.parse().ok());
                    if let Some(message) = self.message.as_mut() {
                        message.entry.locations.push(SourceLocation { filename, line });
                    }
                }
            }
            Node::Byte => {
                if let Some(value) = attribute(e, b"value", position)? {
                    match decode_byte(&value) {
                        Some(c) => self.text.push(c),
                        None => warn!("Ignoring invalid <byte value={:?}/> at byte {}", value, position),
                    }
                }
            }
            other if other.captures_text() => self.text.clear(),
            _ => {}
        }

        self.stack.push((node, display_name));
        Ok(())
    }

    fn close(&mut self, position: usize) -> LoadResult<()> {
        let Some((node, _)) = self.stack.pop() else {
            return Ok(());
        };

        match node {
            Node::ContextName => {
                let name = std::mem::take(&mut self.text);
                if let Some(context) = self.context.as_mut() {
                    context.name = Some(name);
                }
            }
            Node::Source => {
                let text = std::mem::take(&mut self.text);
                if let Some(message) = self.message.as_mut() {
                    message.entry.source = text;
                    message.has_source = true;
                }
            }
            Node::OldSource => self.set_message_field(|entry, text| entry.old_source = Some(text)),
            Node::Comment => self.set_message_field(|entry, text| entry.disambiguation = Some(text)),
            Node::ExtraComment => self.set_message_field(|entry, text| entry.extra_comment = Some(text)),
            Node::TranslatorComment => {
                self.set_message_field(|entry, text| entry.translator_comment = Some(text));
            }
            Node::NumerusForm => {
                self.set_message_field(|entry, text| entry.numerus_forms.push(text));
            }
            Node::Translation => self.set_message_field(|entry, text| {
                entry.translation = if entry.numerus_forms.is_empty() {
                    text
                } else {
                    entry
                        .numerus_forms
                        .iter()
                        .find(|form| !form.is_empty())
                        .cloned()
                        .unwrap_or_default()
                };
            }),
            Node::Message => {
                if let Some(message) = self.message.take() {
                    let context = self.context.get_or_insert_with(ContextBuilder::default);
                    if !message.has_source {
                        return Err(LoadError::MissingSource {
                            context: context.name.clone().unwrap_or_default(),
                            position,
                        });
                    }
                    context.entries.push(message.entry);
                }
            }
            Node::Context => {
                if let Some(context) = self.context.take() {
                    let Some(name) = context.name else {
                        return Err(LoadError::MissingContextName { position });
                    };
                    self.document
                        .entries
                        .extend(context.entries.into_iter().map(|mut entry| {
                            entry.context.clone_from(&name);
                            entry
                        }));
                }
            }
            _ => {}
        }

        Ok(())
    }

    fn set_message_field(&mut self, apply: impl FnOnce(&mut TranslationEntry, String)) {
        let text = std::mem::take(&mut self.text);
        if let Some(message) = self.message.as_mut() {
            apply(&mut message.entry, text);
        }
    }

    fn finish(self) -> LoadResult<ParsedDocument> {
        if let Some((_, element)) = self.stack.last() {
            return Err(LoadError::UnexpectedEof {
                element: element.clone(),
            });
        }
        if !self.root_seen {
            return Err(LoadError::MissingRoot);
        }

        debug!(
            "Parsed translation document: language={:?}, {} entries",
            self.document.language,
            self.document.entries.len()
        );
        Ok(self.document)
    }
}

fn attribute(e: &BytesStart<'_>, key: &[u8], position: usize) -> LoadResult<Option<String>> {
    for attr in e.attributes() {
        let attr = attr.map_err(|err| LoadError::Xml {
            position,
            source: err.into(),
        })?;
        if attr.key.as_ref() == key {
            let value = attr
                .unescape_value()
                .map_err(|source| LoadError::Xml { position, source })?;
            return Ok(Some(value.into_owned()));
        }
    }
    Ok(None)
}

/// Decode the `value` of a `<byte/>` escape: `x1b` is hex, plain digits are decimal.
fn decode_byte(value: &str) -> Option<char> {
    let code = match value.strip_prefix('x') {
        Some(hex) => u32::from_str_radix(hex, 16).ok()?,
        None => value.parse().ok()?,
    };
    char::from_u32(code)
}
