//! Serialization of catalogs back to the `.ts` format.

use crate::catalog::Catalog;
use crate::entry::TranslationEntry;
use crate::error::WriteError;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::collections::HashMap;
use std::io::Write;
use tracing::debug;

const DEFAULT_VERSION: &str = "2.1";

/// Serialize a catalog as a `.ts` document.
///
/// Contexts appear in order of first appearance and messages keep their load
/// order, so loading the output yields the same lookups as the input.
pub fn write_ts(catalog: &Catalog) -> Result<String, WriteError> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 4);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
    writer.write_event(Event::DocType(BytesText::from_escaped("TS")))?;

    let mut root = BytesStart::new("TS");
    root.push_attribute(("version", catalog.version().unwrap_or(DEFAULT_VERSION)));
    if let Some(language) = catalog.raw_language() {
        root.push_attribute(("language", language));
    }
    if let Some(source_language) = catalog.source_language() {
        root.push_attribute(("sourcelanguage", source_language));
    }
    writer.write_event(Event::Start(root))?;

    let contexts = group_by_context(catalog.entries());
    for (name, entries) in &contexts {
        writer.write_event(Event::Start(BytesStart::new("context")))?;
        write_text_element(&mut writer, BytesStart::new("name"), name)?;
        for entry in entries {
            write_message(&mut writer, entry)?;
        }
        writer.write_event(Event::End(BytesEnd::new("context")))?;
    }

    writer.write_event(Event::End(BytesEnd::new("TS")))?;

    let mut bytes = writer.into_inner();
    bytes.push(b'\n');
    debug!(
        "Serialized {} entries in {} contexts",
        catalog.len(),
        contexts.len()
    );
    Ok(String::from_utf8(bytes)?)
}

fn group_by_context(entries: &[TranslationEntry]) -> Vec<(&str, Vec<&TranslationEntry>)> {
    let mut groups: Vec<(&str, Vec<&TranslationEntry>)> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for entry in entries {
        let position = *positions.entry(entry.context.as_str()).or_insert_with(|| {
            groups.push((entry.context.as_str(), Vec::new()));
            groups.len() - 1
        });
        groups[position].1.push(entry);
    }

    groups
}

fn write_message<W: Write>(writer: &mut Writer<W>, entry: &TranslationEntry) -> Result<(), WriteError> {
    let mut message = BytesStart::new("message");
    if entry.numerus {
        message.push_attribute(("numerus", "yes"));
    }
    writer.write_event(Event::Start(message))?;

    for location in &entry.locations {
        let mut element = BytesStart::new("location");
        element.push_attribute(("filename", location.filename.as_str()));
        if let Some(line) = location.line {
            element.push_attribute(("line", line.to_string().as_str()));
        }
        writer.write_event(Event::Empty(element))?;
    }

    write_text_element(writer, BytesStart::new("source"), &entry.source)?;

    let optional = [
        ("oldsource", &entry.old_source),
        ("comment", &entry.disambiguation),
        ("extracomment", &entry.extra_comment),
        ("translatorcomment", &entry.translator_comment),
    ];
    for (name, value) in optional {
        if let Some(text) = value {
            write_text_element(writer, BytesStart::new(name), text)?;
        }
    }

    let mut translation = BytesStart::new("translation");
    if let Some(kind) = entry.status.as_attribute() {
        translation.push_attribute(("type", kind));
    }
    if entry.numerus_forms.is_empty() {
        write_text_element(writer, translation, &entry.translation)?;
    } else {
        writer.write_event(Event::Start(translation))?;
        for form in &entry.numerus_forms {
            write_text_element(writer, BytesStart::new("numerusform"), form)?;
        }
        writer.write_event(Event::End(BytesEnd::new("translation")))?;
    }

    writer.write_event(Event::End(BytesEnd::new("message")))?;
    Ok(())
}

fn write_text_element<W: Write>(
    writer: &mut Writer<W>,
    start: BytesStart<'_>,
    text: &str,
) -> Result<(), WriteError> {
    let end = start.to_end().into_owned();
    writer.write_event(Event::Start(start))?;
    write_text(writer, text)?;
    writer.write_event(Event::End(end))?;
    Ok(())
}

/// Control characters XML 1.0 cannot carry are written as `<byte value="xNN"/>`.
///
/// A text event always follows the last escape so the closing tag stays on
/// the same line and no indentation leaks into the text.
fn write_text<W: Write>(writer: &mut Writer<W>, text: &str) -> Result<(), WriteError> {
    let mut rest = text;
    while let Some((offset, c)) = rest.char_indices().find(|&(_, c)| needs_byte_escape(c)) {
        writer.write_event(Event::Text(BytesText::new(&rest[..offset])))?;

        let value = format!("x{:x}", u32::from(c));
        let mut byte = BytesStart::new("byte");
        byte.push_attribute(("value", value.as_str()));
        writer.write_event(Event::Empty(byte))?;

        rest = &rest[offset + c.len_utf8()..];
    }
    writer.write_event(Event::Text(BytesText::new(rest)))?;
    Ok(())
}

const fn needs_byte_escape(c: char) -> bool {
    c.is_ascii_control() && !matches!(c, '\t' | '\n' | '\r')
}
