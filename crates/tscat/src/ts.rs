//! Reader and writer for Qt Linguist `.ts` translation sources.
//!
//! The reader is strict about structure (root element, nesting, required
//! children) and lenient about content: unknown elements are skipped and
//! unknown `type` values are treated as unfinished.
//!
//! Text is kept byte-for-byte, including leading and trailing newlines.
//! Control characters travel as `<byte value="xNN"/>` elements.

use std::fmt::Write as _;
use std::path::Path;

use quick_xml::Reader;
use quick_xml::escape::escape;
use quick_xml::events::{BytesStart, Event};

use crate::catalog::{
    Catalog, CatalogBuilder, Location, MessageEntry, Translation, TranslationStatus,
};
use crate::error::{LoadError, Result};

const DEFAULT_VERSION: &str = "2.1";

/// Elements the reader understands. Anything else is [`Tag::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tag {
    Ts,
    Context,
    Name,
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
    Other,
}

impl Tag {
    fn from_name(name: &[u8]) -> Self {
        match name {
            b"TS" => Self::Ts,
            b"context" => Self::Context,
            b"name" => Self::Name,
            b"message" => Self::Message,
            b"location" => Self::Location,
            b"source" => Self::Source,
            b"oldsource" => Self::OldSource,
            b"comment" => Self::Comment,
            b"extracomment" => Self::ExtraComment,
            b"translatorcomment" => Self::TranslatorComment,
            b"translation" => Self::Translation,
            b"numerusform" | b"lengthvariant" => Self::NumerusForm,
            b"byte" => Self::Byte,
            _ => Self::Other,
        }
    }

    /// Elements whose character data is collected.
    fn collects_text(self) -> bool {
        matches!(
            self,
            Self::Name
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
struct MessageDraft {
    entry: MessageEntry,
    has_source: bool,
    numerus: bool,
    forms: Vec<String>,
}

#[derive(Debug, Default)]
struct ContextDraft {
    name: Option<String>,
    messages: Vec<MessageEntry>,
}

struct TsReader<'a> {
    reader: Reader<&'a [u8]>,
    stack: Vec<Tag>,
    text: String,
    builder: Option<CatalogBuilder>,
    context: Option<ContextDraft>,
    message: Option<MessageDraft>,
}

impl<'a> TsReader<'a> {
    fn new(input: &'a str) -> Self {
        let mut reader = Reader::from_str(input);
        reader.config_mut().trim_text(false);
        Self {
            reader,
            stack: Vec::new(),
            text: String::new(),
            builder: None,
            context: None,
            message: None,
        }
    }

    fn position(&self) -> u64 {
        self.reader.buffer_position() as u64
    }

    fn malformed(&self, reason: impl Into<String>) -> LoadError {
        LoadError::malformed(reason, self.position())
    }

    fn run(mut self) -> Result<Catalog> {
        loop {
            let event = self.reader.read_event().map_err(|e| {
                LoadError::malformed(e.to_string(), self.reader.error_position() as u64)
            })?;
            match event {
                Event::Start(start) => self.open(&start)?,
                Event::Empty(start) => {
                    self.open(&start)?;
                    self.close()?;
                }
                Event::End(_) => self.close()?,
                Event::Text(text) => {
                    let text = text.unescape().map_err(|e| self.malformed(e.to_string()))?;
                    self.append_text(&text)?;
                }
                Event::CData(data) => {
                    let data = data
                        .decode()
                        .map_err(|e| self.malformed(e.to_string()))?
                        .into_owned();
                    self.append_text(&data)?;
                }
                Event::Eof => break,
                Event::Decl(_) | Event::DocType(_) | Event::Comment(_) | Event::PI(_) => {}
            }
        }

        if let Some(open) = self.stack.last() {
            return Err(self.malformed(format!("unexpected end of input inside {open:?}")));
        }
        match self.builder {
            Some(builder) => {
                let merged = builder.merged();
                let conflicts = builder.conflicts();
                let catalog = builder.build();
                tracing::debug!(
                    language = catalog.language().unwrap_or("-"),
                    contexts = catalog.contexts().len(),
                    messages = catalog.message_count(),
                    merged,
                    conflicts,
                    "parsed translation resource"
                );
                Ok(catalog)
            }
            None => Err(self.malformed("missing <TS> root element")),
        }
    }

    fn open(&mut self, start: &BytesStart<'_>) -> Result<()> {
        let tag = Tag::from_name(start.name().as_ref());
        let parent = self.stack.last().copied();

        if parent == Some(Tag::Other) {
            self.stack.push(Tag::Other);
            return Ok(());
        }
        if parent.is_none() && tag != Tag::Ts {
            let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
            return Err(self.malformed(format!("expected <TS> root element, found <{name}>")));
        }

        match tag {
            Tag::Ts => {
                if self.builder.is_some() {
                    return Err(self.malformed("nested or repeated <TS> element"));
                }
                let mut builder = CatalogBuilder::new();
                if let Some(version) = self.attr(start, b"version")? {
                    builder = builder.version(version);
                }
                if let Some(language) = self.attr(start, b"language")? {
                    builder = builder.language(language);
                }
                if let Some(language) = self.attr(start, b"sourcelanguage")? {
                    builder = builder.source_language(language);
                }
                self.builder = Some(builder);
            }
            Tag::Context => {
                self.expect_parent(parent, Tag::Ts, "context")?;
                self.context = Some(ContextDraft::default());
            }
            Tag::Message => {
                self.expect_parent(parent, Tag::Context, "message")?;
                let numerus = self.attr(start, b"numerus")?.as_deref() == Some("yes");
                self.message = Some(MessageDraft {
                    numerus,
                    ..MessageDraft::default()
                });
            }
            Tag::Name => self.expect_parent(parent, Tag::Context, "name")?,
            Tag::Location => {
                self.expect_parent(parent, Tag::Message, "location")?;
                let filename = self.attr(start, b"filename")?.unwrap_or_default();
                let line = self.attr(start, b"line")?.and_then(|l| l.parse().ok());
                if let Some(draft) = self.message.as_mut() {
                    draft.entry.locations.push(Location { filename, line });
                }
            }
            Tag::Source
            | Tag::OldSource
            | Tag::Comment
            | Tag::ExtraComment
            | Tag::TranslatorComment => {
                self.expect_parent(parent, Tag::Message, "text element")?;
            }
            Tag::Translation => {
                self.expect_parent(parent, Tag::Message, "translation")?;
                let status = match self.attr(start, b"type")? {
                    None => TranslationStatus::Finished,
                    Some(kind) => TranslationStatus::from_attr(&kind)
                        .unwrap_or(TranslationStatus::Unfinished),
                };
                if let Some(draft) = self.message.as_mut() {
                    draft.entry.status = status;
                }
            }
            Tag::NumerusForm => self.expect_parent(parent, Tag::Translation, "numerusform")?,
            Tag::Byte => {
                let value = self
                    .attr(start, b"value")?
                    .ok_or_else(|| self.malformed("<byte> without value"))?;
                let ch = parse_byte_value(&value)
                    .ok_or_else(|| self.malformed(format!("invalid <byte> value '{value}'")))?;
                if parent.is_some_and(Tag::collects_text) {
                    self.text.push(ch);
                }
            }
            Tag::Other => {}
        }

        if tag.collects_text() {
            self.text.clear();
        }
        self.stack.push(tag);
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        let tag = self
            .stack
            .pop()
            .ok_or_else(|| self.malformed("unbalanced closing tag"))?;
        if self.stack.last() == Some(&Tag::Other) {
            return Ok(());
        }
        let text = if tag.collects_text() {
            std::mem::take(&mut self.text)
        } else {
            String::new()
        };

        match tag {
            Tag::Name => {
                if let Some(context) = self.context.as_mut() {
                    context.name = Some(text);
                }
            }
            Tag::Source => {
                if let Some(draft) = self.message.as_mut() {
                    draft.entry.source = text;
                    draft.has_source = true;
                }
            }
            Tag::OldSource => self.set_message_field(|entry| entry.old_source = Some(text)),
            Tag::Comment => self.set_message_field(|entry| entry.comment = Some(text)),
            Tag::ExtraComment => self.set_message_field(|entry| entry.extra_comment = Some(text)),
            Tag::TranslatorComment => {
                self.set_message_field(|entry| entry.translator_comment = Some(text));
            }
            Tag::NumerusForm => {
                if let Some(draft) = self.message.as_mut() {
                    draft.forms.push(text);
                }
            }
            Tag::Translation => {
                if let Some(draft) = self.message.as_mut() {
                    draft.entry.translation = if draft.numerus || !draft.forms.is_empty() {
                        Translation::Numerus(std::mem::take(&mut draft.forms))
                    } else {
                        Translation::Single(text)
                    };
                }
            }
            Tag::Message => {
                let draft = self.message.take().unwrap_or_default();
                if !draft.has_source {
                    return Err(self.malformed("<message> without <source>"));
                }
                if let Some(context) = self.context.as_mut() {
                    context.messages.push(draft.entry);
                }
            }
            Tag::Context => {
                let draft = self.context.take().unwrap_or_default();
                let Some(name) = draft.name else {
                    return Err(self.malformed("<context> without <name>"));
                };
                if let Some(builder) = self.builder.as_mut() {
                    builder.ensure_context(&name);
                    for entry in draft.messages {
                        builder.push(&name, entry);
                    }
                }
            }
            Tag::Ts | Tag::Location | Tag::Byte | Tag::Other => {}
        }
        Ok(())
    }

    fn append_text(&mut self, text: &str) -> Result<()> {
        match self.stack.last() {
            Some(tag) if tag.collects_text() => self.text.push_str(text),
            Some(_) => {}
            None if text.trim().is_empty() => {}
            None => return Err(self.malformed("text outside of the root element")),
        }
        Ok(())
    }

    fn set_message_field(&mut self, apply: impl FnOnce(&mut MessageEntry)) {
        if let Some(draft) = self.message.as_mut() {
            apply(&mut draft.entry);
        }
    }

    fn expect_parent(&self, parent: Option<Tag>, expected: Tag, what: &str) -> Result<()> {
        if parent == Some(expected) {
            Ok(())
        } else {
            Err(self.malformed(format!(
                "<{what}> must be inside {expected:?}, found inside {:?}",
                parent.unwrap_or(Tag::Other)
            )))
        }
    }

    fn attr(&self, start: &BytesStart<'_>, key: &[u8]) -> Result<Option<String>> {
        match start.try_get_attribute(key) {
            Ok(Some(attr)) => attr
                .unescape_value()
                .map(|v| Some(v.into_owned()))
                .map_err(|e| self.malformed(e.to_string())),
            Ok(None) => Ok(None),
            Err(e) => Err(self.malformed(e.to_string())),
        }
    }
}

/// `x1b` is hexadecimal, `27` decimal.
fn parse_byte_value(value: &str) -> Option<char> {
    let code = match value.strip_prefix(['x', 'X']) {
        Some(hex) => u32::from_str_radix(hex, 16).ok()?,
        None => value.parse().ok()?,
    };
    char::from_u32(code)
}

/// Parse a `.ts` document.
pub fn parse_str(input: &str) -> Result<Catalog> {
    TsReader::new(input).run()
}

/// Read and parse a `.ts` file.
pub fn parse_file(path: impl AsRef<Path>) -> Result<Catalog> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_str(&content)
}

/// Serialize a catalog in the `.ts` dialect.
#[must_use]
pub fn to_string(catalog: &Catalog) -> String {
    let mut out = String::with_capacity(catalog.message_count() * 160 + 128);
    out.push_str("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<!DOCTYPE TS>\n<TS version=\"");
    out.push_str(&escape(catalog.version().unwrap_or(DEFAULT_VERSION)));
    out.push('"');
    if let Some(language) = catalog.language() {
        let _ = write!(out, " language=\"{}\"", escape(language));
    }
    if let Some(language) = catalog.source_language() {
        let _ = write!(out, " sourcelanguage=\"{}\"", escape(language));
    }
    out.push_str(">\n");

    for context in catalog.contexts() {
        out.push_str("  <context>\n");
        write_element(&mut out, 4, "name", context.name());
        for entry in context.messages() {
            write_message(&mut out, entry);
        }
        out.push_str("  </context>\n");
    }

    out.push_str("</TS>\n");
    out
}

fn write_message(out: &mut String, entry: &MessageEntry) {
    if entry.is_numerus() {
        out.push_str("    <message numerus=\"yes\">\n");
    } else {
        out.push_str("    <message>\n");
    }
    for location in &entry.locations {
        let _ = write!(out, "      <location filename=\"{}\"", escape(&location.filename));
        if let Some(line) = location.line {
            let _ = write!(out, " line=\"{line}\"");
        }
        out.push_str("/>\n");
    }
    write_element(out, 6, "source", &entry.source);
    if let Some(old) = &entry.old_source {
        write_element(out, 6, "oldsource", old);
    }
    if let Some(comment) = &entry.comment {
        write_element(out, 6, "comment", comment);
    }
    if let Some(note) = &entry.extra_comment {
        write_element(out, 6, "extracomment", note);
    }
    if let Some(note) = &entry.translator_comment {
        write_element(out, 6, "translatorcomment", note);
    }

    out.push_str("      <translation");
    if let Some(kind) = entry.status.as_attr() {
        let _ = write!(out, " type=\"{kind}\"");
    }
    match &entry.translation {
        Translation::Single(text) => {
            out.push('>');
            out.push_str(&protect(text));
            out.push_str("</translation>\n");
        }
        Translation::Numerus(forms) => {
            out.push_str(">\n");
            for form in forms {
                write_element(out, 8, "numerusform", form);
            }
            out.push_str("      </translation>\n");
        }
    }
    out.push_str("    </message>\n");
}

fn write_element(out: &mut String, indent: usize, tag: &str, text: &str) {
    let _ = writeln!(out, "{:indent$}<{tag}>{}</{tag}>", "", protect(text));
}

/// Escape markup characters and encode control characters as `<byte>`.
fn protect(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut plain_start = 0;
    for (i, ch) in text.char_indices() {
        if ch.is_control() && !matches!(ch, '\n' | '\t' | '\r') {
            out.push_str(&escape(&text[plain_start..i]));
            let _ = write!(out, "<byte value=\"x{:x}\"/>", u32::from(ch));
            plain_start = i + ch.len_utf8();
        }
    }
    out.push_str(&escape(&text[plain_start..]));
    out
}

impl Catalog {
    /// Parse a `.ts` document. See [`parse_str`].
    pub fn from_ts_str(input: &str) -> Result<Self> {
        parse_str(input)
    }

    /// Read and parse a `.ts` file. See [`parse_file`].
    pub fn from_ts_file(path: impl AsRef<Path>) -> Result<Self> {
        parse_file(path)
    }

    /// Serialize back to the `.ts` dialect. See [`to_string`].
    #[must_use]
    pub fn to_ts_string(&self) -> String {
        to_string(self)
    }
}
