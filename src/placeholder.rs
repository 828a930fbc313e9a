//! Placeholder tokens for fragments lifted out of the line stream.
//!
//! Code blocks and tables are extracted before any rewriting pass runs and
//! are parked here. Each one leaves a single token line behind; the token is
//! framed by private-use sentinels, which [`strip_sentinels`] removes from
//! the source beforehand, so the document itself can never spell a token.

use std::borrow::Cow;
use std::fmt;

use crate::block::table;
use crate::{HtmlWriter, Options};

const OPEN: char = '\u{E000}';
const CLOSE: char = '\u{E001}';

const CODE_BLOCK: &str = "CODE_BLOCK_";
const TABLE: &str = "TABLE_";

/// A token standing in for an extracted fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    /// Index into the stored code blocks.
    Code(usize),
    /// Index into the stored raw tables.
    Table(usize),
}

impl Placeholder {
    /// Recognize a token occupying a whole line.
    pub fn parse(line: &str) -> Option<Self> {
        let inner = line.strip_prefix(OPEN)?.strip_suffix(CLOSE)?;
        if let Some(index) = inner.strip_prefix(CODE_BLOCK) {
            return index.parse().ok().map(Placeholder::Code);
        }
        if let Some(index) = inner.strip_prefix(TABLE) {
            return index.parse().ok().map(Placeholder::Table);
        }
        None
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Placeholder::Code(index) => write!(f, "{OPEN}{CODE_BLOCK}{index}{CLOSE}"),
            Placeholder::Table(index) => write!(f, "{OPEN}{TABLE}{index}{CLOSE}"),
        }
    }
}

/// Remove the token sentinels from source text.
pub fn strip_sentinels(input: &str) -> Cow<'_, str> {
    if input.contains([OPEN, CLOSE]) {
        Cow::Owned(input.replace([OPEN, CLOSE], ""))
    } else {
        Cow::Borrowed(input)
    }
}

/// A fenced code block as found in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlock {
    /// Language tag, `text` when the fence carried none.
    pub lang: String,
    /// Lines between the fences, joined with `\n`, untouched.
    pub body: String,
}

/// Ordered storage for extracted fragments, indexed by their tokens.
#[derive(Debug, Default)]
pub struct PlaceholderStore {
    code_blocks: Vec<CodeBlock>,
    tables: Vec<String>,
}

impl PlaceholderStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Park a code block and return its token.
    pub fn push_code(&mut self, block: CodeBlock) -> Placeholder {
        self.code_blocks.push(block);
        Placeholder::Code(self.code_blocks.len() - 1)
    }

    /// Park a raw table block and return its token.
    pub fn push_table(&mut self, raw: String) -> Placeholder {
        self.tables.push(raw);
        Placeholder::Table(self.tables.len() - 1)
    }

    pub fn code_block(&self, index: usize) -> Option<&CodeBlock> {
        self.code_blocks.get(index)
    }

    pub fn table(&self, index: usize) -> Option<&str> {
        self.tables.get(index).map(String::as_str)
    }

    pub fn code_block_count(&self) -> usize {
        self.code_blocks.len()
    }

    pub fn table_count(&self) -> usize {
        self.tables.len()
    }

    /// Replace every token line with its rendered fragment.
    ///
    /// Code blocks become `<pre><code>`; raw tables go through
    /// [`table::render`]. Lines that are not tokens pass through.
    pub fn restore(&self, input: &str, options: &Options) -> String {
        let mut writer = HtmlWriter::with_capacity_for(input.len());
        for line in input.split('\n') {
            match Placeholder::parse(line) {
                Some(Placeholder::Code(index)) => match self.code_block(index) {
                    Some(block) => {
                        writer.code_block(&block.lang, &block.body, options.escape_html);
                        writer.newline();
                    }
                    None => writer.line(line),
                },
                Some(Placeholder::Table(index)) => match self.table(index) {
                    Some(raw) => writer.line(&table::render(raw)),
                    None => writer.line(line),
                },
                None => writer.line(line),
            }
        }
        writer.finish_lines()
    }
}
