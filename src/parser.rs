// 🏗️ Dyen List Parser
// Line-oriented scanner: meaning group → cognate group → language rows
//
// Two passes. The scan builds the model and collects relation lines
// ("c" lines) without resolving them, because a relation may name a CCN
// declared further down. `Dataset::resolve_relations` wires them once the
// whole file has been seen.

use crate::config::DyenConfig;
use crate::dataset::Dataset;
use crate::entities::{CognateRef, MeaningRef};
use crate::error::{DyenError, Result};
use crate::judgment::CognateJudgment;
use crate::languages::LanguageCatalog;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

// ============================================================================
// CORE TYPES
// ============================================================================

/// Shape of a data-section line, decided by its first characters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// `a <id> <sense...>`
    MeaningHeader,
    /// `b ... <CCN in last 3 chars>`
    CognateHeader,
    /// `c [ignored] <group1> <code> <group2>`
    Relation,
    /// two-space indent, `<ignored> <ignored> <LANGUAGE> <forms...>`
    LanguageRow,
    /// blank or anything else
    Other,
}

impl LineKind {
    pub fn of(line: &str) -> Self {
        if line.starts_with("  ") {
            return LineKind::LanguageRow;
        }
        match line.chars().next() {
            Some('a') => LineKind::MeaningHeader,
            Some('b') => LineKind::CognateHeader,
            Some('c') => LineKind::Relation,
            _ => LineKind::Other,
        }
    }
}

/// A relation line waiting for the resolution pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRelation {
    /// Meaning group that was current when the line was scanned
    pub meaning: MeaningRef,
    /// File-local CCN numbers
    pub group1: u32,
    pub judgment: CognateJudgment,
    pub group2: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    SeekingDataSection,
    /// Marker seen, discarding separator lines
    SkippingSeparator { remaining: usize },
    InDataSection,
}

// ============================================================================
// SCAN SESSION
// ============================================================================

/// Mutable state of one scan. Nothing is global, so sessions are
/// independent and can be driven line by line.
#[derive(Debug)]
pub struct ScanSession<'p> {
    parser: &'p DyenParser,
    state: ScanState,
    dataset: Dataset,
    current_meaning: Option<MeaningRef>,
    current_cognate: Option<CognateRef>,
    pending: Vec<PendingRelation>,
}

impl<'p> ScanSession<'p> {
    fn new(parser: &'p DyenParser) -> Self {
        ScanSession {
            parser,
            state: ScanState::SeekingDataSection,
            dataset: Dataset::new(parser.catalog.clone()),
            current_meaning: None,
            current_cognate: None,
            pending: Vec::new(),
        }
    }

    pub fn state(&self) -> ScanState {
        self.state
    }

    pub fn current_meaning(&self) -> Option<MeaningRef> {
        self.current_meaning
    }

    pub fn current_cognate(&self) -> Option<CognateRef> {
        self.current_cognate
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn pending(&self) -> &[PendingRelation] {
        &self.pending
    }

    /// Consume one line (line ending already removed); `line_no` is 1-based
    pub fn feed_line(&mut self, line_no: usize, line: &str) -> Result<()> {
        let line = line.strip_suffix('\r').unwrap_or(line);

        match self.state {
            ScanState::SeekingDataSection => {
                if line == self.parser.data_marker {
                    tracing::debug!(line = line_no, "data section marker found");
                    self.state = match self.parser.skip_after_marker {
                        0 => ScanState::InDataSection,
                        remaining => ScanState::SkippingSeparator { remaining },
                    };
                }
                Ok(())
            }
            ScanState::SkippingSeparator { remaining } => {
                self.state = if remaining > 1 {
                    ScanState::SkippingSeparator { remaining: remaining - 1 }
                } else {
                    ScanState::InDataSection
                };
                Ok(())
            }
            ScanState::InDataSection => self.scan_data_line(line_no, line),
        }
    }

    /// Stop scanning; relations are returned unresolved
    pub fn finish(self) -> Result<(Dataset, Vec<PendingRelation>)> {
        if self.state == ScanState::SeekingDataSection {
            return Err(DyenError::MissingDataSection {
                marker: self.parser.data_marker.clone(),
            });
        }
        Ok((self.dataset, self.pending))
    }

    fn scan_data_line(&mut self, line_no: usize, line: &str) -> Result<()> {
        match LineKind::of(line) {
            LineKind::MeaningHeader => self.scan_meaning_header(line_no, line),
            LineKind::CognateHeader => self.scan_cognate_header(line_no, line),
            LineKind::Relation => self.scan_relation(line_no, line),
            LineKind::LanguageRow => self.scan_language_row(line_no, line),
            LineKind::Other => {
                tracing::trace!(line = line_no, "ignoring line");
                Ok(())
            }
        }
    }

    fn scan_meaning_header(&mut self, line_no: usize, line: &str) -> Result<()> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let declared = tokens
            .get(1)
            .and_then(|t| t.parse::<u32>().ok())
            .ok_or_else(|| malformed(line_no, "meaning header without a numeric id"))?;
        let group_id = declared
            .checked_sub(1)
            .ok_or_else(|| malformed(line_no, "meaning ids start at 1"))?;
        let sense = tokens[2..].join(" ");

        tracing::debug!(meaning = group_id, sense = %sense, "meaning group");

        self.current_meaning = Some(self.dataset.add_meaning_group(group_id, sense));
        // Rows under a new meaning must follow one of its own cognate headers
        self.current_cognate = None;
        Ok(())
    }

    fn scan_cognate_header(&mut self, line_no: usize, line: &str) -> Result<()> {
        let meaning = self.current_meaning.ok_or(DyenError::OrphanLine {
            line: line_no,
            needs: "meaning group",
        })?;

        let trimmed = line.trim_end();
        let tail = trimmed
            .char_indices()
            .rev()
            .nth(2)
            .map(|(idx, _)| &trimmed[idx..])
            .ok_or_else(|| malformed(line_no, "cognate header shorter than its 3-digit id"))?;
        let declared_id = tail
            .trim()
            .parse::<u32>()
            .map_err(|_| malformed(line_no, &format!("cognate id {:?} is not a number", tail)))?;

        self.current_cognate = Some(self.dataset.add_cognate_group(meaning, declared_id)?);
        Ok(())
    }

    fn scan_relation(&mut self, line_no: usize, line: &str) -> Result<()> {
        let meaning = self.current_meaning.ok_or(DyenError::OrphanLine {
            line: line_no,
            needs: "meaning group",
        })?;

        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() < 4 {
            return Err(malformed(line_no, "relation needs <group1> <code> <group2>"));
        }
        // Last three tokens; accepts both "c g1 code g2" and "c x g1 code g2"
        let fields = &tokens[tokens.len() - 3..];
        let number = |token: &str| {
            token
                .parse::<u32>()
                .map_err(|_| malformed(line_no, &format!("{:?} is not a number", token)))
        };
        let group1 = number(fields[0])?;
        let code = number(fields[1])?;
        let group2 = number(fields[2])?;
        let judgment = CognateJudgment::from_code(code)
            .ok_or(DyenError::InvalidJudgmentCode { line: line_no, code })?;

        self.pending.push(PendingRelation {
            meaning,
            group1,
            judgment,
            group2,
        });
        Ok(())
    }

    fn scan_language_row(&mut self, line_no: usize, line: &str) -> Result<()> {
        let cognate = self.current_cognate.ok_or(DyenError::OrphanLine {
            line: line_no,
            needs: "cognate group",
        })?;

        // Drop the indent and the two leading positional fields
        let text = line[2..].split_whitespace().skip(2).collect::<Vec<_>>().join(" ");

        let (language, word_text) = match self.parser.catalog.match_language(&text) {
            Some(m) => (m.language.to_string(), m.word_text),
            None => return Err(DyenError::LanguageMatch { line: line_no, text }),
        };

        if !word_text.is_empty() {
            for piece in word_text.split(',') {
                self.dataset.add_word(piece, &language, cognate);
            }
        }
        Ok(())
    }
}

fn malformed(line: usize, reason: &str) -> DyenError {
    DyenError::MalformedLine {
        line,
        reason: reason.to_string(),
    }
}

// ============================================================================
// PARSER
// ============================================================================

/// Reads Dyen-format lists into a [`Dataset`]
#[derive(Debug, Clone)]
pub struct DyenParser {
    catalog: LanguageCatalog,
    data_marker: String,
    skip_after_marker: usize,
}

impl DyenParser {
    /// Built-in catalog and default layout
    pub fn new() -> Self {
        DyenParser::with_catalog(LanguageCatalog::dyen())
    }

    pub fn with_catalog(catalog: LanguageCatalog) -> Self {
        let config = DyenConfig::default();
        DyenParser {
            catalog,
            data_marker: config.data_marker,
            skip_after_marker: config.skip_after_marker,
        }
    }

    /// Layout and catalog from configuration (may read the catalog file)
    pub fn from_config(config: &DyenConfig) -> anyhow::Result<Self> {
        Ok(DyenParser {
            catalog: config.load_catalog()?,
            data_marker: config.data_marker.clone(),
            skip_after_marker: config.skip_after_marker,
        })
    }

    pub fn catalog(&self) -> &LanguageCatalog {
        &self.catalog
    }

    /// Start a line-by-line scan
    pub fn session(&self) -> ScanSession<'_> {
        ScanSession::new(self)
    }

    /// Open `file_path` and parse it; the file is closed on every exit path
    pub fn read_file(&self, file_path: &Path) -> Result<Dataset> {
        tracing::info!(path = %file_path.display(), "reading Dyen list");
        let file = File::open(file_path)?;
        self.read_from(BufReader::new(file))
    }

    pub fn parse_str(&self, text: &str) -> Result<Dataset> {
        self.read_from(text.as_bytes())
    }

    /// Scan, then resolve relations
    pub fn read_from<R: BufRead>(&self, reader: R) -> Result<Dataset> {
        let (mut dataset, pending) = self.scan(reader)?;
        dataset.resolve_relations(&pending)?;

        let summary = dataset.summary();
        tracing::info!(
            meaning_groups = summary.meaning_groups,
            cognate_groups = summary.cognate_groups,
            words = summary.words,
            relations = pending.len(),
            "Dyen list loaded"
        );
        Ok(dataset)
    }

    /// First pass only: the model plus its unresolved relation lines
    pub fn scan<R: BufRead>(&self, reader: R) -> Result<(Dataset, Vec<PendingRelation>)> {
        let mut session = self.session();
        for (idx, line) in reader.lines().enumerate() {
            session.feed_line(idx + 1, &line?)?;
        }
        session.finish()
    }
}

impl Default for DyenParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse the Dyen list at `file_path` with the built-in catalog
pub fn read_from_dyen_form<P: AsRef<Path>>(file_path: P) -> Result<Dataset> {
    DyenParser::new().read_file(file_path.as_ref())
}

// ============================================================================
// TESTS
// ============================================================================
