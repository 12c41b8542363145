// 🗂️ Dataset - The in-memory Dyen model
// Owns every meaning group, cognate group and word, plus the per-language index
//
// Invariant: every Word is listed in exactly one language bucket and in
// exactly one CognateGroup's member list. Both are appended together in
// `add_word`, the only way words enter the model.

use crate::entities::{CognateGroup, CognateRef, MeaningGroup, MeaningRef, Word, WordRef};
use crate::error::{DyenError, Result};
use crate::judgment::classify;
use crate::languages::LanguageCatalog;
use crate::parser::PendingRelation;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ============================================================================
// SUMMARY
// ============================================================================

/// Entity counts for reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetSummary {
    pub meaning_groups: usize,
    pub cognate_groups: usize,
    pub words: usize,
    pub languages: usize,
    /// Relation entries across all groups (each resolved line adds two)
    pub relation_entries: usize,
}

// ============================================================================
// DATASET
// ============================================================================

/// Handles returned by this type index into its own arenas; passing a
/// handle minted by a different Dataset is a logic error and panics.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    catalog: LanguageCatalog,
    meaning_groups: Vec<MeaningGroup>,
    cognate_groups: Vec<CognateGroup>,
    words: Vec<Word>,
    language_words: HashMap<String, Vec<WordRef>>,
}

impl Dataset {
    pub fn new(catalog: LanguageCatalog) -> Self {
        Dataset {
            catalog,
            meaning_groups: Vec::new(),
            cognate_groups: Vec::new(),
            words: Vec::new(),
            language_words: HashMap::new(),
        }
    }

    // ------------------------------------------------------------------------
    // Building
    // ------------------------------------------------------------------------

    pub(crate) fn add_meaning_group(&mut self, group_id: u32, sense: String) -> MeaningRef {
        let handle = MeaningRef(self.meaning_groups.len());
        self.meaning_groups.push(MeaningGroup::new(group_id, sense));
        handle
    }

    /// Create a cognate group under `meaning`; fails for CCN numbers >= 500
    pub(crate) fn add_cognate_group(&mut self, meaning: MeaningRef, declared_id: u32) -> Result<CognateRef> {
        let judgment = classify(declared_id)?;
        let handle = CognateRef(self.cognate_groups.len());
        self.cognate_groups.push(CognateGroup::new(declared_id, judgment, meaning));
        self.meaning_groups[meaning.0].add_cognate_group(declared_id, handle);
        Ok(handle)
    }

    pub(crate) fn add_word(&mut self, raw: &str, language: &str, cognate: CognateRef) -> WordRef {
        let meaning = self.cognate_groups[cognate.0].meaning;
        let handle = WordRef(self.words.len());
        self.words.push(Word::new(raw, language, meaning, cognate));
        self.cognate_groups[cognate.0].words.push(handle);
        self.language_words
            .entry(language.to_string())
            .or_default()
            .push(handle);
        handle
    }

    /// Wire deferred relation lines into symmetric `cog_with` entries.
    ///
    /// Stops at the first relation naming an undeclared CCN; relations
    /// wired before it stay in place. Repeated pairs are not deduplicated.
    /// Returns the number of relation lines resolved.
    pub fn resolve_relations(&mut self, relations: &[PendingRelation]) -> Result<usize> {
        for relation in relations {
            let meaning = &self.meaning_groups[relation.meaning.0];
            let lookup = |group_id: u32| {
                meaning
                    .cognate_group_by_id(group_id)
                    .ok_or_else(|| DyenError::DanglingReference {
                        group_id,
                        meaning_id: meaning.group_id,
                        meaning: meaning.sense.clone(),
                    })
            };
            let first = lookup(relation.group1)?;
            let second = lookup(relation.group2)?;

            if first == second {
                tracing::warn!(
                    meaning = %meaning.sense,
                    group = relation.group1,
                    "cognate group related to itself"
                );
            }

            self.cognate_groups[first.0].cog_with.push((second, relation.judgment));
            self.cognate_groups[second.0].cog_with.push((first, relation.judgment));
        }

        tracing::debug!(relations = relations.len(), "resolved cognate relations");
        Ok(relations.len())
    }

    // ------------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------------

    pub fn catalog(&self) -> &LanguageCatalog {
        &self.catalog
    }

    pub fn meaning_groups(&self) -> &[MeaningGroup] {
        &self.meaning_groups
    }

    /// All cognate groups in parse order
    pub fn cognate_groups(&self) -> &[CognateGroup] {
        &self.cognate_groups
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn meaning(&self, handle: MeaningRef) -> &MeaningGroup {
        &self.meaning_groups[handle.0]
    }

    pub fn cognate(&self, handle: CognateRef) -> &CognateGroup {
        &self.cognate_groups[handle.0]
    }

    pub fn word(&self, handle: WordRef) -> &Word {
        &self.words[handle.0]
    }

    pub fn meaning_refs(&self) -> impl Iterator<Item = MeaningRef> {
        (0..self.meaning_groups.len()).map(MeaningRef)
    }

    pub fn cognate_refs(&self) -> impl Iterator<Item = CognateRef> {
        (0..self.cognate_groups.len()).map(CognateRef)
    }

    /// First meaning group whose sense equals `sense`
    pub fn meaning_by_sense(&self, sense: &str) -> Option<MeaningRef> {
        self.meaning_groups
            .iter()
            .position(|m| m.sense == sense)
            .map(MeaningRef)
    }

    /// Cognate group declared as CCN `declared_id` under `meaning`
    pub fn cognate_by_declared_id(&self, meaning: MeaningRef, declared_id: u32) -> Option<CognateRef> {
        self.meaning(meaning).cognate_group_by_id(declared_id)
    }

    /// Words of one language in file order
    pub fn words_in_language(&self, language: &str) -> Vec<&Word> {
        self.language_words
            .get(language)
            .map(|handles| handles.iter().map(|h| &self.words[h.0]).collect())
            .unwrap_or_default()
    }

    /// Languages with at least one word, alphabetically
    pub fn languages_present(&self) -> Vec<&str> {
        let mut languages: Vec<&str> = self.language_words.keys().map(|l| l.as_str()).collect();
        languages.sort_unstable();
        languages
    }

    pub fn summary(&self) -> DatasetSummary {
        DatasetSummary {
            meaning_groups: self.meaning_groups.len(),
            cognate_groups: self.cognate_groups.len(),
            words: self.words.len(),
            languages: self.language_words.len(),
            relation_entries: self.cognate_groups.iter().map(|g| g.cog_with.len()).sum(),
        }
    }

    // ------------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------------

    /// Words in `language` whose normalized form equals `word`
    pub fn find_words(&self, word: &str, language: &str) -> Vec<&Word> {
        self.words_in_language(language)
            .into_iter()
            .filter(|w| w.word == word)
            .collect()
    }

    /// Rewrite the normalized form of every word in `language` in place.
    ///
    /// Original representations and links are untouched. Returns how many
    /// words actually changed.
    pub fn transform_words_in_language(&mut self, language: &str, pattern: &Regex, replacement: &str) -> usize {
        let Some(handles) = self.language_words.get(language) else {
            return 0;
        };

        let mut changed = 0;
        for handle in handles {
            let word = &mut self.words[handle.0];
            let rewritten = pattern.replace_all(&word.word, replacement).into_owned();
            if rewritten != word.word {
                word.word = rewritten;
                changed += 1;
            }
        }
        changed
    }

    /// The group's own words followed by the words of every group it has a
    /// confident or doubtful relation to. Direct relations only, no dedup.
    pub fn all_reflexes(&self, group: CognateRef) -> Vec<&Word> {
        let own = self.cognate(group);
        let related = own
            .cognate_relations()
            .flat_map(|other| self.cognate(other).words.iter());

        own.words
            .iter()
            .chain(related)
            .map(|h| &self.words[h.0])
            .collect()
    }

    /// `all_reflexes` restricted to `languages`
    pub fn all_members_in_languages(&self, group: CognateRef, languages: &[&str]) -> Vec<&Word> {
        self.all_reflexes(group)
            .into_iter()
            .filter(|w| languages.contains(&w.language()))
            .collect()
    }

    /// Same cognate group, or `other`'s group confidently related to `word`'s
    pub fn cog_with(&self, word: WordRef, other: WordRef) -> bool {
        let mine = self.word(word).cognate();
        let theirs = self.word(other).cognate();
        mine == theirs || self.cognate(mine).is_confidently_related(theirs)
    }

    /// "word (LANGUAGE 'sense')"
    pub fn describe_word(&self, handle: WordRef) -> String {
        let word = self.word(handle);
        format!(
            "{} ({} '{}')",
            word.word(),
            word.language(),
            self.meaning(word.meaning()).sense
        )
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::judgment::CognateJudgment;

    /// meaning "hand" with CCN 2 (ENGLISH hand, GERMAN Hand) and CCN 3 (FRENCH main)
    fn sample() -> (Dataset, CognateRef, CognateRef) {
        let mut ds = Dataset::new(LanguageCatalog::dyen());
        let hand = ds.add_meaning_group(0, "hand".to_string());
        let g2 = ds.add_cognate_group(hand, 2).unwrap();
        ds.add_word("hand", "NEW ENGLISH", g2);
        ds.add_word("Hand", "GERMAN", g2);
        let g3 = ds.add_cognate_group(hand, 3).unwrap();
        ds.add_word("main", "FRENCH", g3);
        (ds, g2, g3)
    }

    fn relation(ds: &Dataset, g1: u32, judgment: CognateJudgment, g2: u32) -> PendingRelation {
        PendingRelation {
            meaning: ds.meaning_refs().next().unwrap(),
            group1: g1,
            judgment,
            group2: g2,
        }
    }

    #[test]
    fn test_every_word_in_one_bucket_and_one_group() {
        let (ds, _, _) = sample();
        for (idx, word) in ds.words().iter().enumerate() {
            let handle = WordRef(idx);
            let in_groups = ds
                .cognate_groups()
                .iter()
                .filter(|g| g.words().contains(&handle))
                .count();
            assert_eq!(in_groups, 1);
            assert_eq!(ds.language_words[word.language()].iter().filter(|h| **h == handle).count(), 1);
        }
    }

    #[test]
    fn test_resolve_is_symmetric() {
        let (mut ds, g2, g3) = sample();
        let rel = relation(&ds, 2, CognateJudgment::COG_DOUBTFUL, 3);
        assert_eq!(ds.resolve_relations(&[rel]).unwrap(), 1);

        assert_eq!(ds.cognate(g2).cog_with(), &[(g3, CognateJudgment::COG_DOUBTFUL)]);
        assert_eq!(ds.cognate(g3).cog_with(), &[(g2, CognateJudgment::COG_DOUBTFUL)]);
    }

    #[test]
    fn test_resolve_duplicate_pair_yields_two_entries() {
        let (mut ds, g2, g3) = sample();
        let rel = relation(&ds, 2, CognateJudgment::COG_CONFIDENT, 3);
        ds.resolve_relations(&[rel.clone(), rel]).unwrap();

        assert_eq!(ds.cognate(g2).cog_with().len(), 2);
        assert_eq!(ds.cognate(g3).cog_with().len(), 2);
        // Reflexes are counted once per relation entry
        assert_eq!(ds.all_reflexes(g2).len(), 2 + 1 + 1);
    }

    #[test]
    fn test_dangling_reference_keeps_earlier_wiring() {
        let (mut ds, g2, _) = sample();
        let good = relation(&ds, 2, CognateJudgment::COG_CONFIDENT, 3);
        let bad = relation(&ds, 2, CognateJudgment::COG_CONFIDENT, 42);

        match ds.resolve_relations(&[good, bad]) {
            Err(DyenError::DanglingReference { group_id, meaning, .. }) => {
                assert_eq!(group_id, 42);
                assert_eq!(meaning, "hand");
            }
            other => panic!("expected dangling reference, got {:?}", other),
        }
        // First relation stays wired, the failed one left no half entry
        assert_eq!(ds.cognate(g2).cog_with().len(), 1);
    }

    #[test]
    fn test_all_reflexes_without_relations_is_own_words() {
        let (ds, g2, _) = sample();
        let reflexes: Vec<&str> = ds.all_reflexes(g2).iter().map(|w| w.word()).collect();
        assert_eq!(reflexes, vec!["hand", "Hand"]);
    }

    #[test]
    fn test_all_reflexes_ignores_non_cognate_relations() {
        let (mut ds, g2, _) = sample();
        let rel = relation(&ds, 2, CognateJudgment::NOT_EXCLUSIVE, 3);
        ds.resolve_relations(&[rel]).unwrap();
        assert_eq!(ds.all_reflexes(g2).len(), 2);

        let rel = relation(&ds, 2, CognateJudgment::COG_DOUBTFUL, 3);
        ds.resolve_relations(&[rel]).unwrap();
        let reflexes: Vec<&str> = ds.all_reflexes(g2).iter().map(|w| w.word()).collect();
        assert_eq!(reflexes, vec!["hand", "Hand", "main"]);
    }

    #[test]
    fn test_all_members_in_languages() {
        let (mut ds, g2, _) = sample();
        let rel = relation(&ds, 2, CognateJudgment::COG_CONFIDENT, 3);
        ds.resolve_relations(&[rel]).unwrap();

        let members = ds.all_members_in_languages(g2, &["FRENCH", "GERMAN"]);
        let forms: Vec<&str> = members.iter().map(|w| w.word()).collect();
        assert_eq!(forms, vec!["Hand", "main"]);
        assert!(ds.all_members_in_languages(g2, &[]).is_empty());
    }

    #[test]
    fn test_cog_with_confident_only() {
        let (mut ds, _, _) = sample();
        let english = WordRef(0);
        let german = WordRef(1);
        let french = WordRef(2);

        assert!(ds.cog_with(english, german), "same group");
        assert!(!ds.cog_with(english, french));

        let doubtful = relation(&ds, 2, CognateJudgment::COG_DOUBTFUL, 3);
        ds.resolve_relations(&[doubtful]).unwrap();
        assert!(!ds.cog_with(english, french), "doubtful is not enough");

        let confident = relation(&ds, 2, CognateJudgment::COG_CONFIDENT, 3);
        ds.resolve_relations(&[confident]).unwrap();
        assert!(ds.cog_with(english, french));
        assert!(ds.cog_with(french, english));
    }

    #[test]
    fn test_find_words() {
        let (ds, _, _) = sample();
        assert_eq!(ds.find_words("Hand", "GERMAN").len(), 1);
        assert!(ds.find_words("hand", "GERMAN").is_empty());
        assert!(ds.find_words("hand", "KLINGON").is_empty());
    }

    #[test]
    fn test_transform_words_in_language() {
        let (mut ds, _, _) = sample();
        let pattern = Regex::new("^H").unwrap();

        assert_eq!(ds.transform_words_in_language("GERMAN", &pattern, "h"), 1);
        let german = ds.words_in_language("GERMAN");
        assert_eq!(german[0].word(), "hand");
        assert_eq!(german[0].original_rep(), "Hand");

        // Other languages untouched
        assert_eq!(ds.words_in_language("NEW ENGLISH")[0].word(), "hand");
        assert_eq!(ds.transform_words_in_language("KLINGON", &pattern, "h"), 0);
        assert_eq!(ds.find_words("hand", "GERMAN").len(), 1);
    }

    #[test]
    fn test_describe_word_and_summary() {
        let (ds, _, _) = sample();
        assert_eq!(ds.describe_word(WordRef(2)), "main (FRENCH 'hand')");

        let summary = ds.summary();
        assert_eq!(summary.meaning_groups, 1);
        assert_eq!(summary.cognate_groups, 2);
        assert_eq!(summary.words, 3);
        assert_eq!(summary.languages, 3);
        assert_eq!(summary.relation_entries, 0);
        assert_eq!(ds.languages_present(), vec!["FRENCH", "GERMAN", "NEW ENGLISH"]);
    }

    #[test]
    fn test_add_cognate_group_rejects_unclassifiable() {
        let mut ds = Dataset::new(LanguageCatalog::dyen());
        let m = ds.add_meaning_group(0, "all".to_string());
        assert!(matches!(
            ds.add_cognate_group(m, 500),
            Err(DyenError::Classification { group_id: 500 })
        ));
        assert!(ds.meaning(m).cognate_groups().is_empty());
    }
}
