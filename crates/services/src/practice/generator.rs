use std::sync::Arc;

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, warn};

use kanji_core::model::{
    Difficulty, KanjiDataset, KanjiEntry, PracticeSettings, Question, QuestionKind,
};
use kanji_core::reading::compound_word;

use crate::error::PracticeError;

//
// ─── CONFIG ────────────────────────────────────────────────────────────────────
//

/// Tuning knobs for question generation.
///
/// Distractors are sampled with replacement, so the loop is capped at
/// `max(min_attempts, dataset_len * attempts_per_entry)` draws per question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub option_count: usize,
    pub attempts_per_entry: usize,
    pub min_attempts: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            option_count: 4,
            attempts_per_entry: 8,
            min_attempts: 32,
        }
    }
}

impl GeneratorConfig {
    /// Maximum number of distractor draws for one question.
    #[must_use]
    pub fn attempt_budget(&self, dataset_len: usize) -> usize {
        dataset_len
            .saturating_mul(self.attempts_per_entry)
            .max(self.min_attempts)
    }
}

/// Counters describing what happened to each entry of the slice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationStats {
    /// Entries in the requested slice.
    pub considered: usize,
    /// Entries whose randomly chosen type had no data to ask about.
    pub skipped_unmet: usize,
    /// Questions dropped because too few distinct options were found.
    pub dropped_underfilled: usize,
}

impl GenerationStats {
    #[must_use]
    pub fn produced(&self) -> usize {
        self.considered
            .saturating_sub(self.skipped_unmet)
            .saturating_sub(self.dropped_underfilled)
    }
}

//
// ─── GENERATOR ─────────────────────────────────────────────────────────────────
//

struct QuestionDraft<'a> {
    display: &'a str,
    answer: &'a str,
}

/// Builds a shuffled multiple-choice quiz from a slice of the dataset.
///
/// One question type is picked per entry. Entries that cannot support the picked
/// type are skipped, and questions that end up with fewer than
/// `GeneratorConfig::option_count` options are dropped, so the quiz can be shorter
/// than the slice.
#[derive(Debug, Clone)]
pub struct QuestionGenerator {
    dataset: Arc<KanjiDataset>,
    config: GeneratorConfig,
}

impl QuestionGenerator {
    #[must_use]
    pub fn new(dataset: Arc<KanjiDataset>) -> Self {
        Self {
            dataset,
            config: GeneratorConfig::default(),
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: GeneratorConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate the quiz for `settings`.
    ///
    /// # Errors
    ///
    /// Returns `PracticeError::EmptyRange` if the range selects nothing and
    /// `PracticeError::RangeOutOfBounds` if it ends past the dataset.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        settings: &PracticeSettings,
        rng: &mut R,
    ) -> Result<Vec<Question>, PracticeError> {
        self.generate_with_stats(settings, rng)
            .map(|(questions, _)| questions)
    }

    /// Same as [`QuestionGenerator::generate`], also reporting skipped and dropped entries.
    ///
    /// # Errors
    ///
    /// See [`QuestionGenerator::generate`].
    pub fn generate_with_stats<R: Rng + ?Sized>(
        &self,
        settings: &PracticeSettings,
        rng: &mut R,
    ) -> Result<(Vec<Question>, GenerationStats), PracticeError> {
        let range = settings.range;
        if range.is_empty() {
            return Err(PracticeError::EmptyRange {
                start: range.start,
                end: range.end,
            });
        }
        let slice = self
            .dataset
            .slice(range.as_range())
            .ok_or(PracticeError::RangeOutOfBounds {
                end: range.end,
                len: self.dataset.len(),
            })?;

        let mut stats = GenerationStats::default();
        let mut questions = Vec::with_capacity(slice.len());

        for (offset, entry) in slice.iter().enumerate() {
            let index = range.start + offset;
            stats.considered += 1;

            let kind = choose_kind(entry, settings.difficulty, rng);
            let Some(draft) = draft_for(entry, kind) else {
                debug!(kanji = %entry.character, %kind, "entry cannot support question type");
                stats.skipped_unmet += 1;
                continue;
            };

            let mut options = self.collect_options(index, draft.answer, kind, rng);
            if options.len() < self.config.option_count {
                debug!(
                    kanji = %entry.character,
                    %kind,
                    options = options.len(),
                    "dropping underfilled question"
                );
                stats.dropped_underfilled += 1;
                continue;
            }
            options.shuffle(rng);

            match Question::new(kind, draft.display, draft.answer, options) {
                Ok(question) => questions.push(question),
                Err(err) => {
                    warn!(kanji = %entry.character, %kind, %err, "skipping malformed question");
                    stats.skipped_unmet += 1;
                }
            }
        }

        questions.shuffle(rng);
        Ok((questions, stats))
    }

    /// Correct answer first, then distinct distractors drawn from the whole dataset.
    fn collect_options<R: Rng + ?Sized>(
        &self,
        own_index: usize,
        answer: &str,
        kind: QuestionKind,
        rng: &mut R,
    ) -> Vec<String> {
        let entries = self.dataset.entries();
        let budget = self.config.attempt_budget(entries.len());
        let mut options = Vec::with_capacity(self.config.option_count);
        options.push(answer.to_string());

        let mut attempts = 0;
        while options.len() < self.config.option_count && attempts < budget {
            attempts += 1;
            let pick = rng.random_range(0..entries.len());
            if pick == own_index {
                continue;
            }
            let Some(candidate) = distractor_for(&entries[pick], kind) else {
                continue;
            };
            if options.iter().any(|existing| existing == candidate) {
                continue;
            }
            options.push(candidate.to_string());
        }

        options
    }
}

fn choose_kind<R: Rng + ?Sized>(
    entry: &KanjiEntry,
    difficulty: Difficulty,
    rng: &mut R,
) -> QuestionKind {
    let basic = QuestionKind::BASIC.len();
    let with_compounds = difficulty.allows_compounds() && entry.examples.len() > 1;
    let pool = if with_compounds {
        basic + QuestionKind::COMPOUND.len()
    } else {
        basic
    };

    let pick = rng.random_range(0..pool);
    if pick < basic {
        QuestionKind::BASIC[pick]
    } else {
        QuestionKind::COMPOUND[pick - basic]
    }
}

fn draft_for(entry: &KanjiEntry, kind: QuestionKind) -> Option<QuestionDraft<'_>> {
    let display = entry.character.as_str();

    match kind {
        QuestionKind::KunReading => entry.first_kunyomi().map(|answer| QuestionDraft { display, answer }),
        QuestionKind::OnReading => entry.first_onyomi().map(|answer| QuestionDraft { display, answer }),
        QuestionKind::EnglishMeaning => entry
            .first_example()
            .and_then(|ex| non_blank(ex.english_gloss.trim()))
            .map(|answer| QuestionDraft { display, answer }),
        QuestionKind::CompoundReading => {
            let example = entry.compound_example()?;
            let answer = example.reading()?;
            Some(QuestionDraft {
                display: compound_word(&example.term),
                answer,
            })
        }
        QuestionKind::CompoundMeaning => {
            let example = entry.compound_example()?;
            let answer = non_blank(example.english_gloss.trim())?;
            Some(QuestionDraft {
                display: compound_word(&example.term),
                answer,
            })
        }
    }
}

fn non_blank(value: &str) -> Option<&str> {
    Some(value).filter(|v| !v.is_empty())
}

/// The value another entry contributes as a wrong option for `kind`.
fn distractor_for(entry: &KanjiEntry, kind: QuestionKind) -> Option<&str> {
    let value = match kind {
        QuestionKind::KunReading => entry.first_kunyomi(),
        QuestionKind::OnReading => entry.first_onyomi(),
        QuestionKind::EnglishMeaning => entry.first_example().map(|ex| ex.english_gloss.trim()),
        QuestionKind::CompoundReading => entry.second_example().and_then(|ex| ex.reading()),
        QuestionKind::CompoundMeaning => entry.second_example().map(|ex| ex.english_gloss.trim()),
    };
    value.filter(|v| !v.is_empty())
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use kanji_core::model::{KanjiRange, VocabExample};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    const KANJI: [(&str, &str, &str, &str, &str); 10] = [
        ("日", "ひ", "ニチ", "にちようび", "Sunday"),
        ("月", "つき", "ゲツ", "げつようび", "Monday"),
        ("火", "ほ", "カ", "かようび", "Tuesday"),
        ("水", "みず", "スイ", "すいようび", "Wednesday"),
        ("木", "き", "モク", "もくようび", "Thursday"),
        ("金", "かね", "キン", "きんようび", "Friday"),
        ("土", "つち", "ド", "どようび", "Saturday"),
        ("山", "やま", "サン", "ふじさん", "Mt. Fuji"),
        ("川", "かわ", "セン", "おがわ", "stream"),
        ("人", "ひと", "ジン", "にほんじん", "Japanese person"),
    ];

    fn full_dataset() -> Arc<KanjiDataset> {
        let entries = KANJI
            .iter()
            .map(|&(kanji, kun, on, compound_reading, compound_gloss)| {
                KanjiEntry::new(
                    kanji,
                    Some(format!("{kun}, x").as_str()),
                    Some(on),
                    vec![
                        VocabExample::new(kanji, format!("{kanji} meaning"), ""),
                        VocabExample::new(
                            format!("{kanji}語({compound_reading})"),
                            compound_gloss,
                            "",
                        ),
                    ],
                )
            })
            .collect();
        Arc::new(KanjiDataset::new(entries).unwrap())
    }

    fn settings(difficulty: Difficulty, start: usize, end: usize) -> PracticeSettings {
        PracticeSettings::new(difficulty, KanjiRange::new(start, end))
    }

    fn assert_well_formed(questions: &[Question]) {
        for q in questions {
            assert_eq!(q.options().len(), 4, "{q:?}");
            assert!(q.options().iter().any(|o| o == q.correct_answer()), "{q:?}");
            let unique: HashSet<_> = q.options().iter().collect();
            assert_eq!(unique.len(), q.options().len(), "{q:?}");
        }
    }

    #[test]
    fn every_difficulty_yields_well_formed_questions() {
        let generator = QuestionGenerator::new(full_dataset());
        for difficulty in Difficulty::ALL {
            for seed in 0..20 {
                let mut rng = StdRng::seed_from_u64(seed);
                let questions = generator
                    .generate(&settings(difficulty, 0, 10), &mut rng)
                    .unwrap();
                assert_well_formed(&questions);
                assert!(questions.len() <= 10);
            }
        }
    }

    #[test]
    fn satisfiable_entries_always_produce_a_question() {
        let generator = QuestionGenerator::new(full_dataset());
        let mut rng = StdRng::seed_from_u64(11);
        let (questions, stats) = generator
            .generate_with_stats(&settings(Difficulty::Hard, 2, 8), &mut rng)
            .unwrap();

        assert_eq!(stats.considered, 6);
        assert_eq!(stats.skipped_unmet, 0);
        assert_eq!(stats.dropped_underfilled, 0);
        assert_eq!(questions.len(), 6);
        assert_eq!(stats.produced(), 6);
    }

    #[test]
    fn easy_never_asks_compound_questions() {
        let generator = QuestionGenerator::new(full_dataset());
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let questions = generator
                .generate(&settings(Difficulty::Easy, 0, 10), &mut rng)
                .unwrap();
            assert!(questions.iter().all(|q| !q.kind().is_compound()));
        }
    }

    #[test]
    fn medium_eventually_asks_compound_questions() {
        let generator = QuestionGenerator::new(full_dataset());
        let mut rng = StdRng::seed_from_u64(3);
        let mut seen_compound = false;
        for _ in 0..20 {
            let questions = generator
                .generate(&settings(Difficulty::Medium, 0, 10), &mut rng)
                .unwrap();
            seen_compound |= questions.iter().any(|q| q.kind().is_compound());
        }
        assert!(seen_compound);
    }

    #[test]
    fn compound_questions_show_the_word_and_ask_for_its_reading() {
        let generator = QuestionGenerator::new(full_dataset());
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..30 {
            let questions = generator
                .generate(&settings(Difficulty::Hard, 0, 10), &mut rng)
                .unwrap();
            for q in questions
                .iter()
                .filter(|q| q.kind() == QuestionKind::CompoundReading)
            {
                assert!(!q.display_text().contains('('), "{q:?}");
                assert_eq!(q.prompt_text(), "What is the reading?");
            }
        }
    }

    #[test]
    fn identical_readings_cannot_fill_options() {
        let entries = (0..5)
            .map(|i| {
                KanjiEntry::new(
                    format!("字{i}"),
                    Some("あ,い"),
                    Some("か,き"),
                    vec![
                        VocabExample::new(format!("字{i}(じ)"), format!("gloss {i}"), ""),
                        VocabExample::new(format!("字{i}語(じご)"), format!("word {i}"), ""),
                    ],
                )
            })
            .collect();
        let generator = QuestionGenerator::new(Arc::new(KanjiDataset::new(entries).unwrap()));

        for seed in 0..30 {
            let mut rng = StdRng::seed_from_u64(seed);
            let questions = generator
                .generate(&settings(Difficulty::Easy, 0, 5), &mut rng)
                .unwrap();
            assert!(questions.len() <= 5);
            assert!(questions.iter().all(|q| q.kind() == QuestionKind::EnglishMeaning));
            assert_well_formed(&questions);
        }
    }

    #[test]
    fn entries_missing_data_for_the_chosen_type_are_skipped() {
        let entries = KANJI[..8]
            .iter()
            .map(|&(kanji, _, on, _, compound_gloss)| {
                KanjiEntry::new(
                    kanji,
                    None,
                    Some(on),
                    vec![
                        VocabExample::new(kanji, format!("{kanji} meaning"), ""),
                        VocabExample::new(format!("{kanji}語"), compound_gloss, ""),
                    ],
                )
            })
            .collect();
        let generator = QuestionGenerator::new(Arc::new(KanjiDataset::new(entries).unwrap()));

        let mut skipped = 0;
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let (questions, stats) = generator
                .generate_with_stats(&settings(Difficulty::Hard, 0, 8), &mut rng)
                .unwrap();

            assert_well_formed(&questions);
            assert!(questions.iter().all(|q| {
                !matches!(q.kind(), QuestionKind::KunReading | QuestionKind::CompoundReading)
            }));
            assert_eq!(stats.dropped_underfilled, 0);
            assert_eq!(questions.len() + stats.skipped_unmet, stats.considered);
            skipped += stats.skipped_unmet;
        }
        assert!(skipped > 0);
    }

    #[test]
    fn empty_range_fails_before_generation() {
        let generator = QuestionGenerator::new(full_dataset());
        let mut rng = StdRng::seed_from_u64(0);
        let err = generator
            .generate(&settings(Difficulty::Easy, 4, 4), &mut rng)
            .unwrap_err();
        assert_eq!(err, PracticeError::EmptyRange { start: 4, end: 4 });
    }

    #[test]
    fn range_past_dataset_is_rejected() {
        let generator = QuestionGenerator::new(full_dataset());
        let mut rng = StdRng::seed_from_u64(0);
        let err = generator
            .generate(&settings(Difficulty::Easy, 5, 11), &mut rng)
            .unwrap_err();
        assert_eq!(err, PracticeError::RangeOutOfBounds { end: 11, len: 10 });
    }

    #[test]
    fn single_entry_dataset_drops_everything() {
        let entry = KanjiEntry::new(
            "日",
            Some("ひ"),
            Some("ニチ"),
            vec![VocabExample::new("日(ひ)", "sun", "")],
        );
        let generator = QuestionGenerator::new(Arc::new(KanjiDataset::new(vec![entry]).unwrap()));
        let mut rng = StdRng::seed_from_u64(9);
        let (questions, stats) = generator
            .generate_with_stats(&settings(Difficulty::Easy, 0, 1), &mut rng)
            .unwrap();

        assert!(questions.is_empty());
        assert_eq!(stats.dropped_underfilled, 1);
    }

    #[test]
    fn same_seed_gives_same_quiz() {
        let generator = QuestionGenerator::new(full_dataset());
        let run = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            generator
                .generate(&settings(Difficulty::Hard, 0, 10), &mut rng)
                .unwrap()
        };
        assert_eq!(run(42), run(42));
    }

    #[test]
    fn attempt_budget_scales_with_dataset() {
        let config = GeneratorConfig::default();
        assert_eq!(config.attempt_budget(1), 32);
        assert_eq!(config.attempt_budget(100), 800);
    }
}
