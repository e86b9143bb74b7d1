use std::fmt;
use std::ops::Range;

//
// ─── DIFFICULTY ────────────────────────────────────────────────────────────────
//

/// Quiz difficulty. Medium and Hard unlock compound-word questions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    #[must_use]
    pub fn allows_compounds(self) -> bool {
        matches!(self, Difficulty::Medium | Difficulty::Hard)
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// Capitalized name for buttons and headings.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

//
// ─── RANGE ─────────────────────────────────────────────────────────────────────
//

/// Half-open index range into the dataset: `start` inclusive, `end` exclusive.
///
/// Construction does not validate; the generator rejects empty or out-of-bounds ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KanjiRange {
    pub start: usize,
    pub end: usize,
}

impl KanjiRange {
    #[must_use]
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    #[must_use]
    pub fn as_range(&self) -> Range<usize> {
        self.start..self.end
    }
}

//
// ─── SETTINGS ──────────────────────────────────────────────────────────────────
//

/// Parameters for one quiz generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PracticeSettings {
    pub difficulty: Difficulty,
    pub range: KanjiRange,
}

impl PracticeSettings {
    #[must_use]
    pub fn new(difficulty: Difficulty, range: KanjiRange) -> Self {
        Self { difficulty, range }
    }
}

/// Form state behind the practice settings screen.
///
/// Positions are 1-based and inclusive, matching what the range sliders show.
/// `first` never passes `last` and both stay within `1..=kanji_count`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PracticeSettingsDraft {
    difficulty: Difficulty,
    first: usize,
    last: usize,
    kanji_count: usize,
}

impl PracticeSettingsDraft {
    /// Easy difficulty over the whole dataset.
    #[must_use]
    pub fn new(kanji_count: usize) -> Self {
        let kanji_count = kanji_count.max(1);
        Self {
            difficulty: Difficulty::default(),
            first: 1,
            last: kanji_count,
            kanji_count,
        }
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub fn first(&self) -> usize {
        self.first
    }

    #[must_use]
    pub fn last(&self) -> usize {
        self.last
    }

    #[must_use]
    pub fn kanji_count(&self) -> usize {
        self.kanji_count
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    /// Move the lower slider; it cannot pass the upper one.
    pub fn set_first(&mut self, first: usize) {
        self.first = first.clamp(1, self.kanji_count).min(self.last);
    }

    /// Move the upper slider; it cannot pass the lower one.
    pub fn set_last(&mut self, last: usize) {
        self.last = last.clamp(1, self.kanji_count).max(self.first);
    }

    /// Convert the 1-based inclusive selection into 0-based half-open settings.
    #[must_use]
    pub fn to_settings(&self) -> PracticeSettings {
        PracticeSettings::new(
            self.difficulty,
            KanjiRange::new(self.first.saturating_sub(1), self.last),
        )
    }
}
