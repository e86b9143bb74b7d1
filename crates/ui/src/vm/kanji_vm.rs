use kanji_core::model::{KanjiDataset, KanjiEntry, VocabExample};
use kanji_core::reading::spoken_form;

const MISSING_READING: &str = "N/A";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridTileVm {
    pub index: usize,
    pub character: String,
}

#[must_use]
pub fn map_grid(dataset: &KanjiDataset) -> Vec<GridTileVm> {
    dataset
        .entries()
        .iter()
        .enumerate()
        .map(|(index, entry)| GridTileVm {
            index,
            character: entry.character.clone(),
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VocabItemVm {
    pub term: String,
    pub gloss: String,
    pub note: Option<String>,
    /// What the speak button reads: the embedded reading, else the whole term.
    pub speech_text: String,
}

impl From<&VocabExample> for VocabItemVm {
    fn from(example: &VocabExample) -> Self {
        let note = example.note.trim();
        Self {
            term: example.term.clone(),
            gloss: example.english_gloss.clone(),
            note: (!note.is_empty()).then(|| note.to_string()),
            speech_text: spoken_form(&example.term).to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KanjiCardVm {
    pub index: usize,
    pub character: String,
    pub kunyomi: String,
    pub onyomi: String,
    pub vocab: Vec<VocabItemVm>,
    pub prev_index: usize,
    pub next_index: usize,
    pub position_label: String,
}

/// Flashcard content for the entry at `index`, with wrapping neighbours.
#[must_use]
pub fn map_kanji_card(dataset: &KanjiDataset, index: usize) -> Option<KanjiCardVm> {
    let entry = dataset.get(index)?;
    Some(KanjiCardVm {
        index,
        character: entry.character.clone(),
        kunyomi: reading_label(entry.kunyomi.as_deref()),
        onyomi: reading_label(entry.onyomi.as_deref()),
        vocab: vocab_items(entry),
        prev_index: dataset.prev_index(index),
        next_index: dataset.next_index(index),
        position_label: format!("{} / {}", index + 1, dataset.len()),
    })
}

fn reading_label(readings: Option<&str>) -> String {
    readings.map_or_else(|| MISSING_READING.to_string(), str::to_string)
}

fn vocab_items(entry: &KanjiEntry) -> Vec<VocabItemVm> {
    entry.examples.iter().map(VocabItemVm::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset() -> KanjiDataset {
        KanjiDataset::new(vec![
            KanjiEntry::new(
                "学",
                Some("まな(ぶ)"),
                Some("ガク"),
                vec![
                    VocabExample::new("学校(がっこう)", "school", "noun"),
                    VocabExample::new("学ぶ", "to learn", ""),
                ],
            ),
            KanjiEntry::new("円", None, Some("エン"), Vec::new()),
        ])
        .unwrap()
    }

    #[test]
    fn card_wraps_neighbours() {
        let card = map_kanji_card(&dataset(), 0).unwrap();
        assert_eq!(card.prev_index, 1);
        assert_eq!(card.next_index, 1);
        assert_eq!(card.position_label, "1 / 2");
    }

    #[test]
    fn missing_readings_show_placeholder() {
        let card = map_kanji_card(&dataset(), 1).unwrap();
        assert_eq!(card.kunyomi, "N/A");
        assert_eq!(card.onyomi, "エン");
        assert!(card.vocab.is_empty());
    }

    #[test]
    fn vocab_speaks_reading_or_term() {
        let card = map_kanji_card(&dataset(), 0).unwrap();
        assert_eq!(card.vocab[0].speech_text, "がっこう");
        assert_eq!(card.vocab[0].note.as_deref(), Some("noun"));
        assert_eq!(card.vocab[1].speech_text, "学ぶ");
        assert_eq!(card.vocab[1].note, None);
    }

    #[test]
    fn out_of_range_index_has_no_card() {
        assert!(map_kanji_card(&dataset(), 2).is_none());
    }

    #[test]
    fn grid_keeps_dataset_order() {
        let tiles = map_grid(&dataset());
        let chars: Vec<_> = tiles.iter().map(|t| t.character.as_str()).collect();
        assert_eq!(chars, ["学", "円"]);
        assert_eq!(tiles[1].index, 1);
    }
}
