mod kanji_vm;
mod quiz_vm;
mod sentence_vm;

pub use kanji_vm::{GridTileVm, KanjiCardVm, VocabItemVm, map_grid, map_kanji_card};
pub use quiz_vm::{OptionVm, QuizVm, map_quiz, start_quiz};
pub use sentence_vm::{SentenceVm, fetch_sentences, map_sentences, sanitize_furigana};
