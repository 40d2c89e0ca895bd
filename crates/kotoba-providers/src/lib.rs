pub mod jisho;
pub mod kanji_alive;

pub use jisho::JishoClient;
pub use kanji_alive::KanjiAliveClient;
