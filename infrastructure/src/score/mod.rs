//! Score persistence: implements the
//! [`ScoreStore`](breed_quiz_application::ScoreStore) port on disk.

mod file_store;

pub use file_store::FileScoreStore;
