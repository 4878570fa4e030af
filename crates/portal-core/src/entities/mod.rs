//! Entity structs for all language-portal domain objects.
//!
//! Derived counters (`correct_count`, `wrong_count`, `word_count`,
//! `review_items_count`) are computed on every read and never stored.

mod group;
mod review;
mod study_session;
mod word;

pub use group::Group;
pub use review::WordReview;
pub use study_session::StudySession;
pub use word::Word;
