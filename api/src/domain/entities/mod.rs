//! Domain entities
//!
//! Pure domain models: the fetched GitHub data, what is derived from it,
//! and the contact form types.
//!
//! `contact::ContactForm` and the `reveal` module model page-side state
//! (the submit guard and the viewport reveal/counter animation). The HTTP
//! surface does not use them, so those items carry `allow(dead_code)`.

pub mod contact;
pub mod contribution;
pub mod event;
pub mod language;
pub mod profile;
pub mod repository;
pub mod reveal;

pub use contact::{ContactSubmission, RelayResult};
pub use contribution::{ContributionDay, HeatmapSource, HEATMAP_DAYS};
pub use event::{Event, EventKind, MAX_EVENTS};
pub use language::{LanguageBytes, LanguageShare, LanguageTotals};
pub use profile::Profile;
pub use repository::{non_fork, total_stars, Repository, LANGUAGE_SAMPLE_SIZE};
