//! Interaction state machines behind the portfolio page.
//!
//! Nothing here touches the DOM; the components in `app` own the timers and
//! listeners and drive these types through reactive signals.

mod contact;
mod loading;
mod scroll;
mod skill_filter;
mod tech_preview;
mod typewriter;

pub use contact::{ContactDraft, ContactField, MailtoRequest, DEFAULT_SUBJECT};
pub use loading::{LoadingGate, LOADING_DELAY};
pub use scroll::{ScrollMetrics, SCROLL_TOP_THRESHOLD};
pub use skill_filter::{CategoryFilter, SkillFilter};
pub use tech_preview::{TechPreview, PREVIEW_LIMIT};
pub use typewriter::{Typewriter, TYPEWRITER_DELAY};
