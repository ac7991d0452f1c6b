//! Views module - pure display collaborators
//!
//! Pure functions from a data shape to the rendered output, no side
//! effects and no state.

pub mod replies;
pub mod typing;

pub use replies::{ReplyListView, render_reply_list};
pub use typing::{TypingIndicatorView, render_typing_indicator};
