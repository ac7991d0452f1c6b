//! Reply list view

use crate::dtos::MessageDTO;
use crate::entities::Message;
use serde::Serialize;

#[derive(Serialize, Debug)]
pub struct ReplyListView {
    pub thread_id: String,
    pub count: usize,
    pub replies: Vec<MessageDTO>,
}

/// Project a thread's replies into the shape the client displays.
/// Ordering is preserved from the input.
pub fn render_reply_list(thread_id: &str, replies: Vec<Message>) -> ReplyListView {
    let replies: Vec<MessageDTO> = replies.into_iter().map(MessageDTO::from).collect();
    ReplyListView {
        thread_id: thread_id.to_string(),
        count: replies.len(),
        replies,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn reply(id: i32, content: &str) -> Message {
        Message {
            message_id: id,
            thread_id: "t1".to_string(),
            sender_id: "u1".to_string(),
            content: content.to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_empty_thread_view() {
        let view = render_reply_list("t1", Vec::new());
        assert_eq!(view.count, 0);
        assert!(view.replies.is_empty());
    }

    #[test]
    fn test_preserves_order_and_content() {
        let view = render_reply_list("t1", vec![reply(1, "first"), reply(2, "second")]);
        assert_eq!(view.count, 2);
        assert_eq!(view.replies[0].content.as_deref(), Some("first"));
        assert_eq!(view.replies[1].content.as_deref(), Some("second"));
    }
}
