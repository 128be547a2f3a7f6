//! Quest completion window.

use crate::schema::{self, journal_result};
use crate::window_common::{ActionDescriptor, WindowType};

pub static JOURNAL_RESULT: WindowType = WindowType {
    name: "JournalResult",
    listener_offset: schema::UNIT_BASE_EVENT_LISTENER,
    list: None,
    actions: &[
        ActionDescriptor::button("journal_result_complete", journal_result::COMPLETE_BUTTON, 1),
        ActionDescriptor::button("journal_result_decline", journal_result::DECLINE_BUTTON, 2),
    ],
};
