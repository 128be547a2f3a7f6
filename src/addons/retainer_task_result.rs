//! Retainer venture result window.

use crate::schema::{self, retainer_task_result};
use crate::window_common::{ActionDescriptor, WindowType};

pub static RETAINER_TASK_RESULT: WindowType = WindowType {
    name: "RetainerTaskResult",
    listener_offset: schema::UNIT_BASE_EVENT_LISTENER,
    list: None,
    actions: &[
        ActionDescriptor::button(
            "retainer_venture_result_confirm",
            retainer_task_result::CONFIRM_BUTTON,
            2,
        ),
        ActionDescriptor::button(
            "retainer_venture_result_reassign",
            retainer_task_result::REASSIGN_BUTTON,
            3,
        ),
    ],
};
