//! Repair window.

use crate::schema::{self, repair};
use crate::window_common::{ActionDescriptor, WindowType};

pub static REPAIR: WindowType = WindowType {
    name: "Repair",
    listener_offset: schema::UNIT_BASE_EVENT_LISTENER,
    list: None,
    actions: &[ActionDescriptor::button(
        "repair_all",
        repair::REPAIR_ALL_BUTTON,
        0,
    )],
};
