//! Dialogue window. Advancing the dialogue is a click on the stage, not on a
//! component.

use crate::schema::{self, talk};
use crate::window_common::{ActionDescriptor, WindowType};

pub static TALK: WindowType = WindowType {
    name: "Talk",
    listener_offset: schema::UNIT_BASE_EVENT_LISTENER,
    list: None,
    actions: &[ActionDescriptor::stage("talk", talk::STAGE, 0)],
};
