//! Plain text selection list, laid out like `SelectIconString`.

use crate::schema::{self, select_string};
use crate::window_common::{ActionDescriptor, ListLayout, WindowType};

pub static SELECT_STRING: WindowType = WindowType {
    name: "SelectString",
    listener_offset: schema::UNIT_BASE_EVENT_LISTENER,
    list: Some(ListLayout::PopupMenu {
        menu: select_string::POPUP_MENU,
    }),
    actions: &[
        ActionDescriptor::list_entry("select_string1", 0),
        ActionDescriptor::list_entry("select_string2", 1),
        ActionDescriptor::list_entry("select_string3", 2),
        ActionDescriptor::list_entry("select_string4", 3),
        ActionDescriptor::list_entry("select_string5", 4),
        ActionDescriptor::list_entry("select_string6", 5),
        ActionDescriptor::list_entry("select_string7", 6),
        ActionDescriptor::list_entry("select_string8", 7),
        ActionDescriptor::list_entry("select_string9", 8),
    ],
};
