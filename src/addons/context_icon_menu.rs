//! Context (icon) menu. Unlike the popup-menu lists, events go to the window's own
//! listener and the input carries the entry renderer's listener.

use crate::schema::{self, context_icon_menu};
use crate::window_common::{ActionDescriptor, ListLayout, WindowType};

pub static CONTEXT_ICON_MENU: WindowType = WindowType {
    name: "ContextIconMenu",
    listener_offset: schema::UNIT_BASE_EVENT_LISTENER,
    list: Some(ListLayout::ContextIconMenu {
        list: context_icon_menu::LIST,
        entry_count: context_icon_menu::ENTRY_COUNT,
    }),
    actions: &[
        ActionDescriptor::list_entry("context_icon_menu1", 0),
        ActionDescriptor::list_entry("context_icon_menu2", 1),
        ActionDescriptor::list_entry("context_icon_menu3", 2),
        ActionDescriptor::list_entry("context_icon_menu4", 3),
        ActionDescriptor::list_entry("context_icon_menu5", 4),
    ],
};
