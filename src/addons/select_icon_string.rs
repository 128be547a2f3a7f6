//! Icon + text selection list. Entries are selected through the popup menu
//! embedded in the window.

use crate::schema::{self, select_icon_string};
use crate::window_common::{ActionDescriptor, ListLayout, WindowType};

pub static SELECT_ICON_STRING: WindowType = WindowType {
    name: "SelectIconString",
    listener_offset: schema::UNIT_BASE_EVENT_LISTENER,
    list: Some(ListLayout::PopupMenu {
        menu: select_icon_string::POPUP_MENU,
    }),
    actions: &[
        ActionDescriptor::list_entry("select_icon_string1", 0),
        ActionDescriptor::list_entry("select_icon_string2", 1),
        ActionDescriptor::list_entry("select_icon_string3", 2),
        ActionDescriptor::list_entry("select_icon_string4", 3),
        ActionDescriptor::list_entry("select_icon_string5", 4),
        ActionDescriptor::list_entry("select_icon_string6", 5),
        ActionDescriptor::list_entry("select_icon_string7", 6),
        ActionDescriptor::list_entry("select_icon_string8", 7),
        ActionDescriptor::list_entry("select_icon_string9", 8),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command_executor::{make_action, send_click};
    use crate::error::ClickError;
    use crate::host::HostContext;
    use crate::payload;
    use crate::test_support::{MockMemory, MockRegistry, RecordingInvoker, install_list};
    use crate::types::{Address, EventKind, RoutingId};

    const WINDOW: usize = 0x5_0000;
    const LIST: usize = 0x6_0000;

    fn five_entry_memory() -> MockMemory {
        let mut memory = MockMemory::new();
        let popup = WINDOW + select_icon_string::POPUP_MENU;
        memory.write_usize(popup + schema::POPUP_MENU_LIST, LIST);
        memory.write_u32(popup + schema::POPUP_MENU_ENTRY_COUNT, 5);
        install_list(&mut memory, LIST, 0x6_8000, &[0x100, 0x200, 0x300, 0x400, 0x500]);
        memory
    }

    #[test]
    fn named_entries_map_to_zero_based_indices() {
        let memory = five_entry_memory();
        let registry = MockRegistry::ready().with_window("SelectIconString", 1, WINDOW);
        let invoker = RecordingInvoker::new();
        let host = HostContext::new(&memory, &registry, &invoker);

        send_click(host, "select_icon_string5", None).expect("dispatched");

        let call = invoker.calls()[0];
        assert_eq!(call.kind, EventKind::ListIndexChange);
        assert_eq!(call.routing, RoutingId(0));
        assert_eq!(call.listener, Address::new(WINDOW + select_icon_string::POPUP_MENU));
        assert_eq!(call.input_data.listener(), Address::new(0x500));
        assert_eq!(call.input_data.index_field(), payload::packed_index(4));
    }

    #[test]
    fn named_entry_past_current_count_is_rejected() {
        let memory = five_entry_memory();
        let registry = MockRegistry::ready();
        let invoker = RecordingInvoker::new();
        let host = HostContext::new(&memory, &registry, &invoker);
        let actions = make_action(host, &SELECT_ICON_STRING, Some(WINDOW)).expect("non-null");

        let err = actions.run("select_icon_string6").unwrap_err();
        assert!(matches!(
            err,
            ClickError::IndexOutOfRange {
                index: 5,
                entry_count: 5
            }
        ));
        assert_eq!(invoker.call_count(), 0);
    }
}
