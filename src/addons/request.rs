//! Item hand-over request window.

use crate::schema::{self, request};
use crate::window_common::{ActionDescriptor, WindowType};

pub static REQUEST: WindowType = WindowType {
    name: "Request",
    listener_offset: schema::UNIT_BASE_EVENT_LISTENER,
    list: None,
    actions: &[
        ActionDescriptor::button("request_hand_over", request::HAND_OVER_BUTTON, 0),
        ActionDescriptor::button("request_cancel", request::CANCEL_BUTTON, 1),
        // Right-click on the first requested item slot.
        ActionDescriptor::drag_drop("request_item1", request::DRAG_DROP_ITEM, 12),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command_executor::make_action;
    use crate::host::HostContext;
    use crate::test_support::{MockMemory, MockRegistry, RecordingInvoker, install_component};
    use crate::types::{Address, EventKind, RoutingId};

    #[test]
    fn item_slot_is_an_icon_text_roll_out_on_the_drag_drop_owner() {
        let mut memory = MockMemory::new();
        install_component(&mut memory, 0x1000, request::DRAG_DROP_ITEM, 0x3000, 0x3100);
        let registry = MockRegistry::ready().with_window("Request", 1, 0x1000);
        let invoker = RecordingInvoker::new();
        let host = HostContext::new(&memory, &registry, &invoker);

        make_action(host, &REQUEST, None)
            .expect("window found")
            .run("request_item1")
            .expect("dispatched");

        let call = invoker.calls()[0];
        assert_eq!(call.kind, EventKind::IconTextRollOut);
        assert_eq!(call.routing, RoutingId(12));
        assert_eq!(call.event_data.target(), Address::new(0x3100));
    }

    #[test]
    fn buttons_use_change_with_their_routing() {
        let hand_over = REQUEST.action("request_hand_over").expect("declared");
        let cancel = REQUEST.action("request_cancel").expect("declared");
        assert_eq!((hand_over.routing, hand_over.kind), (RoutingId(0), EventKind::Change));
        assert_eq!((cancel.routing, cancel.kind), (RoutingId(1), EventKind::Change));
    }
}
