/*
 * Field offsets into the host UI framework's structures for the targeted client
 * build. This layout is owned by the framework, not by this crate: when the client
 * is patched these numbers move, and this module (plus nothing else) is what has to
 * be updated. Window tables in `crate::addons` reference these constants by name.
 */

/// Offset of the event listener inside a window (`AtkUnitBase` starts with it).
pub const UNIT_BASE_EVENT_LISTENER: usize = 0x0;

/// Slot of the receive-event function in an event listener's vtable.
pub const EVENT_LISTENER_RECEIVE_EVENT_SLOT: usize = 2;

/// Pointer to the unit (window) manager inside the stage singleton.
pub const STAGE_UNIT_MANAGER: usize = 0x20;

/// Owner node pointer inside any component base. Buttons, check boxes, radio
/// buttons, drag-drop slots and lists all start with a component base, so the same
/// offset applies to each of them.
pub const COMPONENT_OWNER_NODE: usize = 0xA8;
/// Event listener inside a component base; list item renderers receive events
/// through it.
pub const COMPONENT_EVENT_LISTENER: usize = 0x0;

/// Item renderer list pointer inside a list component.
pub const LIST_ITEM_RENDERER_LIST: usize = 0xC8;
/// Size of one entry in the item renderer list.
pub const LIST_ITEM_STRIDE: usize = 0x18;
/// Renderer pointer inside one item renderer list entry.
pub const LIST_ITEM_RENDERER: usize = 0x8;

/// Popup menu layout (embedded in select-string style windows).
pub const POPUP_MENU_LIST: usize = 0x8;
pub const POPUP_MENU_ENTRY_COUNT: usize = 0x20;

pub mod request {
    pub const DRAG_DROP_ITEM: usize = 0x250;
    pub const HAND_OVER_BUTTON: usize = 0x290;
    pub const CANCEL_BUTTON: usize = 0x298;
}

pub mod repair {
    pub const REPAIR_ALL_BUTTON: usize = 0x2B8;
}

pub mod grand_company_supply_reward {
    pub const DELIVER_BUTTON: usize = 0x228;
    pub const CANCEL_BUTTON: usize = 0x230;
}

pub mod journal_result {
    pub const COMPLETE_BUTTON: usize = 0x220;
    pub const DECLINE_BUTTON: usize = 0x228;
}

pub mod retainer_task_result {
    pub const REASSIGN_BUTTON: usize = 0x220;
    pub const CONFIRM_BUTTON: usize = 0x228;
}

pub mod talk {
    /// Stage pointer held by the talk window's secondary event listener.
    pub const STAGE: usize = 0x230;
}

pub mod select_icon_string {
    pub const POPUP_MENU: usize = 0x220;
}

pub mod select_string {
    pub const POPUP_MENU: usize = 0x220;
}

pub mod context_icon_menu {
    pub const LIST: usize = 0x240;
    pub const ENTRY_COUNT: usize = 0x2A0;
}
