/*
 * Resolves selectable lists: the single-column popup menu embedded in
 * select-string style windows, and the list of a context (icon) menu.
 *
 * Both dispatch with the list's owner node as the event target, but they differ in
 * who receives the event and in the input payload:
 * - popup menu: the popup menu is the listener and the event's window; the input
 *   carries the entry's item renderer and the packed index.
 * - context menu: the window is the listener; the input carries the entry
 *   renderer's own event listener and the plain index.
 *
 * The entry count is read from the host on every call and the index is checked
 * against it before any entry is read.
 */

use crate::error::{ClickError, Result as ClickResult};
use crate::host::HostMemory;
use crate::payload::{self, InputData};
use crate::schema;
use crate::types::{Address, ComponentKind, ComponentTarget};
use crate::window_common::{ListLayout, WindowHandle};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ListTarget {
    layout: ListLayout,
    list: Address,
    /// Listener the event is dispatched to.
    pub(crate) listener: Address,
    /// Value for the event data's window slot.
    pub(crate) owner: Address,
    /// The list's owner node, used as the event data's target.
    pub(crate) root: ComponentTarget,
    pub(crate) entry_count: i32,
}

pub(crate) fn resolve_list(
    memory: &dyn HostMemory,
    window: &WindowHandle,
    layout: ListLayout,
) -> ClickResult<ListTarget> {
    let window_name = window.window_type().name;
    let (list, entry_count, listener, owner) = match layout {
        ListLayout::PopupMenu { menu } => {
            let popup = window.address().offset(menu);
            (
                memory.read_address(popup.offset(schema::POPUP_MENU_LIST)),
                memory.read_i32(popup.offset(schema::POPUP_MENU_ENTRY_COUNT)),
                popup,
                popup,
            )
        }
        ListLayout::ContextIconMenu { list, entry_count } => (
            memory.read_address(window.address().offset(list)),
            memory.read_i32(window.address().offset(entry_count)),
            window.listener(),
            window.address(),
        ),
    };

    if list.is_null() {
        log::warn!("ListHandler: list of window '{window_name}' is null");
        return Err(ClickError::InvalidTarget(format!(
            "List of window '{window_name}' is null"
        )));
    }

    let root = memory.read_address(list.offset(schema::COMPONENT_OWNER_NODE));
    if root.is_null() {
        log::warn!("ListHandler: list {list} of window '{window_name}' has no owner node");
        return Err(ClickError::InvalidTarget(format!(
            "List {list} of window '{window_name}' has no owner node"
        )));
    }

    log::debug!(
        "ListHandler: list {list} of '{window_name}' with {entry_count} entries (listener {listener})"
    );
    Ok(ListTarget {
        layout,
        list,
        listener,
        owner,
        root: ComponentTarget {
            kind: ComponentKind::List,
            address: root,
        },
        entry_count,
    })
}

impl ListTarget {
    /// Item renderer of entry `index`. The index must already be range-checked.
    fn renderer(&self, memory: &dyn HostMemory, index: u16) -> ClickResult<Address> {
        let entries = memory.read_address(self.list.offset(schema::LIST_ITEM_RENDERER_LIST));
        if entries.is_null() {
            log::warn!("ListHandler: list {} has no item renderer list", self.list);
            return Err(ClickError::InvalidTarget(format!(
                "List {} has no item renderer list",
                self.list
            )));
        }
        let entry = entries.offset(usize::from(index) * schema::LIST_ITEM_STRIDE);
        Ok(memory.read_address(entry.offset(schema::LIST_ITEM_RENDERER)))
    }

    /// Builds the input payload selecting `index`, after checking it against the
    /// current entry count.
    pub(crate) fn input_data(&self, memory: &dyn HostMemory, index: i64) -> ClickResult<InputData> {
        let index = payload::check_index(index, self.entry_count)?;
        let renderer = self.renderer(memory, index)?;
        match self.layout {
            ListLayout::PopupMenu { .. } => {
                InputData::for_popup_menu(renderer, index, self.entry_count)
            }
            ListLayout::ContextIconMenu { .. } => {
                let sub_listener = if renderer.is_null() {
                    renderer
                } else {
                    renderer.offset(schema::COMPONENT_EVENT_LISTENER)
                };
                InputData::for_context_menu(sub_listener, index, self.entry_count)
            }
        }
    }
}
