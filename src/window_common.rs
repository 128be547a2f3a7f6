/*
 * Window-level building blocks shared by every action: the typed `WindowHandle`,
 * the declarative `WindowType` tables that describe a window's structure and
 * actions, and the locator that finds a live window instance by name.
 *
 * A window type is pure data: its registry name, where its event listener sits,
 * how its list (if any) is laid out, and the fixed (target, routing, event kind)
 * triple of each named action. The executor in `command_executor` interprets these
 * tables; nothing here touches the host beyond registry reads.
 */

use crate::error::{ClickError, Result as ClickResult};
use crate::host::WindowRegistry;
use crate::types::{Address, ComponentKind, EventKind, RoutingId};

/// Occurrence index the host uses for the first window with a given name.
pub const FIRST_OCCURRENCE: i32 = 1;

/// How to reach the component an action targets, relative to the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetSelector {
    /// A component pointer stored at `field` in the window.
    Component { kind: ComponentKind, field: usize },
    /// A stage pointer stored at `field` in the window.
    Stage { field: usize },
    /// Entry `index` of the window's list, per its `ListLayout`.
    ListEntry { index: u16 },
}

/// Where a window keeps its selectable list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListLayout {
    /// A popup menu embedded at `menu` in the window. The popup menu is its own
    /// event listener and owns the list.
    PopupMenu { menu: usize },
    /// A list pointer at `list` and an entry count at `entry_count`, both in the
    /// window. Events go to the window's own listener.
    ContextIconMenu { list: usize, entry_count: usize },
}

/// One named action of a window type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionDescriptor {
    pub name: &'static str,
    pub target: TargetSelector,
    pub routing: RoutingId,
    pub kind: EventKind,
}

impl ActionDescriptor {
    const fn component(
        name: &'static str,
        kind: ComponentKind,
        field: usize,
        routing: u32,
    ) -> Self {
        Self {
            name,
            target: TargetSelector::Component { kind, field },
            routing: RoutingId(routing),
            kind: kind.default_event_kind(),
        }
    }

    pub const fn button(name: &'static str, field: usize, routing: u32) -> Self {
        Self::component(name, ComponentKind::Button, field, routing)
    }

    pub const fn check_box(name: &'static str, field: usize, routing: u32) -> Self {
        Self::component(name, ComponentKind::CheckBox, field, routing)
    }

    pub const fn radio_button(name: &'static str, field: usize, routing: u32) -> Self {
        Self::component(name, ComponentKind::RadioButton, field, routing)
    }

    pub const fn drag_drop(name: &'static str, field: usize, routing: u32) -> Self {
        Self::component(name, ComponentKind::DragDrop, field, routing)
    }

    pub const fn stage(name: &'static str, field: usize, routing: u32) -> Self {
        Self {
            name,
            target: TargetSelector::Stage { field },
            routing: RoutingId(routing),
            kind: ComponentKind::Stage.default_event_kind(),
        }
    }

    /// Selects list entry `index`; list selections always use routing 0.
    pub const fn list_entry(name: &'static str, index: u16) -> Self {
        Self {
            name,
            target: TargetSelector::ListEntry { index },
            routing: RoutingId(0),
            kind: ComponentKind::List.default_event_kind(),
        }
    }

    pub const fn with_kind(mut self, kind: EventKind) -> Self {
        self.kind = kind;
        self
    }
}

/// Declarative description of one window type.
#[derive(Debug, PartialEq, Eq)]
pub struct WindowType {
    /// Name the host registers the window under.
    pub name: &'static str,
    pub listener_offset: usize,
    pub list: Option<ListLayout>,
    pub actions: &'static [ActionDescriptor],
}

impl WindowType {
    pub fn action(&self, name: &str) -> Option<&'static ActionDescriptor> {
        self.actions.iter().find(|action| action.name == name)
    }
}

/*
 * Non-owning, typed reference to a live window in the host. Valid only as long as
 * the host keeps the window alive; callers should not hold one across frames.
 */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowHandle {
    address: Address,
    window_type: &'static WindowType,
}

impl WindowHandle {
    /// Wraps a caller-supplied address. Zero is rejected.
    pub fn from_address(window_type: &'static WindowType, raw: usize) -> ClickResult<Self> {
        let address = Address::new(raw);
        if address.is_null() {
            log::warn!(
                "Locator: null address supplied for window '{}'",
                window_type.name
            );
            return Err(ClickError::InvalidTarget(format!(
                "Null address supplied for window '{}'",
                window_type.name
            )));
        }
        Ok(Self {
            address,
            window_type,
        })
    }

    /// Finds the `index`-th live window of this type by its registry name.
    pub fn locate(
        registry: &dyn WindowRegistry,
        window_type: &'static WindowType,
        index: i32,
    ) -> ClickResult<Self> {
        let address = locate_window(registry, window_type.name, index)?;
        Self::from_address(window_type, address.raw())
    }

    pub fn address(&self) -> Address {
        self.address
    }

    pub fn window_type(&self) -> &'static WindowType {
        self.window_type
    }

    /// The window's own event listener.
    pub fn listener(&self) -> Address {
        self.address.offset(self.window_type.listener_offset)
    }
}

/*
 * Resolves a window by name through the stage singleton and its unit manager.
 * Every call goes back to the registry: the host destroys and recreates windows
 * freely, so a previously found address may already be stale.
 */
pub fn locate_window(
    registry: &dyn WindowRegistry,
    name: &str,
    index: i32,
) -> ClickResult<Address> {
    log::debug!("Locator: resolving window '{name}' (occurrence {index})");

    let stage = registry.stage().ok_or_else(|| {
        log::warn!("Locator: stage singleton is not available");
        ClickError::HostUnavailable("Stage singleton is not available".to_string())
    })?;

    let unit_manager = registry.unit_manager(stage).ok_or_else(|| {
        log::warn!("Locator: unit manager is not available (stage {stage})");
        ClickError::HostUnavailable("Unit manager is not available".to_string())
    })?;

    let window = registry
        .window_by_name(unit_manager, name, index)
        .filter(|address| !address.is_null())
        .ok_or_else(|| {
            log::warn!("Locator: window '{name}' (occurrence {index}) is not available");
            ClickError::TargetNotFound(format!(
                "Window '{name}' (occurrence {index}) is not available"
            ))
        })?;

    log::debug!("Locator: window '{name}' found at {window}");
    Ok(window)
}
