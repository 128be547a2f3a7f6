/*
 * Executes the actions declared in the window tables. An `ActionSet` binds one
 * window type to one live window instance; each action then runs as a single
 * synchronous pipeline:
 *
 *   select target (controls::*) -> build payloads (payload) -> invoke (invoker)
 *
 * Every check happens before the invoker is called, so an action either fails
 * without touching the host or issues exactly one dispatch.
 *
 * The module also provides the name surface: every action has a stable name that
 * is unique across all window types, and `send_click` runs one by name.
 */

use crate::addons;
use crate::controls::{component_handler, list_handler, stage_handler};
use crate::error::{ClickError, Result as ClickResult};
use crate::host::HostContext;
use crate::payload::{EventData, InputData};
use crate::types::{Address, ComponentTarget, EventKind, RoutingId};
use crate::window_common::{
    ActionDescriptor, FIRST_OCCURRENCE, TargetSelector, WindowHandle, WindowType,
};

/// The actions of one window type, bound to one window instance.
#[derive(Clone, Copy)]
pub struct ActionSet<'h> {
    host: HostContext<'h>,
    window: WindowHandle,
}

/*
 * Builds an `ActionSet` for `window_type`. With an explicit address the address is
 * validated and used as is; without one the window is looked up by its registry
 * name (first occurrence).
 */
pub fn make_action<'h>(
    host: HostContext<'h>,
    window_type: &'static WindowType,
    address: Option<usize>,
) -> ClickResult<ActionSet<'h>> {
    let window = match address {
        Some(raw) => WindowHandle::from_address(window_type, raw)?,
        None => WindowHandle::locate(host.registry, window_type, FIRST_OCCURRENCE)?,
    };
    Ok(ActionSet { host, window })
}

impl<'h> ActionSet<'h> {
    pub fn window(&self) -> WindowHandle {
        self.window
    }

    pub fn window_type(&self) -> &'static WindowType {
        self.window.window_type()
    }

    pub fn action_names(&self) -> impl Iterator<Item = &'static str> + use<> {
        self.window.window_type().actions.iter().map(|action| action.name)
    }

    /// Runs the action named `name` of this window type.
    pub fn run(&self, name: &str) -> ClickResult<()> {
        let action = self.window_type().action(name).ok_or_else(|| {
            log::warn!(
                "CommandExecutor: window '{}' has no action '{name}'",
                self.window_type().name
            );
            ClickError::UnknownAction(format!(
                "Window '{}' has no action '{name}'",
                self.window_type().name
            ))
        })?;
        self.execute(action)
    }

    pub fn execute(&self, action: &ActionDescriptor) -> ClickResult<()> {
        log::debug!(
            "CommandExecutor: executing '{}' on '{}' at {}",
            action.name,
            self.window_type().name,
            self.window.address()
        );
        let memory = self.host.memory;
        match action.target {
            TargetSelector::Component { kind, field } => {
                let target =
                    component_handler::resolve_component_target(memory, &self.window, kind, field)?;
                self.dispatch_normal(&target, action.kind, action.routing)
            }
            TargetSelector::Stage { field } => {
                let target = stage_handler::resolve_stage_target(memory, &self.window, field)?;
                self.dispatch_normal(&target, action.kind, action.routing)
            }
            TargetSelector::ListEntry { index } => {
                self.dispatch_list_entry(i64::from(index), action.kind, action.routing)
            }
        }
    }

    /// Selects entry `index` of this window's list. Negative indices and indices
    /// at or past the current entry count fail with `IndexOutOfRange`.
    pub fn select_index(&self, index: i64) -> ClickResult<()> {
        log::debug!(
            "CommandExecutor: selecting index {index} in '{}' at {}",
            self.window_type().name,
            self.window.address()
        );
        self.dispatch_list_entry(index, EventKind::ListIndexChange, RoutingId(0))
    }

    fn dispatch_normal(
        &self,
        target: &ComponentTarget,
        kind: EventKind,
        routing: RoutingId,
    ) -> ClickResult<()> {
        let mut event_data = EventData::for_normal_target(target, self.window.address());
        let mut input_data = InputData::empty();
        self.invoke(
            self.window.listener(),
            kind,
            routing,
            &mut event_data,
            &mut input_data,
        )
    }

    /*
     * Single-branch list dispatch: every selection goes out as the action's event
     * kind with the action's routing. The host also has a distinct first-click path
     * (list item click, routing 3) that is not reproduced here because its payload
     * expectations are unverified.
     */
    fn dispatch_list_entry(
        &self,
        index: i64,
        kind: EventKind,
        routing: RoutingId,
    ) -> ClickResult<()> {
        let layout = self.window_type().list.ok_or_else(|| {
            log::warn!(
                "CommandExecutor: window '{}' has no selectable list",
                self.window_type().name
            );
            ClickError::InvalidTarget(format!(
                "Window '{}' has no selectable list",
                self.window_type().name
            ))
        })?;
        let list = list_handler::resolve_list(self.host.memory, &self.window, layout)?;
        let mut input_data = list.input_data(self.host.memory, index)?;
        let mut event_data = EventData::for_normal_target(&list.root, list.owner);
        self.invoke(list.listener, kind, routing, &mut event_data, &mut input_data)
    }

    fn invoke(
        &self,
        listener: Address,
        kind: EventKind,
        routing: RoutingId,
        event_data: &mut EventData,
        input_data: &mut InputData,
    ) -> ClickResult<()> {
        log::trace!(
            "CommandExecutor: {listener}, {kind:?}, {}, {event_data:?}, {input_data:?}",
            routing.raw()
        );
        self.host
            .invoker
            .invoke(listener, kind, routing, event_data, input_data)
    }
}

/// Looks up an action by its stable name across every known window type.
pub fn find_action(name: &str) -> Option<(&'static WindowType, &'static ActionDescriptor)> {
    addons::WINDOW_TYPES.iter().find_map(|window_type| {
        window_type
            .action(name)
            .map(|action| (*window_type, action))
    })
}

/// Every action name in the catalog.
pub fn action_names() -> impl Iterator<Item = &'static str> {
    addons::WINDOW_TYPES
        .iter()
        .flat_map(|window_type| window_type.actions.iter().map(|action| action.name))
}

/*
 * Runs the action named `name`. The owning window is taken from `address` if one is
 * given, otherwise it is resolved by name.
 */
pub fn send_click(host: HostContext<'_>, name: &str, address: Option<usize>) -> ClickResult<()> {
    let (window_type, action) = find_action(name).ok_or_else(|| {
        log::warn!("CommandExecutor: no action named '{name}'");
        ClickError::UnknownAction(format!("No action named '{name}'"))
    })?;
    make_action(host, window_type, address)?.execute(action)
}
