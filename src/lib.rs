/*
 * Public entry point for the addonclick crate: simulated interaction with the
 * windows ("addons") of a host UI framework by building the framework's own event
 * payloads and calling its receive-event entry point directly, instead of going
 * through mouse or keyboard input.
 *
 * The pipeline for one action is: locate the window (`window_common`), resolve the
 * targeted component (`controls`), build the event and input payloads (`payload`),
 * and invoke the host handler (`invoker`). `command_executor` drives that pipeline
 * from the declarative window tables in `addons`.
 *
 * All host access goes through the `HostMemory`, `WindowRegistry` and
 * `EventInvoker` seams, so everything except the native implementations can be
 * exercised without a host process. Win32-only glue is gated on Windows.
 */
pub mod addons;
pub mod command_executor;
pub(crate) mod controls;
pub mod error;
pub mod host;
pub mod invoker;
pub mod payload;
pub mod schema;
#[cfg(test)]
pub(crate) mod test_support;
pub mod types;
pub mod window_common;

pub use command_executor::{ActionSet, action_names, find_action, make_action, send_click};
pub use error::{ClickError, Result as ClickResult};
pub use host::{
    HostBindings, HostContext, HostMemory, InProcessMemory, NativeRegistry, ReceiveEventBinding,
    ResolvedBindings, WindowRegistry,
};
pub use invoker::{EntryPoint, EventInvoker, ReceiveEventInvoker};
pub use payload::{EventData, InputData};
pub use types::{Address, ComponentKind, ComponentTarget, EventKind, RoutingId};
pub use window_common::{
    ActionDescriptor, FIRST_OCCURRENCE, ListLayout, TargetSelector, WindowHandle, WindowType,
    locate_window,
};
