/*
 * Calls the host's receive-event entry point: the single function every simulated
 * interaction ends in. The host signature is
 *
 *     (listener, event_type: u16, routing: u32, event_data*, input_data*) -> address
 *
 * with the platform's system calling convention. The returned address is the
 * window that handled the event; it says nothing about whether the interaction had
 * any effect, so it is discarded.
 */

use crate::error::{ClickError, Result as ClickResult};
use crate::host::{HostMemory, InProcessMemory};
use crate::payload::{EventData, InputData};
use crate::types::{Address, EventKind, RoutingId};

use std::ffi::c_void;

pub trait EventInvoker {
    fn invoke(
        &self,
        listener: Address,
        kind: EventKind,
        routing: RoutingId,
        event_data: &mut EventData,
        input_data: &mut InputData,
    ) -> ClickResult<()>;
}

/// How the receive-event function is located.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryPoint {
    /// One function for every listener.
    Fixed(Address),
    /// The given slot in each listener's vtable.
    ListenerVtable { slot: usize },
}

impl EntryPoint {
    /// Resolves the function address for `listener`.
    pub fn resolve(self, memory: &dyn HostMemory, listener: Address) -> ClickResult<Address> {
        let function = match self {
            EntryPoint::Fixed(address) => address,
            EntryPoint::ListenerVtable { slot } => {
                let vtable = memory.read_address(listener);
                if vtable.is_null() {
                    log::warn!("Invoker: listener {listener} has no vtable");
                    return Err(ClickError::InvalidTarget(format!(
                        "Listener {listener} has no vtable"
                    )));
                }
                let offset = slot
                    .checked_mul(std::mem::size_of::<usize>())
                    .ok_or_else(|| {
                        log::warn!("Invoker: vtable slot {slot} is out of range");
                        ClickError::InvalidTarget(format!("Vtable slot {slot} is out of range"))
                    })?;
                memory.read_address(vtable.offset(offset))
            }
        };
        if function.is_null() {
            log::warn!("Invoker: receive-event entry point for listener {listener} is null");
            return Err(ClickError::InvalidTarget(format!(
                "Receive-event entry point for listener {listener} is null"
            )));
        }
        Ok(function)
    }
}

type ReceiveEventFn = unsafe extern "system" fn(
    *mut c_void,
    u16,
    u32,
    *mut EventData,
    *mut InputData,
) -> *mut c_void;

/// Invoker that calls straight into the host process.
pub struct ReceiveEventInvoker {
    entry: EntryPoint,
    memory: InProcessMemory,
}

impl ReceiveEventInvoker {
    /// # Safety
    /// Must only be used inside the host process, with an `entry` that locates the
    /// host's receive-event function. Every listener later passed to `invoke` must
    /// be a live event listener of that host.
    pub unsafe fn new(entry: EntryPoint) -> Self {
        Self {
            entry,
            // SAFETY: forwarded from this function's contract.
            memory: unsafe { InProcessMemory::new() },
        }
    }

    pub fn entry(&self) -> EntryPoint {
        self.entry
    }
}

impl EventInvoker for ReceiveEventInvoker {
    fn invoke(
        &self,
        listener: Address,
        kind: EventKind,
        routing: RoutingId,
        event_data: &mut EventData,
        input_data: &mut InputData,
    ) -> ClickResult<()> {
        if listener.is_null() {
            return Err(ClickError::InvalidTarget(
                "Cannot dispatch to a null listener".to_string(),
            ));
        }
        let function = self.entry.resolve(&self.memory, listener)?;
        log::trace!(
            "Invoker: {listener}, {:X}, {:X}, {event_data:?}, {input_data:?}",
            kind.code(),
            routing.raw()
        );
        // SAFETY: non-null and, per `ReceiveEventInvoker::new`, the host's receive-event function.
        let receive_event = unsafe { std::mem::transmute::<usize, ReceiveEventFn>(function.raw()) };
        let listener_ptr = std::ptr::with_exposed_provenance_mut::<c_void>(listener.raw());
        // SAFETY: both payloads are live for the whole call; the host does not retain them.
        let _handled_by = unsafe {
            receive_event(
                listener_ptr,
                kind.code(),
                routing.raw(),
                event_data as *mut EventData,
                input_data as *mut InputData,
            )
        };
        log::debug!(
            "Invoker: dispatched {kind:?} routing {} to listener {listener}",
            routing.raw()
        );
        Ok(())
    }
}
