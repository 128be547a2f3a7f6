/*
 * In-memory stand-ins for the host process used by unit tests: a sparse memory
 * map, a registry of named windows and an invoker that records every dispatch
 * instead of calling anything.
 */

use crate::error::Result as ClickResult;
use crate::host::{HostMemory, WindowRegistry};
use crate::invoker::EventInvoker;
use crate::payload::{EventData, InputData};
use crate::schema;
use crate::types::{Address, EventKind, RoutingId};

use std::cell::RefCell;
use std::collections::HashMap;

#[derive(Debug, Default)]
pub(crate) struct MockMemory {
    words: HashMap<usize, u64>,
}

impl MockMemory {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn write_usize(&mut self, address: usize, value: usize) {
        self.words.insert(address, value as u64);
    }

    pub(crate) fn write_u32(&mut self, address: usize, value: u32) {
        self.words.insert(address, u64::from(value));
    }
}

impl HostMemory for MockMemory {
    fn read_usize(&self, address: Address) -> usize {
        self.words.get(&address.raw()).copied().unwrap_or(0) as usize
    }

    fn read_u32(&self, address: Address) -> u32 {
        self.words.get(&address.raw()).copied().unwrap_or(0) as u32
    }
}

/// Stores a component pointer at `window + field` and gives the component an
/// owner node.
pub(crate) fn install_component(
    memory: &mut MockMemory,
    window: usize,
    field: usize,
    component: usize,
    owner_node: usize,
) {
    memory.write_usize(window + field, component);
    memory.write_usize(component + schema::COMPONENT_OWNER_NODE, owner_node);
}

/// Gives the list at `list` an owner node and an item renderer list holding
/// `renderers` in order.
pub(crate) fn install_list(
    memory: &mut MockMemory,
    list: usize,
    owner_node: usize,
    renderers: &[usize],
) {
    let entries = list + 0x1000;
    memory.write_usize(list + schema::COMPONENT_OWNER_NODE, owner_node);
    memory.write_usize(list + schema::LIST_ITEM_RENDERER_LIST, entries);
    for (i, renderer) in renderers.iter().enumerate() {
        memory.write_usize(
            entries + i * schema::LIST_ITEM_STRIDE + schema::LIST_ITEM_RENDERER,
            *renderer,
        );
    }
}

#[derive(Debug, Default)]
pub(crate) struct MockRegistry {
    pub(crate) stage: Option<usize>,
    pub(crate) unit_manager: Option<usize>,
    windows: HashMap<(String, i32), usize>,
    lookups: RefCell<Vec<(String, i32)>>,
}

impl MockRegistry {
    /// A registry with a stage and unit manager present and no windows.
    pub(crate) fn ready() -> Self {
        Self {
            stage: Some(0x10_0000),
            unit_manager: Some(0x20_0000),
            ..Self::default()
        }
    }

    pub(crate) fn with_window(mut self, name: &str, index: i32, address: usize) -> Self {
        self.windows.insert((name.to_string(), index), address);
        self
    }

    pub(crate) fn lookups(&self) -> Vec<(String, i32)> {
        self.lookups.borrow().clone()
    }
}

impl WindowRegistry for MockRegistry {
    fn stage(&self) -> Option<Address> {
        self.stage.map(Address::new)
    }

    fn unit_manager(&self, _stage: Address) -> Option<Address> {
        self.unit_manager.map(Address::new)
    }

    fn window_by_name(&self, _unit_manager: Address, name: &str, index: i32) -> Option<Address> {
        self.lookups.borrow_mut().push((name.to_string(), index));
        self.windows
            .get(&(name.to_string(), index))
            .copied()
            .map(Address::new)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Invocation {
    pub(crate) listener: Address,
    pub(crate) kind: EventKind,
    pub(crate) routing: RoutingId,
    pub(crate) event_data: EventData,
    pub(crate) input_data: InputData,
}

#[derive(Debug, Default)]
pub(crate) struct RecordingInvoker {
    calls: RefCell<Vec<Invocation>>,
}

impl RecordingInvoker {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn calls(&self) -> Vec<Invocation> {
        self.calls.borrow().clone()
    }

    pub(crate) fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl EventInvoker for RecordingInvoker {
    fn invoke(
        &self,
        listener: Address,
        kind: EventKind,
        routing: RoutingId,
        event_data: &mut EventData,
        input_data: &mut InputData,
    ) -> ClickResult<()> {
        self.calls.borrow_mut().push(Invocation {
            listener,
            kind,
            routing,
            event_data: *event_data,
            input_data: *input_data,
        });
        Ok(())
    }
}
