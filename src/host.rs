/*
 * Narrow seams to the host process: reading its memory, querying its window
 * registry, and the configuration that says where the host's entry points live.
 *
 * Everything above this module talks to the host only through `HostMemory`,
 * `WindowRegistry` and `EventInvoker`, bundled into a `HostContext`. The in-process
 * implementations here are the only code that turns host addresses into pointers
 * and function pointers; they are `unsafe` to construct because the crate cannot
 * verify that it is actually running inside the host.
 */

use crate::error::{ClickError, Result as ClickResult};
use crate::invoker::{EntryPoint, EventInvoker};
use crate::schema;
use crate::types::Address;

use std::ffi::{CString, c_char, c_void};

/// Read-only view of host memory.
pub trait HostMemory {
    /// Reads a pointer-sized value. Implementations return 0 for a null address.
    fn read_usize(&self, address: Address) -> usize;

    fn read_u32(&self, address: Address) -> u32;

    /// Reads a signed 32-bit field such as a list's entry count.
    fn read_i32(&self, address: Address) -> i32 {
        self.read_u32(address) as i32
    }

    /// Reads a pointer field and wraps it as an `Address`.
    fn read_address(&self, address: Address) -> Address {
        Address::new(self.read_usize(address))
    }
}

/// The host's process-wide window registry.
pub trait WindowRegistry {
    /// The stage singleton, or `None` if the UI has not been initialized.
    fn stage(&self) -> Option<Address>;

    /// The unit (window) manager owned by `stage`.
    fn unit_manager(&self, stage: Address) -> Option<Address>;

    /// The `index`-th (1-based) live window registered under `name`.
    fn window_by_name(&self, unit_manager: Address, name: &str, index: i32) -> Option<Address>;
}

/// The three host seams every action needs, borrowed for the duration of a call.
#[derive(Clone, Copy)]
pub struct HostContext<'h> {
    pub memory: &'h dyn HostMemory,
    pub registry: &'h dyn WindowRegistry,
    pub invoker: &'h dyn EventInvoker,
}

impl<'h> HostContext<'h> {
    pub fn new(
        memory: &'h dyn HostMemory,
        registry: &'h dyn WindowRegistry,
        invoker: &'h dyn EventInvoker,
    ) -> Self {
        Self {
            memory,
            registry,
            invoker,
        }
    }
}

/*
 * Direct reads of the current process's memory. Only meaningful when this crate is
 * loaded into the host process itself.
 */
#[derive(Debug, Clone, Copy)]
pub struct InProcessMemory {
    _private: (),
}

impl InProcessMemory {
    /// # Safety
    /// Every non-null address later passed to the read methods must point to
    /// readable memory of the current process for the duration of the read.
    pub unsafe fn new() -> Self {
        Self { _private: () }
    }
}

impl HostMemory for InProcessMemory {
    fn read_usize(&self, address: Address) -> usize {
        if address.is_null() {
            return 0;
        }
        let ptr = std::ptr::with_exposed_provenance::<usize>(address.raw());
        // SAFETY: guaranteed by the `InProcessMemory::new` contract.
        unsafe { ptr.read_unaligned() }
    }

    fn read_u32(&self, address: Address) -> u32 {
        if address.is_null() {
            return 0;
        }
        let ptr = std::ptr::with_exposed_provenance::<u32>(address.raw());
        // SAFETY: guaranteed by the `InProcessMemory::new` contract.
        unsafe { ptr.read_unaligned() }
    }
}

/// Where the receive-event entry point is found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReceiveEventBinding {
    /// A fixed function, relative to the module base.
    Rva(usize),
    /// The given vtable slot of the listener being dispatched to.
    ListenerVtable { slot: usize },
}

/*
 * Configuration of the host entry points, expressed relative to a module so it
 * survives ASLR. Resolved once into absolute addresses with `resolve`.
 */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostBindings {
    /// Module the RVAs are relative to; `None` means the main executable.
    pub module_name: Option<String>,
    /// Function returning the stage singleton.
    pub stage_singleton_rva: usize,
    /// Member function of the unit manager: (manager, name, index) -> window.
    pub window_by_name_rva: usize,
    pub receive_event: ReceiveEventBinding,
}

impl Default for HostBindings {
    fn default() -> Self {
        Self {
            module_name: None,
            stage_singleton_rva: 0,
            window_by_name_rva: 0,
            receive_event: ReceiveEventBinding::ListenerVtable {
                slot: schema::EVENT_LISTENER_RECEIVE_EVENT_SLOT,
            },
        }
    }
}

impl HostBindings {
    /// Resolves every RVA against the configured module's load address.
    #[cfg(target_os = "windows")]
    pub fn resolve(&self) -> ClickResult<ResolvedBindings> {
        let base = module_base(self.module_name.as_deref())?;
        log::debug!(
            "HostBindings: module {:?} loaded at {base}",
            self.module_name.as_deref().unwrap_or("<main>")
        );
        ResolvedBindings::from_base(self, base)
    }

    #[cfg(not(target_os = "windows"))]
    pub fn resolve(&self) -> ClickResult<ResolvedBindings> {
        log::warn!("HostBindings: module base lookup is only available on Windows");
        Err(ClickError::HostUnavailable(format!(
            "Cannot locate module {:?} on this platform",
            self.module_name.as_deref().unwrap_or("<main>")
        )))
    }
}

#[cfg(target_os = "windows")]
fn module_base(module_name: Option<&str>) -> ClickResult<Address> {
    use windows::Win32::System::LibraryLoader::GetModuleHandleW;
    use windows::core::{HSTRING, PCWSTR};

    let module = match module_name {
        Some(name) => unsafe { GetModuleHandleW(&HSTRING::from(name))? },
        None => unsafe { GetModuleHandleW(PCWSTR::null())? },
    };
    Ok(Address::new(module.0 as usize))
}

/// Absolute host entry points, fixed for the lifetime of the host process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedBindings {
    pub stage_singleton: Address,
    pub window_by_name: Address,
    pub receive_event: EntryPoint,
}

impl ResolvedBindings {
    pub fn from_base(bindings: &HostBindings, base: Address) -> ClickResult<Self> {
        if base.is_null() {
            return Err(ClickError::HostUnavailable(
                "Module base address is null".to_string(),
            ));
        }
        let receive_event = match bindings.receive_event {
            ReceiveEventBinding::Rva(rva) => EntryPoint::Fixed(base.offset(rva)),
            ReceiveEventBinding::ListenerVtable { slot } => EntryPoint::ListenerVtable { slot },
        };
        Ok(Self {
            stage_singleton: base.offset(bindings.stage_singleton_rva),
            window_by_name: base.offset(bindings.window_by_name_rva),
            receive_event,
        })
    }
}

type StageSingletonFn = unsafe extern "system" fn() -> *mut c_void;
type WindowByNameFn = unsafe extern "system" fn(*mut c_void, *const c_char, i32) -> *mut c_void;

/// Registry backed by the host's own functions.
pub struct NativeRegistry {
    stage_singleton: StageSingletonFn,
    window_by_name: WindowByNameFn,
    memory: InProcessMemory,
}

impl NativeRegistry {
    /// # Safety
    /// `bindings` must describe the host process this code runs in: both function
    /// addresses must be the host's stage accessor and window lookup functions.
    pub unsafe fn new(bindings: &ResolvedBindings) -> ClickResult<Self> {
        if bindings.stage_singleton.is_null() || bindings.window_by_name.is_null() {
            return Err(ClickError::InvalidTarget(
                "Registry entry points are not resolved".to_string(),
            ));
        }
        // SAFETY: non-null and, per the caller's contract, functions with these signatures.
        let (stage_singleton, window_by_name) = unsafe {
            (
                std::mem::transmute::<usize, StageSingletonFn>(bindings.stage_singleton.raw()),
                std::mem::transmute::<usize, WindowByNameFn>(bindings.window_by_name.raw()),
            )
        };
        Ok(Self {
            stage_singleton,
            window_by_name,
            // SAFETY: the caller vouches that this is the host process.
            memory: unsafe { InProcessMemory::new() },
        })
    }
}

impl WindowRegistry for NativeRegistry {
    fn stage(&self) -> Option<Address> {
        // SAFETY: see `NativeRegistry::new`.
        let stage = unsafe { (self.stage_singleton)() };
        let stage = Address::new(stage as usize);
        (!stage.is_null()).then_some(stage)
    }

    fn unit_manager(&self, stage: Address) -> Option<Address> {
        let manager = self
            .memory
            .read_address(stage.offset(schema::STAGE_UNIT_MANAGER));
        (!manager.is_null()).then_some(manager)
    }

    fn window_by_name(&self, unit_manager: Address, name: &str, index: i32) -> Option<Address> {
        let c_name = CString::new(name).ok()?;
        let manager = std::ptr::with_exposed_provenance_mut::<c_void>(unit_manager.raw());
        // SAFETY: see `NativeRegistry::new`; `c_name` outlives the call.
        let window = unsafe { (self.window_by_name)(manager, c_name.as_ptr(), index) };
        let window = Address::new(window as usize);
        (!window.is_null()).then_some(window)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolved_bindings_add_rvas_to_module_base() {
        let bindings = HostBindings {
            module_name: None,
            stage_singleton_rva: 0x100,
            window_by_name_rva: 0x200,
            receive_event: ReceiveEventBinding::Rva(0x300),
        };
        let resolved = ResolvedBindings::from_base(&bindings, Address::new(0x1_4000_0000))
            .expect("base is non-null");
        assert_eq!(resolved.stage_singleton, Address::new(0x1_4000_0100));
        assert_eq!(resolved.window_by_name, Address::new(0x1_4000_0200));
        assert_eq!(
            resolved.receive_event,
            EntryPoint::Fixed(Address::new(0x1_4000_0300))
        );
    }

    #[test]
    fn default_bindings_dispatch_through_listener_vtable() {
        let resolved = ResolvedBindings::from_base(&HostBindings::default(), Address::new(0x1000))
            .expect("base is non-null");
        assert_eq!(
            resolved.receive_event,
            EntryPoint::ListenerVtable {
                slot: schema::EVENT_LISTENER_RECEIVE_EVENT_SLOT
            }
        );
    }

    #[test]
    fn null_module_base_is_host_unavailable() {
        let err = ResolvedBindings::from_base(&HostBindings::default(), Address::NULL)
            .expect_err("null base must be rejected");
        assert!(matches!(err, ClickError::HostUnavailable(_)));
    }

    #[test]
    fn native_registry_rejects_unresolved_entry_points() {
        let resolved = ResolvedBindings {
            stage_singleton: Address::NULL,
            window_by_name: Address::new(0x2000),
            receive_event: EntryPoint::ListenerVtable { slot: 2 },
        };
        let result = unsafe { NativeRegistry::new(&resolved) };
        assert!(matches!(result, Err(ClickError::InvalidTarget(_))));
    }

    #[test]
    fn in_process_memory_reads_local_values() {
        let value: usize = 0xDEAD_BEEF;
        let word: u32 = 7;
        let memory = unsafe { InProcessMemory::new() };
        let value_addr = Address::new(std::ptr::addr_of!(value).expose_provenance());
        let word_addr = Address::new(std::ptr::addr_of!(word).expose_provenance());
        assert_eq!(memory.read_usize(value_addr), 0xDEAD_BEEF);
        assert_eq!(memory.read_u32(word_addr), 7);
        assert_eq!(memory.read_i32(word_addr), 7);

        let negative: i32 = -1;
        let negative_addr = Address::new(std::ptr::addr_of!(negative).expose_provenance());
        assert_eq!(memory.read_i32(negative_addr), -1);
        assert_eq!(memory.read_usize(Address::NULL), 0);
    }
}
