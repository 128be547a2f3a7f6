/*
 * Builds the two payloads the host's receive-event handler takes: the event data
 * (who fired, on behalf of which window) and the input data (what was selected).
 *
 * Both are fixed-size records defined by the host UI framework. The slot positions
 * below are a binary contract: the handler reads them by offset, and a value in the
 * wrong slot either does nothing or takes the host down. They are reproduced as the
 * framework lays them out and must not be rearranged.
 *
 * Payloads are built fresh for every dispatch and live on the caller's stack.
 */

use crate::error::{ClickError, Result as ClickResult};
use crate::types::{Address, ComponentTarget};

use std::fmt;

const EVENT_DATA_SLOTS: usize = 3;
const INPUT_DATA_SLOTS: usize = 8;

const EVENT_SLOT_TARGET: usize = 1;
const EVENT_SLOT_WINDOW: usize = 2;

const INPUT_SLOT_LISTENER: usize = 0;
const INPUT_SLOT_INDEX: usize = 2;

#[derive(Clone, Copy, PartialEq, Eq)]
#[repr(C)]
pub struct EventData {
    slots: [u64; EVENT_DATA_SLOTS],
}

const _: () = assert!(std::mem::size_of::<EventData>() == 0x18);

impl EventData {
    /*
     * The universal event payload for buttons, check boxes, radio buttons,
     * drag-drop slots, list roots and stages. Slot 0 is reserved and stays zero.
     * `window` is the owner of the listener being dispatched to: the window itself,
     * or the popup menu embedded in it.
     */
    pub fn for_normal_target(target: &ComponentTarget, window: Address) -> Self {
        let mut slots = [0u64; EVENT_DATA_SLOTS];
        slots[EVENT_SLOT_TARGET] = target.address.raw() as u64;
        slots[EVENT_SLOT_WINDOW] = window.raw() as u64;
        Self { slots }
    }

    pub fn target(&self) -> Address {
        Address::new(self.slots[EVENT_SLOT_TARGET] as usize)
    }

    pub fn window(&self) -> Address {
        Address::new(self.slots[EVENT_SLOT_WINDOW] as usize)
    }

    pub fn slots(&self) -> &[u64; EVENT_DATA_SLOTS] {
        &self.slots
    }
}

impl fmt::Debug for EventData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "EventData[{:X} {:X} {:X}]",
            self.slots[0], self.slots[1], self.slots[2]
        )
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
#[repr(C)]
pub struct InputData {
    slots: [u64; INPUT_DATA_SLOTS],
}

const _: () = assert!(std::mem::size_of::<InputData>() == 0x40);

impl InputData {
    /// No selection state: plain buttons and stage clicks.
    pub fn empty() -> Self {
        Self {
            slots: [0u64; INPUT_DATA_SLOTS],
        }
    }

    /*
     * Per-entry click inside a context (icon) menu. The handler expects the entry
     * renderer's event listener in slot 0 and the bare index in slot 2.
     */
    pub fn for_context_menu(
        sub_listener: Address,
        index: u16,
        entry_count: i32,
    ) -> ClickResult<Self> {
        check_index(i64::from(index), entry_count)?;
        if sub_listener.is_null() {
            return Err(ClickError::InvalidTarget(format!(
                "Context menu entry {index} has no listener"
            )));
        }
        let mut data = Self::empty();
        data.slots[INPUT_SLOT_LISTENER] = sub_listener.raw() as u64;
        data.slots[INPUT_SLOT_INDEX] = u64::from(index);
        Ok(data)
    }

    /*
     * Single-column popup menu selection. Slot 0 carries the entry's item renderer;
     * slot 2 carries the index packed into both the low and the high 16 bits.
     */
    pub fn for_popup_menu(renderer: Address, index: u16, entry_count: i32) -> ClickResult<Self> {
        check_index(i64::from(index), entry_count)?;
        if renderer.is_null() {
            return Err(ClickError::InvalidTarget(format!(
                "Popup menu entry {index} has no item renderer"
            )));
        }
        let mut data = Self::empty();
        data.slots[INPUT_SLOT_LISTENER] = renderer.raw() as u64;
        data.slots[INPUT_SLOT_INDEX] = packed_index(index);
        Ok(data)
    }

    pub fn listener(&self) -> Address {
        Address::new(self.slots[INPUT_SLOT_LISTENER] as usize)
    }

    pub fn index_field(&self) -> u64 {
        self.slots[INPUT_SLOT_INDEX]
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(|slot| *slot == 0)
    }

    pub fn slots(&self) -> &[u64; INPUT_DATA_SLOTS] {
        &self.slots
    }
}

impl fmt::Debug for InputData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "InputData[")?;
        for (i, slot) in self.slots.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{slot:X}")?;
        }
        write!(f, "]")
    }
}

/// `index` in bits 0..16 and again in bits 48..64.
pub const fn packed_index(index: u16) -> u64 {
    (index as u64) | ((index as u64) << 48)
}

pub const fn unpack_low(packed: u64) -> u16 {
    (packed & 0xFFFF) as u16
}

pub const fn unpack_high(packed: u64) -> u16 {
    (packed >> 48) as u16
}

/*
 * Validates a selection index against the current entry count and narrows it to
 * the host's 16-bit index. Called before anything is read at that index, so an
 * out-of-range selection never reaches the host. The host keeps the count signed;
 * a count of zero or less rejects every index.
 */
pub fn check_index(index: i64, entry_count: i32) -> ClickResult<u16> {
    if index < 0 || index >= i64::from(entry_count) {
        log::warn!("PayloadBuilder: index {index} out of range for {entry_count} entries");
        return Err(ClickError::IndexOutOfRange { index, entry_count });
    }
    u16::try_from(index).map_err(|_| ClickError::IndexOutOfRange { index, entry_count })
}
