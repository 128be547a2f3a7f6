/*
 * Platform-agnostic value types shared by the locator, the payload builder, the
 * invoker and the action tables. None of these own host memory; an `Address` is
 * just a number that is meaningful inside the host process.
 */

use std::fmt;

/// A raw address inside the host process. Zero is representable but never valid
/// as a dispatch target; the handles built on top of it reject it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Address(usize);

impl Address {
    pub const NULL: Address = Address(0);

    pub const fn new(raw: usize) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> usize {
        self.0
    }

    pub const fn is_null(self) -> bool {
        self.0 == 0
    }

    /// Address of a field `offset` bytes into the structure at `self`.
    pub const fn offset(self, offset: usize) -> Self {
        Self(self.0.wrapping_add(offset))
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({:#X})", self.0)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#X}", self.0)
    }
}

/// Internal routing number the target window's handler switches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoutingId(pub u32);

impl RoutingId {
    pub const fn raw(self) -> u32 {
        self.0
    }
}

/*
 * Event categories understood by the host's receive-event handler. The numeric
 * codes belong to the host UI framework and must match the targeted client build
 * exactly; they are passed through unchanged as the handler's event-type argument.
 */
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum EventKind {
    MouseDown = 3,
    MouseUp = 4,
    MouseMove = 5,
    MouseRollOver = 6,
    MouseRollOut = 7,
    MouseClick = 9,
    Input = 12,
    FocusIn = 18,
    FocusOut = 19,
    ButtonPress = 23,
    ButtonRelease = 24,
    Change = 25,
    ListItemRollOver = 33,
    ListItemRollOut = 34,
    ListIndexChange = 35,
    ListItemClick = 36,
    DragDropRollOver = 52,
    DragDropRollOut = 53,
    IconTextRollOver = 56,
    IconTextRollOut = 57,
    IconTextClick = 58,
}

impl EventKind {
    pub const fn code(self) -> u16 {
        self as u16
    }
}

/// Identifies which family of component an action targets, so the executor can
/// pick the structural path and payload shape without inspecting host memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    Button,
    CheckBox,
    RadioButton,
    DragDrop,
    List,
    Stage,
}

impl ComponentKind {
    /// The event kind the host fires for a plain interaction with this kind.
    pub const fn default_event_kind(self) -> EventKind {
        match self {
            ComponentKind::Button | ComponentKind::CheckBox | ComponentKind::RadioButton => {
                EventKind::Change
            }
            ComponentKind::DragDrop => EventKind::IconTextRollOut,
            ComponentKind::List => EventKind::ListIndexChange,
            ComponentKind::Stage => EventKind::MouseClick,
        }
    }
}

/// A component resolved for one dispatch: the address that goes into the
/// event-data target slot, tagged with the kind it was resolved as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComponentTarget {
    pub kind: ComponentKind,
    pub address: Address,
}
