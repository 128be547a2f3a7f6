/*
 * Resolves button-like components: buttons, check boxes, radio buttons and
 * drag-drop slots. The window holds a pointer to the component; the event targets
 * the component's owner node. Check boxes embed a button, which in turn embeds the
 * component base, so every family here reaches its owner node at the same offset.
 */

use crate::error::{ClickError, Result as ClickResult};
use crate::host::HostMemory;
use crate::schema;
use crate::types::{ComponentKind, ComponentTarget};
use crate::window_common::WindowHandle;

pub(crate) fn resolve_component_target(
    memory: &dyn HostMemory,
    window: &WindowHandle,
    kind: ComponentKind,
    field: usize,
) -> ClickResult<ComponentTarget> {
    let window_name = window.window_type().name;
    if !matches!(
        kind,
        ComponentKind::Button
            | ComponentKind::CheckBox
            | ComponentKind::RadioButton
            | ComponentKind::DragDrop
    ) {
        return Err(ClickError::InvalidTarget(format!(
            "{kind:?} is not a button-like component (window '{window_name}')"
        )));
    }

    let component = memory.read_address(window.address().offset(field));
    if component.is_null() {
        log::warn!(
            "ComponentHandler: {kind:?} at field {field:#X} of window '{window_name}' is null"
        );
        return Err(ClickError::InvalidTarget(format!(
            "{kind:?} at field {field:#X} of window '{window_name}' is null"
        )));
    }

    let owner_node = memory.read_address(component.offset(schema::COMPONENT_OWNER_NODE));
    if owner_node.is_null() {
        log::warn!(
            "ComponentHandler: {kind:?} {component} in window '{window_name}' has no owner node"
        );
        return Err(ClickError::InvalidTarget(format!(
            "{kind:?} {component} in window '{window_name}' has no owner node"
        )));
    }

    log::debug!(
        "ComponentHandler: {kind:?} at field {field:#X} of '{window_name}' -> owner node {owner_node}"
    );
    Ok(ComponentTarget {
        kind,
        address: owner_node,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{MockMemory, install_component};
    use crate::types::Address;
    use crate::window_common::WindowType;

    static WINDOW: WindowType = WindowType {
        name: "Buttons",
        listener_offset: 0,
        list: None,
        actions: &[],
    };

    #[test]
    fn button_resolves_to_owner_node() {
        let mut memory = MockMemory::new();
        install_component(&mut memory, 0x1000, 0x220, 0x5000, 0x5800);
        let window = WindowHandle::from_address(&WINDOW, 0x1000).expect("non-null");
        for kind in [
            ComponentKind::Button,
            ComponentKind::CheckBox,
            ComponentKind::RadioButton,
            ComponentKind::DragDrop,
        ] {
            let target = resolve_component_target(&memory, &window, kind, 0x220).expect("resolves");
            assert_eq!(target.address, Address::new(0x5800));
            assert_eq!(target.kind, kind);
        }
    }

    #[test]
    fn null_component_or_owner_node_is_invalid_target() {
        let mut memory = MockMemory::new();
        let window = WindowHandle::from_address(&WINDOW, 0x1000).expect("non-null");
        let err =
            resolve_component_target(&memory, &window, ComponentKind::Button, 0x220).unwrap_err();
        assert!(matches!(err, ClickError::InvalidTarget(_)));

        memory.write_usize(0x1000 + 0x220, 0x5000);
        let err =
            resolve_component_target(&memory, &window, ComponentKind::Button, 0x220).unwrap_err();
        assert!(matches!(err, ClickError::InvalidTarget(_)));
    }

    #[test]
    fn non_button_kinds_are_rejected() {
        let mut memory = MockMemory::new();
        install_component(&mut memory, 0x1000, 0x220, 0x5000, 0x5800);
        let window = WindowHandle::from_address(&WINDOW, 0x1000).expect("non-null");
        let err =
            resolve_component_target(&memory, &window, ComponentKind::Stage, 0x220).unwrap_err();
        assert!(matches!(err, ClickError::InvalidTarget(_)));
    }
}
