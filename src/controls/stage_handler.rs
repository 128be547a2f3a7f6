/*
 * Stage-level clicks (e.g. advancing a talk dialog) target the stage itself, which
 * the window keeps a pointer to.
 */

use crate::error::{ClickError, Result as ClickResult};
use crate::host::HostMemory;
use crate::types::{ComponentKind, ComponentTarget};
use crate::window_common::WindowHandle;

pub(crate) fn resolve_stage_target(
    memory: &dyn HostMemory,
    window: &WindowHandle,
    field: usize,
) -> ClickResult<ComponentTarget> {
    let stage = memory.read_address(window.address().offset(field));
    if stage.is_null() {
        log::warn!(
            "StageHandler: stage at field {field:#X} of window '{}' is null",
            window.window_type().name
        );
        return Err(ClickError::InvalidTarget(format!(
            "Stage at field {field:#X} of window '{}' is null",
            window.window_type().name
        )));
    }
    Ok(ComponentTarget {
        kind: ComponentKind::Stage,
        address: stage,
    })
}
