/*
 * Per-component-family resolution of the structural path from a window to the
 * address an event targets. Each handler reads only what it needs from host
 * memory and rejects null links before anything is dispatched.
 */
pub(crate) mod component_handler;
pub(crate) mod list_handler;
pub(crate) mod stage_handler;
