/*
 * The supported window types. Each submodule declares one `WindowType`: the name
 * the host registers it under, where its list lives (if it has one) and its named
 * actions. Field offsets come from `crate::schema`.
 */
pub mod context_icon_menu;
pub mod grand_company_supply_reward;
pub mod journal_result;
pub mod repair;
pub mod request;
pub mod retainer_task_result;
pub mod select_icon_string;
pub mod select_string;
pub mod talk;

use crate::window_common::WindowType;

pub static WINDOW_TYPES: &[&WindowType] = &[
    &context_icon_menu::CONTEXT_ICON_MENU,
    &grand_company_supply_reward::GRAND_COMPANY_SUPPLY_REWARD,
    &journal_result::JOURNAL_RESULT,
    &repair::REPAIR,
    &request::REQUEST,
    &retainer_task_result::RETAINER_TASK_RESULT,
    &select_icon_string::SELECT_ICON_STRING,
    &select_string::SELECT_STRING,
    &talk::TALK,
];

/// Looks up a window type by the name the host registers it under.
pub fn window_type(name: &str) -> Option<&'static WindowType> {
    WINDOW_TYPES
        .iter()
        .copied()
        .find(|window_type| window_type.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn window_names_are_unique() {
        let mut seen = HashSet::new();
        for window_type in WINDOW_TYPES {
            assert!(seen.insert(window_type.name), "duplicate {}", window_type.name);
            assert!(!window_type.actions.is_empty(), "{} has no actions", window_type.name);
        }
    }

    #[test]
    fn window_type_lookup_by_registry_name() {
        assert_eq!(window_type("Talk").map(|w| w.name), Some("Talk"));
        assert!(window_type("NotAWindow").is_none());
    }
}
