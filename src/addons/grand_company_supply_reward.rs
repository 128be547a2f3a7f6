//! Expert delivery confirmation window.

use crate::schema::{self, grand_company_supply_reward as layout};
use crate::window_common::{ActionDescriptor, WindowType};

pub static GRAND_COMPANY_SUPPLY_REWARD: WindowType = WindowType {
    name: "GrandCompanySupplyReward",
    listener_offset: schema::UNIT_BASE_EVENT_LISTENER,
    list: None,
    actions: &[
        ActionDescriptor::button(
            "grand_company_expert_delivery_deliver",
            layout::DELIVER_BUTTON,
            0,
        ),
        ActionDescriptor::button(
            "grand_company_expert_delivery_cancel",
            layout::CANCEL_BUTTON,
            1,
        ),
    ],
};
