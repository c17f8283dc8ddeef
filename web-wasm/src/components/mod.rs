pub mod action_buttons;
pub mod header;
pub mod map_panel;
pub mod qr_panel;
pub mod settings_panel;
pub mod work_order_form;
