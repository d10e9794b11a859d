//! Shared UI building blocks: layout math and reusable widgets.

pub mod layout;
pub mod widgets;
