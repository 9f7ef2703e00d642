pub mod cards;
pub mod carousel;
pub mod confirm_dialog;
pub mod empty_state;
pub mod error;
pub mod guard;
pub mod layout;
pub mod rotator;
