pub mod focus;
pub mod menu;
pub mod nav;
pub mod touch;
