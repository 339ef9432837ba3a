pub mod config;
pub mod controller;
pub mod dispatch;
pub mod error;
pub mod geometry;
pub mod ghost;
pub mod hal;
pub mod indicator;
pub mod keycodes;
pub mod keymap;
pub mod layers;
pub mod sensor;
pub mod sim;
pub mod trace;
// cmd and reports are binary modules (in main.rs).
