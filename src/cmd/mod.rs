pub mod keymap;
pub mod simulate;
