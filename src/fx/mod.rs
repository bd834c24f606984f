//! Decorative effects: scroll affordances, reveal-on-scroll, pointer
//! parallax, and image fade-in. All pure state advanced from the frame
//! loop; nothing here touches the GUI directly.

pub mod fade;
pub mod parallax;
pub mod reveal;
pub mod scroll;
