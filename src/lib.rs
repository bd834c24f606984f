pub mod nav;
pub mod theme;
pub mod prefs;
pub mod typing;
pub mod gallery;
pub mod filter;
pub mod net;
pub mod fx;
