//! Events and their observers.
//!
//! - [`posetoggle`] – flip Idle/Move on every sprite
//! - [`switchdebug`] – toggle the debug overlay
pub mod posetoggle;
pub mod switchdebug;
