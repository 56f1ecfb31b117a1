//! UI components.
//!
//! SYSTEM CONTEXT
//! ==============
//! The router mounts these into the host page's static containers; they read
//! router state through signals and report clicks through callbacks.

pub mod nav;
