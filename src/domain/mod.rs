//! Domain Layer
//!
//! Pure contracts, no IO. The entity type `I` and its stored
//! representation `O` stay opaque; everything here is expressed as
//! capability traits the pipeline and infrastructure layers implement.
//!
//! ## Design Principles
//!
//! 1. **No IO** - this layer never touches the file system
//! 2. **Ports & Adapters** - all backends hide behind trait-defined ports
//! 3. **Opaque types** - no structural assumptions about `I` or `O`

pub mod ports;
