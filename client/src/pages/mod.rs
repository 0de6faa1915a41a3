//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! The page wires controller actions to components; rendering details live
//! in `components`.

pub mod board;
