//! Four classic lab exercises as interactive console menus: matrix
//! operations, two sort/search menus, and a student record manager.
//!
//! The apps are generic over their reader/writer so integration tests can
//! run whole sessions against in-memory buffers.

pub mod apps;
