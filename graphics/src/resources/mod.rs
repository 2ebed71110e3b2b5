//! Backend resources owned on behalf of the drawer.

pub mod texture;
