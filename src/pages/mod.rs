//! Page components for the Trellis gallery.

mod gallery;

pub use gallery::Gallery;
