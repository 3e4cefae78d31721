pub mod atom;
pub mod camera;
pub mod detail;
pub mod layout;
pub mod palette;
pub mod search;
pub mod touch;
pub mod viewport;

pub use atom::AtomSceneConfig;
pub use touch::TouchPoint;
pub use viewport::ViewportController;
