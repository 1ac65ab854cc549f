pub mod trail;
pub mod sprite;
pub mod viewer;
