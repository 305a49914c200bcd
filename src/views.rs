pub mod home;
pub mod map_section;

pub use home::Home;
pub use map_section::MapSection;
