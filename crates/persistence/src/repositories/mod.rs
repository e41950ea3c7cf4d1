//! Repository implementations for database operations.

pub mod camera;
pub mod can_consult;
pub mod disparition;
pub mod house;
pub mod room;
pub mod user;
pub mod video;

pub use camera::CameraRepository;
pub use can_consult::CanConsultRepository;
pub use disparition::{DisparitionRepository, HouseDisparitionRows};
pub use house::HouseRepository;
pub use room::RoomRepository;
pub use user::UserRepository;
pub use video::{RoomVideoRows, VideoRepository};
