//! Database entity definitions.
//!
//! Entities are direct mappings to database rows.

pub mod camera;
pub mod can_consult;
pub mod disparition;
pub mod house;
pub mod room;
pub mod user;
pub mod video;

pub use camera::CameraEntity;
pub use can_consult::{GrantEntity, GrantedHouseEntity};
pub use disparition::DisparitionEntity;
pub use house::HouseEntity;
pub use room::RoomEntity;
pub use user::UserEntity;
pub use video::VideoEntity;
