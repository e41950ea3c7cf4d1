//! Domain models for Objura.

pub mod camera;
pub mod can_consult;
pub mod disparition;
pub mod house;
pub mod room;
pub mod status;
pub mod user;
pub mod video;

pub use camera::{Camera, CameraSummary};
pub use can_consult::{CanConsult, CanConsultDetail};
pub use disparition::{
    CreateDisparitionRequest, CreateDisparitionResponse, Disparition, DisparitionDetail,
    NewDisparition,
};
pub use house::House;
pub use room::{Room, RoomSummary};
pub use status::StatusResponse;
pub use user::{CreateUserRequest, User};
pub use video::{RoomVideo, RoomVideosResponse, Video, VideoListItem};
