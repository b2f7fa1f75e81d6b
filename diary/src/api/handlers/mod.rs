pub mod diary;
pub(crate) mod health;

pub use diary::{create_diary, delete_diary, read_diaries, read_diary, update_diary};
pub use health::health_check;
