pub mod hasher;
pub mod id_validator;

pub use hasher::{HASHED_ID_LEN, hash_url};
pub use id_validator::IdValidator;
