pub mod embed;
pub mod profile_db;
pub mod recommend;
pub mod similarity;
