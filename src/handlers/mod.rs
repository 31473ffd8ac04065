pub mod health;
pub mod posts;
pub mod register;
pub mod users;
