pub mod mapdata;
pub mod prelude;
pub mod repository;
pub mod router;
pub mod shared;
pub mod tour;
