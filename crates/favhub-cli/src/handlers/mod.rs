pub mod fav_add;
pub mod fav_list;
pub mod fav_remove;
pub mod search;
pub mod session;
