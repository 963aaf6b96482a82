pub mod ride_along;
