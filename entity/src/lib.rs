pub mod shows;
