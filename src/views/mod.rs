pub mod drink;
