pub mod iex;
