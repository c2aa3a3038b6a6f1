pub mod api;
pub mod cli;
pub mod models;
pub mod output;

#[cfg(test)]
mod test;
