pub mod action_stack;
pub mod calculators;
pub mod catch;
pub mod commands;
pub mod engine;
pub mod flee;
pub mod state;

#[cfg(test)]
pub(crate) mod tests;
