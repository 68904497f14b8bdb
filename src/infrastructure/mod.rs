pub mod ids;
pub mod outcome;
pub mod providers;
