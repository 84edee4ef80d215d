pub mod cadet;
pub mod day;
pub mod leave;
pub mod residence;
