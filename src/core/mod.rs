pub mod assignment;
pub mod bond;
pub mod enforcement;
pub mod money;
