pub mod accrual;
pub mod breakdown;
