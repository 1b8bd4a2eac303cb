pub mod emi;
pub mod simulate;
