pub mod collections;
pub mod imaging;
pub mod passports;
pub mod styles;
pub mod suppliers;
pub mod sustainability;
