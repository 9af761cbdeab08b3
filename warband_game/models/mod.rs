pub mod army;
pub mod unit_group;
