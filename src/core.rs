pub mod comparator;
pub mod linked_list;
pub mod search;
