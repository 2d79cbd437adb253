pub mod item;

#[cfg(test)]
#[path = "item_test.rs"]
mod item_test;
