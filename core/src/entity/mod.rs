pub mod fridge_items;
