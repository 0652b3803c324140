#[path = "utils/color.rs"]
mod color;

#[path = "utils/datetime.rs"]
mod datetime;
