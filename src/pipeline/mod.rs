pub mod aggregate;
pub mod dashboard;
pub mod load;
pub mod page;
pub mod rasterize;
pub mod recent;
pub mod render;
pub mod selection;
pub mod ticks;
pub mod window;
