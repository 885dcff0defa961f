pub mod blog_controller;
pub mod system_controller;
