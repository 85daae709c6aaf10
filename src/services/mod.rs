pub mod email;
pub mod template;
