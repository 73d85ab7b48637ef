// Web page handlers (HTML rendering)

pub mod handlers;
