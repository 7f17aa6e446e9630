/// The compiled stylesheet, embedded into the window head at startup.
pub const STYLE: &str = include_str!(concat!(env!("OUT_DIR"), "/style.css"));
