pub mod classes;

pub mod connections;

pub use classes::ClassService;
pub use connections::ConnectionService;
