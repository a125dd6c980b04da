pub mod classes;

pub mod connections;

pub use classes::configure_classes_routes;
pub use connections::configure_connections_routes;
