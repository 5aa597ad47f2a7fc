/// Ports layer - Interfaces between the application core and the outside
///
/// The application layer depends only on these traits; the adapters layer
/// provides the implementations.
pub mod outbound;
