/// Domain layer - purl handling and report building
///
/// Nothing in here performs I/O; the application layer feeds it data
/// obtained through the outbound ports.
pub mod domain;
pub mod services;
