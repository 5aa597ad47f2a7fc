/// Network adapters for the Tidelift catalog API
mod chunked_lookup;
mod tidelift_client;

pub use chunked_lookup::lookup_in_chunks;
pub use tidelift_client::TideliftClient;
