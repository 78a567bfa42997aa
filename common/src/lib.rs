// Blockfrost node common library - main library exports

pub mod configuration;
pub mod credentials;
pub mod messages;
pub mod node_error;
pub mod normalize;
pub mod pagination;
pub mod request;
pub mod stake_address;
pub mod transport;

// Flattened re-exports
pub use self::credentials::{Credentials, Network};
pub use self::node_error::{ExecuteError, NodeError};
pub use self::normalize::{JsonObject, NodeOutput, OutputItem};
pub use self::request::OperationRequest;
