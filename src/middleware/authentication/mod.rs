//! Bearer token authentication against the identity provider's published keys.

mod claims;
mod error;
mod getheader;
mod jwks;
mod validator;

pub use claims::DecodedToken;
pub use error::AuthError;
pub use getheader::{extract_bearer_token, get_header};
pub use jwks::{decoding_keys, JwksCache};
pub use validator::TokenValidator;
