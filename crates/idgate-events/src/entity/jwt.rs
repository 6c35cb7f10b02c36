//! JWT snapshot handed to token pre-creation hooks.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Claims the platform is about to put into a token.
pub type JwtPayload = Map<String, Value>;

/// A token under construction. The payload is the claim set as it stands
/// before hook mutations are applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Jwt {
    /// The claim set.
    pub payload: JwtPayload,
}
