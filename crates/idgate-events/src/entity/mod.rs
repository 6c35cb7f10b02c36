//! Entity snapshots referenced by event payloads.
//!
//! Every struct here is a read-only value constructed by the platform
//! before dispatch. Hooks never mutate a received entity; desired changes
//! travel back through the `mutations` field of an allow response.

pub mod authentication;
pub mod authenticator;
pub mod identity;
pub mod jwt;
pub mod session;
pub mod user;
pub mod web3;

pub use authentication::{
    Authentication, AuthenticationContext, AuthenticationFlow, AuthenticationFlowType,
    AuthenticationMethod, Identification, IdentificationMethod,
};
pub use authenticator::{Authenticator, AuthenticatorKind, AuthenticatorType};
pub use identity::{Identity, IdentityType, LoginIdType};
pub use jwt::{Jwt, JwtPayload};
pub use session::{Session, SessionType};
pub use user::{StandardAttributesAddress, User, UserStandardAttributes};
pub use web3::UserWeb3Info;
