pub mod company;
pub mod direction;
pub mod document;
pub mod money;

pub use company::{strip_whitespace, CompanyIdentity, IdentityError};
pub use direction::{Confidence, Direction, OperationDirectionResult};
pub use document::{ImportedOperation, ParsedDocument};
pub use money::Money;
