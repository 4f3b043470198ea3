// Data models

pub mod exam;
pub mod nutrition;
pub mod subscription;
pub mod supplement;
pub mod user;
pub mod workout;

pub use exam::*;
pub use nutrition::*;
pub use subscription::*;
pub use supplement::*;
pub use user::*;
pub use workout::*;
