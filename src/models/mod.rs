pub mod money;
pub mod record;
pub mod user;
pub mod work_kind;

pub use money::Money;
pub use record::{Photo, WorkRecord};
pub use user::{User, UserRole};
pub use work_kind::{AreaIdCount, IndividualType, RecordMode, WorkKind};
