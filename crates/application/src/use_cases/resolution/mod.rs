mod record_handle;
mod resolve_name;

pub use record_handle::RecordHandle;
pub use resolve_name::{ResolutionContext, ResolveNameUseCase};
