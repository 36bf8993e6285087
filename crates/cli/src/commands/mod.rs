mod inspect;
mod locate;
mod params;

pub use inspect::InspectArgs;
pub use inspect::handle_inspect;
pub use locate::LocateArgs;
pub use locate::handle_locate;
pub use params::ParamsArgs;
pub use params::handle_params;
