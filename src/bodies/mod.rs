mod axes;
mod body;
mod store;

pub use self::axes::Axes;
pub use self::body::Body;
pub use self::store::BodyStore;
