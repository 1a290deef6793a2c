pub mod atx_heading;
pub mod bullet;
pub mod emphasis;
pub mod plain_heading;

pub use atx_heading::AtxHeading;
pub use bullet::Bullet;
pub use emphasis::Emphasis;
pub use plain_heading::PlainHeading;
