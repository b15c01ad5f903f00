pub mod baseline;
pub mod linear;
pub mod remote;

pub use baseline::BaselineScoreModel;
pub use linear::LinearScoreModel;
pub use remote::RemoteScoreModel;
