pub mod connection;
pub mod dispatch;
pub mod enlace;
pub mod estado;
pub mod output;
pub mod periodo;

pub use dispatch::dispatch;
