pub mod alert;
pub mod history;
pub mod metal;
pub mod response;

pub use alert::*;
pub use history::*;
pub use metal::*;
pub use response::*;
