pub mod bill;
pub mod legislator;
pub mod lobbying;
pub mod spending;

pub use bill::{Bill, BillStatus};
pub use legislator::{Chamber, Legislator};
pub use lobbying::LobbyingFiling;
pub use spending::SpendingAward;
