pub mod address_report;

pub use address_report::AddressReport;
