//! Test modules for the booking ledger contract.

mod utils;

mod refund;
