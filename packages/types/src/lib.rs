pub mod poll_ledger;
